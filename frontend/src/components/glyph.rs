//! Icon rendering.

use leptos::*;

use crate::icons::Icon;

#[component]
pub fn Glyph(icon: Icon, #[prop(into)] class: String) -> impl IntoView {
    view! { <span class="inline-flex shrink-0" inner_html=icon.svg(&class)></span> }
}
