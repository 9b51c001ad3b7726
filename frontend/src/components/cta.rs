//! Contact call-to-action panel.

use leptos::*;

use crate::components::{Glyph, MotionDiv};
use crate::icons::Icon;
use crate::motion::{MotionSpec, MotionState, Transition, Trigger, SPIN};
use crate::types::ContactMethod;
use crate::SUPPORT_PHONE;

pub const CONTACT_METHODS: [ContactMethod; 2] = [
    ContactMethod {
        icon: Icon::Phone,
        title: "Phone",
        lines: &[SUPPORT_PHONE],
    },
    ContactMethod {
        icon: Icon::MapPin,
        title: "Location",
        lines: &["Kigali City", "Kinyinya Sector, Rwanda"],
    },
];

const PANEL: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0).y(50.0),
    MotionState::NONE.opacity(1.0).y(0.0),
    Transition::new(0.8),
    Trigger::InView { once: false },
);

const METHODS: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0).y(20.0),
    MotionState::NONE.opacity(1.0).y(0.0),
    Transition::new(0.6).delay(0.3),
    Trigger::InView { once: false },
);

const METHOD_CARD: MotionSpec = MotionSpec::gestures().hover(MotionState::NONE.scale(1.05));

#[component]
pub fn Cta() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-6 bg-gradient-to-br from-slate-900 via-blue-900 to-slate-900">
            <MotionDiv spec=PANEL class="max-w-4xl mx-auto relative">
                <div class="absolute -inset-20 gradient-bright-cyan blur-3xl opacity-30 rounded-full"></div>
                <div class="relative z-10 gradient-dark-bright rounded-3xl p-12 md:p-16 text-white">
                    <div class="text-center mb-12">
                        <h2 class="text-4xl md:text-5xl font-bold mb-4">"Contact Us"</h2>
                        <p class="text-lg opacity-95 leading-relaxed">
                            "Get in touch with our team. We're here to help your business succeed."
                        </p>
                    </div>

                    <MotionDiv spec=METHODS class="flex gap-8 justify-center flex-wrap mt-12">
                        {CONTACT_METHODS
                            .iter()
                            .map(|method| view! { <ContactCard method=*method/> })
                            .collect_view()}
                    </MotionDiv>
                </div>
            </MotionDiv>
        </section>
    }
}

#[component]
fn ContactCard(method: ContactMethod) -> impl IntoView {
    let last = method.lines.len().saturating_sub(1);

    view! {
        <MotionDiv
            spec=METHOD_CARD
            class="flex flex-col items-center gap-3 bg-white/15 backdrop-blur-sm rounded-2xl p-6 border border-white/25"
        >
            <MotionDiv
                spec=SPIN
                class="w-12 h-12 rounded-full bg-white/20 flex items-center justify-center"
            >
                <Glyph icon=method.icon class="w-6 h-6 text-white"/>
            </MotionDiv>
            <h3 class="text-lg font-bold">{method.title}</h3>
            <p class="text-sm opacity-90 text-center">
                {method
                    .lines
                    .iter()
                    .enumerate()
                    .map(|(i, line)| {
                        view! {
                            {*line}
                            {(i < last).then(|| view! { <br/> })}
                        }
                    })
                    .collect_view()}
            </p>
        </MotionDiv>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ENTRANCE_FIELDS;

    #[test]
    fn test_two_contact_methods() {
        let titles: Vec<&str> = CONTACT_METHODS.iter().map(|m| m.title).collect();
        assert_eq!(titles, ["Phone", "Location"]);
        assert_eq!(CONTACT_METHODS[1].lines.len(), 2);
    }

    #[test]
    fn test_methods_enter_after_panel() {
        assert!(METHODS.transition.delay > PANEL.transition.delay);
        for spec in [PANEL, METHODS] {
            for field in spec.hidden.changed_fields(&spec.visible) {
                assert!(ENTRANCE_FIELDS.contains(&field), "{}", field);
            }
        }
    }
}
