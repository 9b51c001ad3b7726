//! Fixed navigation bar.

use leptos::*;

use crate::components::{MotionButton, MotionDiv, MotionLink};
use crate::motion::{MotionSpec, MotionState, Transition, Trigger, PRESSABLE};
use crate::services::scroll_to_anchor;
use crate::types::NavLink;
use crate::{COMPANY_NAME, CONTACT_ANCHOR, LOGO_PATH};

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Products" },
    NavLink { label: "Features" },
    NavLink { label: "About" },
    NavLink { label: "Contact" },
];

/// Slides down from above the viewport on mount.
const BAR: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.y(-100.0),
    MotionState::NONE.y(0.0),
    Transition::new(0.5),
    Trigger::Mount,
);

const LOGO: MotionSpec = MotionSpec::gestures().hover(MotionState::NONE.scale(1.05));

const LINK: MotionSpec = MotionSpec::gestures().hover(MotionState::NONE.color("#0891B2"));

#[component]
pub fn Navbar() -> impl IntoView {
    let on_get_started = Callback::new(move |_: ev::MouseEvent| {
        if let Err(e) = scroll_to_anchor(CONTACT_ANCHOR) {
            log::debug!("{}", e);
        }
    });

    view! {
        <MotionDiv spec=BAR class="fixed w-full top-0 z-50 glass-light border-b border-cyan-300">
            <nav class="max-w-6xl mx-auto px-6 py-4 flex justify-between items-center">
                <MotionDiv spec=LOGO class="flex items-center gap-3">
                    <img src=LOGO_PATH alt=COMPANY_NAME class="w-10 h-10 rounded-lg"/>
                    <span class="text-2xl font-bold gradient-primary bg-clip-text text-transparent">
                        {COMPANY_NAME}
                    </span>
                </MotionDiv>

                <div class="hidden md:flex gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <MotionLink
                                    spec=LINK
                                    href=link.href()
                                    class="text-gray-700 font-medium transition-colors hover:text-cyan-600"
                                >
                                    {link.label}
                                </MotionLink>
                            }
                        })
                        .collect_view()}
                </div>

                <MotionButton
                    spec=PRESSABLE
                    class="gradient-primary text-white px-6 py-2 rounded-lg font-semibold glow-bright"
                    on_click=on_get_started
                >
                    "Get Started"
                </MotionButton>
            </nav>
        </MotionDiv>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ENTRANCE_FIELDS;

    #[test]
    fn test_four_links_in_display_order() {
        let labels: Vec<&str> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, ["Products", "Features", "About", "Contact"]);
    }

    #[test]
    fn test_hrefs_match_lowercased_labels() {
        for link in NAV_LINKS {
            assert_eq!(link.href(), format!("#{}", link.label.to_lowercase()));
        }
        assert_eq!(NAV_LINKS[0].href(), "#products");
    }

    #[test]
    fn test_contact_link_matches_cta_target() {
        assert!(NAV_LINKS.iter().any(|link| link.href() == CONTACT_ANCHOR));
    }

    #[test]
    fn test_bar_entrance_only_moves() {
        for field in BAR.hidden.changed_fields(&BAR.visible) {
            assert!(ENTRANCE_FIELDS.contains(&field));
        }
    }
}
