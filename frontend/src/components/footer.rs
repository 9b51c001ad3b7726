//! Footer component

use leptos::*;

use crate::components::{Glyph, MotionDiv, MotionLink, MotionListItem};
use crate::icons::Icon;
use crate::motion::{MotionSpec, MotionState, Transition, Trigger};
use crate::types::{FooterContact, SocialLink};
use crate::{
    COMPANY_LEGAL_NAME, COMPANY_NAME, CONTACT_ADDRESS, CONTACT_EMAIL, CONTACT_PHONE,
    COPYRIGHT_YEAR, LOGO_PATH,
};

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: Icon::Github,
        label: "GitHub",
        href: "#",
    },
    SocialLink {
        icon: Icon::Linkedin,
        label: "LinkedIn",
        href: "#",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter",
        href: "#",
    },
];

pub const PRODUCT_LINKS: [&str; 3] = [
    "Inventory Management",
    "Payment Processing",
    "AI Integration",
];

pub const COMPANY_LINKS: [&str; 4] = ["About Us", "Blog", "Careers", "Contact"];

pub const CONTACT_LINES: [FooterContact; 3] = [
    FooterContact {
        icon: Icon::Mail,
        text: CONTACT_EMAIL,
    },
    FooterContact {
        icon: Icon::Phone,
        text: CONTACT_PHONE,
    },
    FooterContact {
        icon: Icon::MapPin,
        text: CONTACT_ADDRESS,
    },
];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];

const FADE: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0),
    MotionState::NONE.opacity(1.0),
    Transition::new(0.6),
    Trigger::InView { once: false },
);

const DIVIDER: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.scale_x(0.0),
    MotionState::NONE.scale_x(1.0),
    Transition::new(0.6),
    Trigger::InView { once: false },
);

const SOCIAL: MotionSpec =
    MotionSpec::gestures().hover(MotionState::NONE.scale(1.2).rotate(360.0));

const LIST_ITEM: MotionSpec =
    MotionSpec::gestures().hover(MotionState::NONE.x(5.0).color("#0F766E"));

const LEGAL: MotionSpec = MotionSpec::gestures().hover(MotionState::NONE.color("#06B6D4"));

/// `© <year> <company>. All rights reserved.`
pub fn copyright_line() -> String {
    format!(
        "© {} {}. All rights reserved.",
        COPYRIGHT_YEAR, COMPANY_LEGAL_NAME
    )
}

/// The address may wrap, so its row aligns to the top; single-line rows
/// are centered.
fn contact_row_class(contact: &FooterContact) -> &'static str {
    if contact.icon == Icon::MapPin {
        "flex items-start gap-2 hover:text-emerald-400 cursor-pointer"
    } else {
        "flex items-center gap-2 hover:text-emerald-400 cursor-pointer"
    }
}

fn contact_glyph_class(contact: &FooterContact) -> &'static str {
    if contact.icon == Icon::MapPin {
        "w-5 h-5 mt-1"
    } else {
        "w-5 h-5"
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gradient-to-b from-gray-900 to-black text-white py-12 px-6 border-t border-cyan-400/40">
            <MotionDiv spec=FADE class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-4 gap-8 mb-8">
                    <div>
                        <div class="flex items-center gap-2 mb-4">
                            <img src=LOGO_PATH alt=COMPANY_NAME class="w-8 h-8 rounded"/>
                            <span class="text-xl font-bold">{COMPANY_NAME}</span>
                        </div>
                        <p class="text-gray-400 mb-4">
                            "Revolutionizing business operations with intelligent software solutions."
                        </p>
                        <div class="flex gap-3">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <MotionLink
                                            spec=SOCIAL
                                            href=social.href
                                            label=social.label
                                            class="w-10 h-10 rounded-full gradient-primary flex items-center justify-center glow-teal hover:opacity-80 transition-opacity"
                                        >
                                            <Glyph icon=social.icon class="w-5 h-5"/>
                                        </MotionLink>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <LinkColumn title="Products" items=&PRODUCT_LINKS/>
                    <LinkColumn title="Company" items=&COMPANY_LINKS/>

                    <div>
                        <h4 class="font-bold text-lg mb-4">"Contact"</h4>
                        <div class="space-y-2 text-gray-400">
                            {CONTACT_LINES
                                .iter()
                                .map(|contact| {
                                    view! {
                                        <div class=contact_row_class(contact)>
                                            <Glyph icon=contact.icon class=contact_glyph_class(contact)/>
                                            <span>{contact.text}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <MotionDiv spec=DIVIDER class="border-t border-cyan-400/40 origin-left">
                    ""
                </MotionDiv>

                <div class="mt-8 pt-8 text-center text-gray-400 flex flex-col md:flex-row justify-between items-center">
                    <p>{copyright_line()}</p>
                    <div class="flex gap-6 mt-4 md:mt-0">
                        {LEGAL_LINKS
                            .iter()
                            .map(|item| {
                                view! {
                                    <MotionLink spec=LEGAL href="#" class="transition-colors hover:text-cyan-400">
                                        {*item}
                                    </MotionLink>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </MotionDiv>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-bold text-lg mb-4">{title}</h4>
            <ul class="space-y-2 text-gray-400">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <MotionListItem spec=LIST_ITEM class="cursor-pointer transition-colors hover:text-teal-400">
                                {*item}
                            </MotionListItem>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ENTRANCE_FIELDS;

    #[test]
    fn test_link_counts() {
        assert_eq!(SOCIAL_LINKS.len(), 3);
        assert_eq!(PRODUCT_LINKS.len(), 3);
        assert_eq!(COMPANY_LINKS.len(), 4);
        assert_eq!(CONTACT_LINES.len(), 3);
        assert_eq!(LEGAL_LINKS.len(), 3);
    }

    #[test]
    fn test_only_address_row_aligns_to_top() {
        let classes: Vec<&str> = CONTACT_LINES.iter().map(contact_row_class).collect();
        assert!(classes[0].contains("items-center"));
        assert!(classes[1].contains("items-center"));
        assert!(classes[2].contains("items-start"));
        assert_eq!(contact_glyph_class(&CONTACT_LINES[2]), "w-5 h-5 mt-1");
    }

    #[test]
    fn test_copyright_mentions_year_and_company_once() {
        let line = copyright_line();
        assert_eq!(line.matches(&COPYRIGHT_YEAR.to_string()).count(), 1);
        assert_eq!(line.matches(COMPANY_LEGAL_NAME).count(), 1);
        assert_eq!(line, "© 2026 Transeffex Ltd. All rights reserved.");
    }

    #[test]
    fn test_social_links_are_placeholders_with_names() {
        for social in SOCIAL_LINKS {
            assert_eq!(social.href, "#");
            assert!(!social.label.is_empty());
        }
    }

    #[test]
    fn test_divider_only_scales() {
        assert_eq!(DIVIDER.hidden.changed_fields(&DIVIDER.visible), vec!["scaleX"]);
        for field in FADE.hidden.changed_fields(&FADE.visible) {
            assert!(ENTRANCE_FIELDS.contains(&field));
        }
    }
}
