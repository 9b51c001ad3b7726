//! Feature grid.

use leptos::*;

use crate::components::{Glyph, MotionDiv};
use crate::icons::Icon;
use crate::motion::{MotionSpec, MotionState, Stagger, Transition, Trigger, HEADING, SPIN};
use crate::types::FeatureDescriptor;
use crate::COMPANY_NAME;

pub const FEATURES: [FeatureDescriptor; 6] = [
    FeatureDescriptor {
        icon: Icon::Shield,
        title: "Enterprise Security",
        description: "Bank-level encryption and compliance",
    },
    FeatureDescriptor {
        icon: Icon::Zap,
        title: "Lightning Fast",
        description: "Optimized performance for high-volume operations",
    },
    FeatureDescriptor {
        icon: Icon::Cloud,
        title: "Cloud Native",
        description: "Scalable infrastructure that grows with you",
    },
    FeatureDescriptor {
        icon: Icon::Lock,
        title: "Data Privacy",
        description: "GDPR compliant with advanced privacy controls",
    },
    FeatureDescriptor {
        icon: Icon::BarChart3,
        title: "Advanced Analytics",
        description: "Real-time insights and comprehensive reporting",
    },
    FeatureDescriptor {
        icon: Icon::Users,
        title: "24/7 Support",
        description: "Dedicated team ready to help anytime",
    },
];

const GRID: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0),
    MotionState::NONE.opacity(1.0),
    Transition::new(0.3),
    Trigger::InView { once: true },
)
.stagger(Stagger::new(0.2, 0.1));

const CARD: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0).scale(0.8),
    MotionState::NONE.opacity(1.0).scale(1.0),
    Transition::new(0.5),
    Trigger::Inherit,
)
.hover(MotionState::NONE.scale(1.05));

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-6 bg-white">
            <div class="max-w-6xl mx-auto">
                <MotionDiv spec=HEADING class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-cyan-500 to-blue-600 bg-clip-text text-transparent mb-4">
                        "Why Choose " {COMPANY_NAME}
                    </h2>
                    <p class="text-xl text-gray-700">"Powerful features built for business efficiency"</p>
                </MotionDiv>

                <MotionDiv spec=GRID class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <MotionDiv
                                    spec=CARD
                                    index=index
                                    class="glass-light rounded-xl p-6 border border-cyan-300 glow-bright"
                                >
                                    <MotionDiv
                                        spec=SPIN
                                        class="w-12 h-12 rounded-lg gradient-primary flex items-center justify-center mb-4"
                                    >
                                        <Glyph icon=feature.icon class="w-6 h-6 text-white"/>
                                    </MotionDiv>
                                    <h3 class="text-lg font-bold text-gray-900 mb-2">{feature.title}</h3>
                                    <p class="text-gray-700">{feature.description}</p>
                                </MotionDiv>
                            }
                        })
                        .collect_view()}
                </MotionDiv>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionPhase, ENTRANCE_FIELDS};

    #[test]
    fn test_six_features() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(FEATURES[0].title, "Enterprise Security");
        assert_eq!(FEATURES[5].title, "24/7 Support");
    }

    #[test]
    fn test_card_entrance_only_fades_and_scales() {
        assert_eq!(
            CARD.hidden.changed_fields(&CARD.visible),
            vec!["opacity", "scale"]
        );
        for field in GRID.hidden.changed_fields(&GRID.visible) {
            assert!(ENTRANCE_FIELDS.contains(&field));
        }
    }

    #[test]
    fn test_last_card_waits_for_stagger() {
        let stagger = GRID.stagger.unwrap();
        let entering = MotionPhase {
            visible: true,
            ..Default::default()
        };
        let style = CARD.style(entering, stagger.delay_for(FEATURES.len() - 1));
        assert!(style.contains("transition-delay: 700ms"));
    }
}
