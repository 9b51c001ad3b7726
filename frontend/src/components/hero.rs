//! Hero section component

use leptos::*;

use crate::components::{Glyph, MotionButton, MotionDiv};
use crate::icons::Icon;
use crate::motion::{MotionSpec, MotionState, Stagger, Transition, Trigger, PRESSABLE};
use crate::COMPANY_LEGAL_NAME;

const CONTAINER: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0),
    MotionState::NONE.opacity(1.0),
    Transition::new(0.5),
    Trigger::Mount,
)
.stagger(Stagger::new(0.3, 0.2));

const ITEM: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0).y(20.0),
    MotionState::NONE.opacity(1.0).y(0.0),
    Transition::new(0.8),
    Trigger::Inherit,
);

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center pt-20 px-6 bg-gradient-to-br from-white via-cyan-50 to-blue-50">
            <MotionDiv spec=CONTAINER class="text-center max-w-4xl">
                <MotionDiv spec=ITEM index=0>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-blue-600 via-cyan-500 to-blue-500 bg-clip-text text-transparent">
                        "Empower Your Business with "
                        <span class="bg-gray-900 text-white px-4 py-4 rounded-lg">"Smart Software"</span>
                    </h1>
                </MotionDiv>

                <MotionDiv spec=ITEM index=1>
                    <p class="text-xl text-gray-700 mb-8 leading-relaxed">
                        {COMPANY_LEGAL_NAME}
                        " provides cutting-edge business software solutions including "
                        "inventory management, payment processing, and AI-powered algorithms to "
                        "transform your operations."
                    </p>
                </MotionDiv>

                <MotionDiv spec=ITEM index=2 class="flex gap-4 justify-center flex-wrap">
                    <MotionButton
                        spec=PRESSABLE
                        class="gradient-primary text-white px-8 py-4 rounded-lg font-bold text-lg flex items-center gap-2 group glow-bright"
                    >
                        "Start Free Trial"
                        <Glyph icon=Icon::ArrowRight class="w-6 h-6 group-hover:translate-x-2 transition-transform"/>
                    </MotionButton>
                    <MotionButton
                        spec=PRESSABLE
                        class="border-2 border-cyan-500 text-cyan-600 px-8 py-4 rounded-lg font-bold text-lg hover:bg-cyan-50 transition-colors"
                    >
                        "Watch Demo"
                    </MotionButton>
                </MotionDiv>

                <MotionDiv spec=ITEM index=3 class="mt-16 text-center">
                    <p class="text-lg text-slate-600 max-w-2xl mx-auto animate-pulseSoft">
                        "✨ Trusted by businesses across Africa"
                    </p>
                </MotionDiv>
            </MotionDiv>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ENTRANCE_FIELDS;

    #[test]
    fn test_items_follow_container() {
        assert_eq!(ITEM.trigger, Trigger::Inherit);
        assert!(CONTAINER.stagger.is_some());
    }

    #[test]
    fn test_item_delays_are_staggered() {
        let stagger = CONTAINER.stagger.unwrap();
        let delays: Vec<f64> = (0..4).map(|i| stagger.delay_for(i)).collect();
        assert!(delays.windows(2).all(|pair| pair[1] > pair[0]));
        assert!((delays[0] - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_entrances_only_fade_and_move() {
        for spec in [CONTAINER, ITEM] {
            for field in spec.hidden.changed_fields(&spec.visible) {
                assert!(ENTRANCE_FIELDS.contains(&field), "{}", field);
            }
        }
    }
}
