//! Product cards.

use leptos::*;

use crate::components::{Glyph, MotionButton, MotionDiv};
use crate::icons::Icon;
use crate::motion::{MotionSpec, MotionState, Stagger, Transition, Trigger, HEADING};
use crate::types::ProductDescriptor;

pub const PRODUCTS: [ProductDescriptor; 3] = [
    ProductDescriptor {
        icon: Icon::BarChart3,
        title: "Inventory Management",
        description: "Real-time inventory tracking and optimization. Monitor stock levels, \
                      automate reordering, and reduce waste with AI-powered forecasting.",
        gradient: "from-cyan-500 to-cyan-600",
        glow: "glow-bright",
    },
    ProductDescriptor {
        icon: Icon::CreditCard,
        title: "Payment Management",
        description: "Secure, seamless payment processing. Support multiple payment methods, \
                      instant reconciliation, and fraud detection for peace of mind.",
        gradient: "from-blue-600 to-blue-700",
        glow: "glow-blue",
    },
    ProductDescriptor {
        icon: Icon::Brain,
        title: "AI & Algorithms",
        description: "Machine learning integration for predictive analytics. Optimize operations, \
                      identify trends, and make data-driven decisions faster.",
        gradient: "from-cyan-600 to-cyan-700",
        glow: "glow-cyan",
    },
];

const GRID: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0),
    MotionState::NONE.opacity(1.0),
    Transition::new(0.3),
    Trigger::InView { once: true },
)
.stagger(Stagger::new(0.1, 0.2));

const CARD: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0).y(50.0),
    MotionState::NONE.opacity(1.0).y(0.0),
    Transition::new(0.6),
    Trigger::Inherit,
)
.hover(MotionState::NONE.y(-10.0));

const ICON_TILE: MotionSpec =
    MotionSpec::gestures().hover(MotionState::NONE.scale(1.1).rotate(10.0));

const LEARN_MORE: MotionSpec = MotionSpec::gestures().hover(MotionState::NONE.x(5.0));

#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id="products" class="py-20 px-6 bg-gradient-to-b from-white to-blue-50">
            <div class="max-w-6xl mx-auto">
                <MotionDiv spec=HEADING class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold bg-gradient-to-r from-blue-600 to-cyan-500 bg-clip-text text-transparent mb-4">
                        "Our Products"
                    </h2>
                    <p class="text-xl text-gray-700">
                        "Enterprise-grade solutions designed for modern businesses"
                    </p>
                </MotionDiv>

                <MotionDiv spec=GRID class="grid md:grid-cols-3 gap-8">
                    {PRODUCTS
                        .iter()
                        .enumerate()
                        .map(|(index, product)| view! { <ProductCard product=*product index=index/> })
                        .collect_view()}
                </MotionDiv>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: ProductDescriptor, index: usize) -> impl IntoView {
    view! {
        <MotionDiv
            spec=CARD
            index=index
            class=format!("card-hover glass-light rounded-2xl p-8 border border-cyan-300 {}", product.glow)
        >
            <MotionDiv
                spec=ICON_TILE
                class=format!(
                    "w-16 h-16 rounded-xl bg-gradient-to-br {} flex items-center justify-center mb-6 {}",
                    product.gradient,
                    product.glow,
                )
            >
                <Glyph icon=product.icon class="w-8 h-8 text-white"/>
            </MotionDiv>
            <h3 class="text-2xl font-bold text-gray-900 mb-3">{product.title}</h3>
            <p class="text-gray-700 leading-relaxed">{product.description}</p>
            <MotionButton
                spec=LEARN_MORE
                class="mt-6 text-cyan-600 font-semibold flex items-center gap-2 hover:text-cyan-700 transition-colors"
            >
                "Learn More →"
            </MotionButton>
        </MotionDiv>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ENTRANCE_FIELDS;

    #[test]
    fn test_three_products() {
        assert_eq!(PRODUCTS.len(), 3);
        let titles: Vec<&str> = PRODUCTS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            ["Inventory Management", "Payment Management", "AI & Algorithms"]
        );
    }

    #[test]
    fn test_style_tokens_are_tailwind_classes() {
        for product in PRODUCTS {
            assert!(product.gradient.starts_with("from-"));
            assert!(product.gradient.contains(" to-"));
            assert!(product.glow.starts_with("glow-"));
        }
    }

    #[test]
    fn test_card_entrance_keeps_content() {
        for spec in [GRID, CARD] {
            for field in spec.hidden.changed_fields(&spec.visible) {
                assert!(ENTRANCE_FIELDS.contains(&field), "{}", field);
            }
        }
    }

    #[test]
    fn test_card_lifts_on_hover() {
        assert_eq!(CARD.hover, Some(MotionState::NONE.y(-10.0)));
    }
}
