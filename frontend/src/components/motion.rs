//! Motion runtime.
//!
//! Binds a [`MotionSpec`] to an element: tracks whether it is visible,
//! settled, hovered or pressed and exposes the resolved inline style.
//! Containers with a stagger share their visibility with children through
//! [`StaggerContext`].

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::motion::{MotionPhase, MotionSpec, SettleClock, Stagger, Trigger};
use crate::services::{after_next_paint, observe_in_view, scroll_to_anchor};

/// Provided by a staggered container to its animated children.
#[derive(Clone, Copy)]
pub struct StaggerContext {
    pub visible: Signal<bool>,
    pub stagger: Stagger,
}

/// Reactive state of one animated element.
#[derive(Clone, Copy)]
pub struct MotionBinding {
    spec: MotionSpec,
    /// Set by this element's own trigger.
    shown: RwSignal<bool>,
    visible: Signal<bool>,
    settled: RwSignal<bool>,
    hovered: RwSignal<bool>,
    pressed: RwSignal<bool>,
    /// Entrance delay in seconds.
    delay: f64,
}

impl MotionBinding {
    /// Must be called inside a component body so the parent's
    /// [`StaggerContext`] is reachable.
    pub fn new(spec: MotionSpec, index: usize) -> Self {
        let shown = create_rw_signal(spec.trigger == Trigger::Always);
        let settled = create_rw_signal(spec.trigger == Trigger::Always);

        let (visible, delay) = match (spec.trigger, use_context::<StaggerContext>()) {
            (Trigger::Inherit, Some(parent)) => (parent.visible, parent.stagger.delay_for(index)),
            (Trigger::Inherit, None) => {
                log::warn!("Staggered element rendered outside a staggered container");
                shown.set(true);
                (shown.into(), spec.transition.delay)
            }
            _ => (shown.into(), spec.transition.delay),
        };

        let binding = Self {
            spec,
            shown,
            visible,
            settled,
            hovered: create_rw_signal(false),
            pressed: create_rw_signal(false),
            delay,
        };

        if let Some(stagger) = spec.stagger {
            provide_context(StaggerContext { visible, stagger });
        }

        if spec.trigger != Trigger::Always {
            let settle_ms = spec.transition.total_ms(delay);
            let clock = store_value(SettleClock::default());
            // Replacing or clearing the handle cancels the pending timer.
            let pending = store_value(None::<Timeout>);

            create_effect(move |_| {
                if visible.get() {
                    let mut ticket = 0;
                    clock.update_value(|c| ticket = c.show());
                    settled.set(false);
                    pending.set_value(Some(Timeout::new(settle_ms, move || {
                        if clock.try_update_value(|c| c.elapse(ticket)) == Some(true) {
                            let _ = settled.try_set(true);
                        }
                    })));
                } else {
                    clock.update_value(|c| c.hide());
                    pending.set_value(None);
                    settled.set(false);
                }
            });
        }

        binding
    }

    /// Arm `Mount` and `InView` triggers once the element exists.
    pub fn attach(&self, node: NodeRef<html::Div>) {
        let shown = self.shown;
        match self.spec.trigger {
            Trigger::Mount => node.on_load(move |_| {
                if let Err(e) = after_next_paint(move || {
                    let _ = shown.try_set(true);
                }) {
                    log::warn!("{}", e);
                    shown.set(true);
                }
            }),
            Trigger::InView { once } => node.on_load(move |element| {
                if let Err(e) = observe_in_view(&element, once, move |inside| {
                    let _ = shown.try_set(inside);
                }) {
                    log::warn!("{}", e);
                    shown.set(true);
                }
            }),
            Trigger::Always | Trigger::Inherit => {}
        }
    }

    pub fn style(&self) -> String {
        let phase = MotionPhase {
            visible: self.visible.get(),
            settled: self.settled.get(),
            hovered: self.hovered.get(),
            pressed: self.pressed.get(),
        };
        self.spec.style(phase, self.delay)
    }

    pub fn hover(&self, hovered: bool) {
        self.hovered.set(hovered);
        if !hovered {
            self.pressed.set(false);
        }
    }

    pub fn press(&self, pressed: bool) {
        self.pressed.set(pressed);
    }
}

/// Animated `<div>`.
#[component]
pub fn MotionDiv(
    spec: MotionSpec,
    #[prop(into, optional)] class: String,
    /// Position among the container's staggered children.
    #[prop(optional)]
    index: usize,
    children: Children,
) -> impl IntoView {
    let node = create_node_ref::<html::Div>();
    let motion = MotionBinding::new(spec, index);
    motion.attach(node);

    view! {
        <div
            node_ref=node
            class=class
            style=move || motion.style()
            on:mouseenter=move |_| motion.hover(true)
            on:mouseleave=move |_| motion.hover(false)
            on:mousedown=move |_| motion.press(true)
            on:mouseup=move |_| motion.press(false)
        >
            {children()}
        </div>
    }
}

/// Animated `<button>`.
///
/// Takes gesture or staggered specs only; `Mount` and `InView` need a
/// [`MotionDiv`].
#[component]
pub fn MotionButton(
    spec: MotionSpec,
    #[prop(into, optional)] class: String,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    debug_assert!(
        !spec.trigger.needs_element(),
        "{:?} needs a MotionDiv",
        spec.trigger
    );
    let motion = MotionBinding::new(spec, 0);

    view! {
        <button
            type="button"
            class=class
            style=move || motion.style()
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
            on:mouseenter=move |_| motion.hover(true)
            on:mouseleave=move |_| motion.hover(false)
            on:mousedown=move |_| motion.press(true)
            on:mouseup=move |_| motion.press(false)
        >
            {children()}
        </button>
    }
}

/// Animated `<a>`. Fragment hrefs scroll smoothly instead of jumping.
///
/// Takes gesture or staggered specs only, like [`MotionButton`].
#[component]
pub fn MotionLink(
    spec: MotionSpec,
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    /// Accessible name for icon-only links.
    #[prop(optional)]
    label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    debug_assert!(
        !spec.trigger.needs_element(),
        "{:?} needs a MotionDiv",
        spec.trigger
    );
    let motion = MotionBinding::new(spec, 0);
    let target = href.clone();

    view! {
        <a
            href=href
            class=class
            aria-label=label
            style=move || motion.style()
            on:click=move |ev| {
                // A bare "#" is a placeholder and keeps the default behaviour.
                if target.len() > 1 && target.starts_with('#') {
                    ev.prevent_default();
                    if let Err(e) = scroll_to_anchor(&target) {
                        log::debug!("{}", e);
                    }
                }
            }
            on:mouseenter=move |_| motion.hover(true)
            on:mouseleave=move |_| motion.hover(false)
        >
            {children()}
        </a>
    }
}

/// Animated `<li>`. Gesture or staggered specs only.
#[component]
pub fn MotionListItem(
    spec: MotionSpec,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    debug_assert!(
        !spec.trigger.needs_element(),
        "{:?} needs a MotionDiv",
        spec.trigger
    );
    let motion = MotionBinding::new(spec, 0);

    view! {
        <li
            class=class
            style=move || motion.style()
            on:mouseenter=move |_| motion.hover(true)
            on:mouseleave=move |_| motion.hover(false)
        >
            {children()}
        </li>
    }
}
