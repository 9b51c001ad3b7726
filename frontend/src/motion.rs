//! Declarative animation model.
//!
//! A [`MotionSpec`] describes an element's hidden and visible states, what
//! makes it visible, and how it reacts to hover and tap. Resolving a spec
//! against a [`MotionPhase`] yields an inline style string; the browser's CSS
//! transitions do the interpolation. Nothing here touches the DOM, see
//! `components::motion` for the runtime.

// =============================================================================
// States
// =============================================================================

/// Animatable properties. Unset fields are left to the stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionState {
    pub opacity: Option<f64>,
    /// Horizontal offset in px.
    pub x: Option<f64>,
    /// Vertical offset in px.
    pub y: Option<f64>,
    pub scale: Option<f64>,
    pub scale_x: Option<f64>,
    /// Rotation in degrees.
    pub rotate: Option<f64>,
    pub color: Option<&'static str>,
}

impl MotionState {
    pub const NONE: MotionState = MotionState {
        opacity: None,
        x: None,
        y: None,
        scale: None,
        scale_x: None,
        rotate: None,
        color: None,
    };

    pub const fn opacity(mut self, value: f64) -> Self {
        self.opacity = Some(value);
        self
    }

    pub const fn x(mut self, value: f64) -> Self {
        self.x = Some(value);
        self
    }

    pub const fn y(mut self, value: f64) -> Self {
        self.y = Some(value);
        self
    }

    pub const fn scale(mut self, value: f64) -> Self {
        self.scale = Some(value);
        self
    }

    pub const fn scale_x(mut self, value: f64) -> Self {
        self.scale_x = Some(value);
        self
    }

    pub const fn rotate(mut self, value: f64) -> Self {
        self.rotate = Some(value);
        self
    }

    pub const fn color(mut self, value: &'static str) -> Self {
        self.color = Some(value);
        self
    }

    /// Fields set on `top` replace ours.
    pub fn overlay(self, top: MotionState) -> MotionState {
        MotionState {
            opacity: top.opacity.or(self.opacity),
            x: top.x.or(self.x),
            y: top.y.or(self.y),
            scale: top.scale.or(self.scale),
            scale_x: top.scale_x.or(self.scale_x),
            rotate: top.rotate.or(self.rotate),
            color: top.color.or(self.color),
        }
    }

    /// Names of the fields whose values differ between `self` and `other`.
    pub fn changed_fields(&self, other: &MotionState) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.opacity != other.opacity {
            changed.push("opacity");
        }
        if self.x != other.x {
            changed.push("x");
        }
        if self.y != other.y {
            changed.push("y");
        }
        if self.scale != other.scale {
            changed.push("scale");
        }
        if self.scale_x != other.scale_x {
            changed.push("scaleX");
        }
        if self.rotate != other.rotate {
            changed.push("rotate");
        }
        if self.color != other.color {
            changed.push("color");
        }
        changed
    }

    /// CSS declarations, `; `-separated, without a trailing semicolon.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();

        if let Some(opacity) = self.opacity {
            declarations.push(format!("opacity: {}", opacity));
        }

        let mut transforms = Vec::new();
        if self.x.is_some() || self.y.is_some() {
            transforms.push(format!(
                "translate({}px, {}px)",
                self.x.unwrap_or(0.0),
                self.y.unwrap_or(0.0)
            ));
        }
        if let Some(scale) = self.scale {
            transforms.push(format!("scale({})", scale));
        }
        if let Some(scale_x) = self.scale_x {
            transforms.push(format!("scaleX({})", scale_x));
        }
        if let Some(rotate) = self.rotate {
            transforms.push(format!("rotate({}deg)", rotate));
        }
        if !transforms.is_empty() {
            declarations.push(format!("transform: {}", transforms.join(" ")));
        }

        if let Some(color) = self.color {
            declarations.push(format!("color: {}", color));
        }

        declarations.join("; ")
    }
}

// =============================================================================
// Timing
// =============================================================================

/// Timing of a single transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    /// Seconds before the transition starts.
    pub delay: f64,
    pub ease: &'static str,
}

impl Transition {
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease: "ease-out",
        }
    }

    pub const fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Milliseconds from start until the transition has finished.
    pub fn total_ms(&self, delay: f64) -> u32 {
        to_ms(delay + self.duration)
    }

    /// `transition-*` declarations using `delay` instead of our own.
    pub fn to_css(&self, delay: f64) -> String {
        format!(
            "transition-property: opacity, transform, color; transition-duration: {}ms; \
             transition-timing-function: {}; transition-delay: {}ms",
            to_ms(self.duration),
            self.ease,
            to_ms(delay)
        )
    }
}

fn to_ms(seconds: f64) -> u32 {
    (seconds.max(0.0) * 1000.0).round() as u32
}

/// Child timing a container hands down to its animated children.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    /// Seconds before the first child starts.
    pub delay_children: f64,
    /// Seconds between consecutive children.
    pub stagger_children: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, stagger_children: f64) -> Self {
        Self {
            delay_children,
            stagger_children,
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger_children
    }
}

// =============================================================================
// Specs
// =============================================================================

/// What makes an element visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Trigger {
    /// Visible and settled from the start; only gestures animate.
    Always,
    /// Animates in right after the first paint.
    Mount,
    /// Animates in when scrolled into view. Without `once` it hides again
    /// when it leaves.
    InView { once: bool },
    /// Follows the nearest staggered container.
    Inherit,
}

impl Trigger {
    /// Whether the trigger has to watch the rendered element.
    pub fn needs_element(&self) -> bool {
        matches!(self, Trigger::Mount | Trigger::InView { .. })
    }
}

/// Full animation description of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSpec {
    pub hidden: MotionState,
    pub visible: MotionState,
    pub transition: Transition,
    pub trigger: Trigger,
    /// Timing handed to children using [`Trigger::Inherit`].
    pub stagger: Option<Stagger>,
    pub hover: Option<MotionState>,
    pub tap: Option<MotionState>,
    pub gesture: Transition,
}

/// Default timing for hover and tap feedback.
const GESTURE: Transition = Transition::new(0.3);

impl MotionSpec {
    /// Entrance animation from `hidden` to `visible`.
    pub const fn entrance(
        hidden: MotionState,
        visible: MotionState,
        transition: Transition,
        trigger: Trigger,
    ) -> Self {
        Self {
            hidden,
            visible,
            transition,
            trigger,
            stagger: None,
            hover: None,
            tap: None,
            gesture: GESTURE,
        }
    }

    /// No entrance animation, gesture feedback only.
    pub const fn gestures() -> Self {
        Self::entrance(
            MotionState::NONE,
            MotionState::NONE,
            GESTURE,
            Trigger::Always,
        )
    }

    pub const fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub const fn hover(mut self, state: MotionState) -> Self {
        self.hover = Some(state);
        self
    }

    pub const fn tap(mut self, state: MotionState) -> Self {
        self.tap = Some(state);
        self
    }

    pub const fn gesture_transition(mut self, transition: Transition) -> Self {
        self.gesture = transition;
        self
    }

    /// Inline style for `phase`. `delay` is the entrance delay in seconds,
    /// which differs from `transition.delay` for staggered children.
    pub fn style(&self, phase: MotionPhase, delay: f64) -> String {
        let mut state = if phase.visible {
            self.visible
        } else {
            self.hidden
        };

        let mut gesturing = false;
        if let (true, Some(hover)) = (phase.hovered, self.hover) {
            state = state.overlay(hover);
            gesturing = true;
        }
        if let (true, Some(tap)) = (phase.pressed, self.tap) {
            state = state.overlay(tap);
            gesturing = true;
        }

        let transition = if phase.settled || gesturing {
            self.gesture.to_css(0.0)
        } else {
            self.transition.to_css(delay)
        };

        let declarations = state.to_css();
        if declarations.is_empty() {
            transition
        } else {
            format!("{}; {}", declarations, transition)
        }
    }
}

/// Runtime flags of one animated element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPhase {
    pub visible: bool,
    /// Entrance transition has finished.
    pub settled: bool,
    pub hovered: bool,
    pub pressed: bool,
}

/// Decides when an entrance has settled.
///
/// Every show or hide starts a new generation; a settle timer only counts
/// if it was armed in the current one, so a timer left over from an
/// interrupted entrance cannot mark the next one settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettleClock {
    generation: u32,
    settled: bool,
}

impl SettleClock {
    /// Element became visible. Returns the ticket for its settle timer.
    pub fn show(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.settled = false;
        self.generation
    }

    pub fn hide(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.settled = false;
    }

    /// Settle timer for `ticket` fired. Returns the new settled flag.
    pub fn elapse(&mut self, ticket: u32) -> bool {
        if ticket == self.generation {
            self.settled = true;
        }
        self.settled
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

// =============================================================================
// Shared presets
// =============================================================================

/// Section heading: drops in from above when scrolled into view.
pub const HEADING: MotionSpec = MotionSpec::entrance(
    MotionState::NONE.opacity(0.0).y(-20.0),
    MotionState::NONE.opacity(1.0).y(0.0),
    Transition::new(0.6),
    Trigger::InView { once: false },
);

/// Primary buttons: grow on hover, shrink on press.
pub const PRESSABLE: MotionSpec = MotionSpec::gestures()
    .hover(MotionState::NONE.scale(1.05))
    .tap(MotionState::NONE.scale(0.95));

/// Round icon badges that spin once on hover.
pub const SPIN: MotionSpec = MotionSpec::gestures()
    .hover(MotionState::NONE.rotate(360.0))
    .gesture_transition(Transition::new(0.6));

/// Fields an entrance animation may change without altering content.
pub const ENTRANCE_FIELDS: [&str; 5] = ["opacity", "x", "y", "scale", "scaleX"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let base = MotionState::NONE.opacity(1.0).y(0.0);
        let merged = base.overlay(MotionState::NONE.y(-10.0).color("#0891B2"));
        assert_eq!(merged.opacity, Some(1.0));
        assert_eq!(merged.y, Some(-10.0));
        assert_eq!(merged.color, Some("#0891B2"));
        assert_eq!(merged.scale, None);
    }

    #[test]
    fn test_state_css_combines_transforms() {
        let state = MotionState::NONE
            .opacity(0.0)
            .y(20.0)
            .scale(0.8)
            .rotate(10.0);
        assert_eq!(
            state.to_css(),
            "opacity: 0; transform: translate(0px, 20px) scale(0.8) rotate(10deg)"
        );
        assert_eq!(MotionState::NONE.to_css(), "");
    }

    #[test]
    fn test_changed_fields() {
        let hidden = MotionState::NONE.opacity(0.0).scale(0.8);
        let visible = MotionState::NONE.opacity(1.0).scale(0.8);
        assert_eq!(hidden.changed_fields(&visible), vec!["opacity"]);
        assert!(visible.changed_fields(&visible).is_empty());
    }

    #[test]
    fn test_stagger_delay_grows_per_index() {
        let stagger = Stagger::new(0.3, 0.2);
        assert_eq!(to_ms(stagger.delay_for(0)), 300);
        assert_eq!(to_ms(stagger.delay_for(1)), 500);
        assert_eq!(to_ms(stagger.delay_for(2)), 700);
    }

    #[test]
    fn test_transition_css_uses_given_delay() {
        let css = Transition::new(0.8).delay(0.1).to_css(0.5);
        assert!(css.contains("transition-duration: 800ms"));
        assert!(css.contains("transition-delay: 500ms"));
        assert!(css.contains("transition-timing-function: ease-out"));
        assert_eq!(Transition::new(0.8).total_ms(0.5), 1300);
    }

    #[test]
    fn test_style_switches_between_hidden_and_visible() {
        let hidden = HEADING.style(MotionPhase::default(), 0.0);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, -20px)"));

        let visible = HEADING.style(
            MotionPhase {
                visible: true,
                ..Default::default()
            },
            0.0,
        );
        assert!(visible.starts_with("opacity: 1; transform: translate(0px, 0px)"));
        assert!(visible.contains("transition-duration: 600ms"));
    }

    #[test]
    fn test_style_applies_hover_then_tap() {
        let settled = MotionPhase {
            visible: true,
            settled: true,
            ..Default::default()
        };
        assert_eq!(
            PRESSABLE.style(settled, 0.0),
            GESTURE.to_css(0.0),
            "no declarations before any gesture"
        );

        let hovered = MotionPhase {
            hovered: true,
            ..settled
        };
        assert!(PRESSABLE.style(hovered, 0.0).starts_with("transform: scale(1.05)"));

        let pressed = MotionPhase {
            pressed: true,
            ..hovered
        };
        assert!(PRESSABLE.style(pressed, 0.0).starts_with("transform: scale(0.95)"));
    }

    #[test]
    fn test_gesture_skips_entrance_delay() {
        let spec = MotionSpec::entrance(
            MotionState::NONE.opacity(0.0),
            MotionState::NONE.opacity(1.0),
            Transition::new(0.6),
            Trigger::Inherit,
        )
        .hover(MotionState::NONE.y(-10.0));

        let entering = MotionPhase {
            visible: true,
            ..Default::default()
        };
        assert!(spec.style(entering, 0.7).contains("transition-delay: 700ms"));

        let hovered = MotionPhase {
            hovered: true,
            ..entering
        };
        assert!(spec.style(hovered, 0.7).contains("transition-delay: 0ms"));
    }

    #[test]
    fn test_element_triggers() {
        assert!(Trigger::Mount.needs_element());
        assert!(Trigger::InView { once: false }.needs_element());
        assert!(!Trigger::Always.needs_element());
        assert!(!Trigger::Inherit.needs_element());
    }

    #[test]
    fn test_settle_timer_from_earlier_entrance_is_ignored() {
        let mut clock = SettleClock::default();

        let first = clock.show();
        clock.hide();
        assert!(!clock.elapse(first), "hidden element must not settle");

        let second = clock.show();
        assert!(!clock.elapse(first));
        assert!(!clock.is_settled());
        assert!(clock.elapse(second));
    }

    #[test]
    fn test_reentry_replays_entrance_timing() {
        let spec = MotionSpec::entrance(
            MotionState::NONE.opacity(0.0).y(20.0),
            MotionState::NONE.opacity(1.0).y(0.0),
            Transition::new(0.6).delay(0.3),
            Trigger::InView { once: false },
        );
        let mut clock = SettleClock::default();

        let first = clock.show();
        clock.hide();
        clock.elapse(first);
        clock.show();

        let phase = MotionPhase {
            visible: true,
            settled: clock.is_settled(),
            ..Default::default()
        };
        let style = spec.style(phase, 0.3);
        assert!(style.contains("transition-duration: 600ms"));
        assert!(style.contains("transition-delay: 300ms"));
    }

    #[test]
    fn test_heading_entrance_only_moves_and_fades() {
        for field in HEADING.hidden.changed_fields(&HEADING.visible) {
            assert!(ENTRANCE_FIELDS.contains(&field), "{}", field);
        }
    }
}
