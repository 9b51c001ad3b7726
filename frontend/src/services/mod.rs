//! Browser services.
//!
//! Thin wrappers over web APIs used by the motion runtime and navigation:
//!
//! - [`frame`] - `requestAnimationFrame` scheduling
//! - [`viewport`] - `IntersectionObserver` in-view detection
//! - [`scroll`] - smooth scrolling to same-page anchors

pub mod frame;
pub mod scroll;
pub mod viewport;

pub use frame::*;
pub use scroll::*;
pub use viewport::*;
