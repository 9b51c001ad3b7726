//! UI components for the Transeffex site.
//!
//! # Sections
//! - [`Navbar`] - Fixed header with anchor links
//! - [`Hero`] - Headline and primary actions
//! - [`Products`] - Product cards
//! - [`Features`] - Feature grid
//! - [`Cta`] - Contact panel
//! - [`Footer`] - Links, contact details and copyright
//!
//! # Building Blocks
//! - [`MotionDiv`], [`MotionButton`], [`MotionLink`], [`MotionListItem`] - animated elements
//! - [`Glyph`] - inline SVG icon

mod cta;
mod features;
mod footer;
mod glyph;
mod hero;
mod motion;
mod navbar;
mod products;

pub use cta::*;
pub use features::*;
pub use footer::*;
pub use glyph::*;
pub use hero::*;
pub use motion::*;
pub use navbar::*;
pub use products::*;
