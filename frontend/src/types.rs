//! Common types used across the site.
//!
//! # Categories
//!
//! - **Descriptor Types** - static records that drive repeated markup
//! - **Error Types** - browser glue error handling

use std::fmt;

use crate::icons::Icon;

// =============================================================================
// Descriptor Types
// =============================================================================

/// A product card in the products grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProductDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Tailwind gradient stops for the icon tile, e.g. `from-cyan-500 to-cyan-600`.
    pub gradient: &'static str,
    /// Glow class applied to both the card and the icon tile.
    pub glow: &'static str,
}

/// A card in the features grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureDescriptor {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Same-page navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
}

impl NavLink {
    /// Fragment href: `#` followed by the lower-cased label.
    pub fn href(&self) -> String {
        format!("#{}", self.label.to_lowercase())
    }
}

/// Social icon in the footer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    /// Accessible name, the icon itself has no text.
    pub label: &'static str,
    pub href: &'static str,
}

/// Contact card in the call-to-action panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactMethod {
    pub icon: Icon,
    pub title: &'static str,
    /// Rendered one per line.
    pub lines: &'static [&'static str],
}

/// Line in the footer contact column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterContact {
    pub icon: Icon,
    pub text: &'static str,
}

// =============================================================================
// Error Types
// =============================================================================

/// Site errors.
///
/// None of these reach the visitor; they are logged and the page degrades.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Theme file could not be parsed.
    Theme(String),
    /// Anchor href is malformed or has no target element.
    Anchor(String),
    /// A browser API call failed.
    Browser(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Theme(msg) => write!(f, "Theme error: {}", msg),
            AppError::Anchor(msg) => write!(f, "Anchor error: {}", msg),
            AppError::Browser(msg) => write!(f, "Browser error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for site operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_href_is_lowercased_fragment() {
        let link = NavLink { label: "Products" };
        assert_eq!(link.href(), "#products");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Anchor("#about".to_string());
        assert_eq!(err.to_string(), "Anchor error: #about");
    }
}
