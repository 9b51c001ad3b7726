//! Site configuration.
//!
//! Centralized constants for the Transeffex site. Everything here is
//! compiled in; the palette and keyframes live in `theme.json`.

/// Short brand name shown next to the logo.
pub const COMPANY_NAME: &str = "Transeffex";

/// Registered company name used in the copyright line and hero copy.
pub const COMPANY_LEGAL_NAME: &str = "Transeffex Ltd";

/// Year printed in the footer copyright line.
pub const COPYRIGHT_YEAR: u16 = 2026;

/// Logo asset, served from the site root.
pub const LOGO_PATH: &str = "/logo.jpeg";

/// Document title.
pub const PAGE_TITLE: &str = "Transeffex | Smart Business Software";

/// Meta description for search engines and link previews.
pub const PAGE_DESCRIPTION: &str =
    "Inventory management, payment processing and AI-powered algorithms for modern businesses.";

/// Footer contact details.
pub const CONTACT_EMAIL: &str = "info@transeffex.com";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_ADDRESS: &str = "123 Tech Street, San Francisco, CA";

/// Contact panel details.
pub const SUPPORT_PHONE: &str = "+250 781 290 496";

/// Section targeted by the navbar call-to-action.
pub const CONTACT_ANCHOR: &str = "#contact";

/// Fraction of an element that must be visible to count as "in view".
pub const IN_VIEW_THRESHOLD: f64 = 0.1;

/// Shrinks the viewport bottom so elements animate slightly after entering.
pub const IN_VIEW_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Console log verbosity.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
