//! Transeffex - Marketing Site (Rust/Leptos)
//!
//! A single-page WebAssembly site presenting Transeffex's business
//! software products.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! │  head: title, description, favicon, theme stylesheet         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar (fixed, anchor links)                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Home                                                        │
//! │  ├── Hero                                                    │
//! │  ├── Products   (#products)                                  │
//! │  ├── Features   (#features)                                  │
//! │  └── Cta        (#contact)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Descriptor records and errors
//! - [`motion`] - Declarative animation model
//! - [`theme`] - Palette and keyframes from `theme.json`
//! - [`icons`] - Inline SVG glyphs
//! - [`components`] - Leptos components
//! - [`services`] - Browser APIs (frames, viewport, scrolling)

use leptos::*;
use leptos_meta::{provide_meta_context, Link, Meta, Style, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod icons;
pub mod motion;
pub mod services;
pub mod theme;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Descriptors
    ContactMethod, FeatureDescriptor, FooterContact, NavLink, ProductDescriptor, SocialLink,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Theme
pub use theme::Theme;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and logger, then mount the app on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🦀 {} - Starting Leptos App", COMPANY_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme_css = match Theme::load() {
        Ok(theme) => theme.stylesheet(),
        Err(e) => {
            log::error!("{}", e);
            String::new()
        }
    };

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>
        <Link rel="icon" href=LOGO_PATH/>
        <Style id="theme">{theme_css}</Style>

        <Router>
            <div class="min-h-screen bg-white overflow-x-hidden">
                <Navbar/>
                <main>
                    <Routes>
                        <Route path="/" view=Home/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <Hero/>
        <Products/>
        <Features/>
        <Cta/>
    }
}
