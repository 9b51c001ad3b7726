//! Inline SVG glyphs.
//!
//! Stroke icons on a 24x24 grid drawn with `currentColor`, so they pick up
//! the text color of whatever contains them.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    ArrowRight,
    BarChart3,
    Brain,
    Cloud,
    CreditCard,
    Github,
    Linkedin,
    Lock,
    Mail,
    MapPin,
    Phone,
    Shield,
    Twitter,
    Users,
    Zap,
}

impl Icon {
    /// Inner SVG elements for this glyph.
    fn body(&self) -> &'static str {
        match self {
            Icon::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            Icon::BarChart3 => {
                r#"<path d="M3 3v18h18"/><path d="M18 17V9"/><path d="M13 17V5"/><path d="M8 17v-3"/>"#
            }
            Icon::Brain => concat!(
                r#"<path d="M12 5a3 3 0 1 0-5.997.125 4 4 0 0 0-2.526 5.77 4 4 0 0 0 .556 6.588A4 4 0 1 0 12 18Z"/>"#,
                r#"<path d="M12 5a3 3 0 1 1 5.997.125 4 4 0 0 1 2.526 5.77 4 4 0 0 1-.556 6.588A4 4 0 1 1 12 18Z"/>"#,
                r#"<path d="M15 13a4.5 4.5 0 0 1-3-4 4.5 4.5 0 0 1-3 4"/>"#,
            ),
            Icon::Cloud => r#"<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z"/>"#,
            Icon::CreditCard => {
                r#"<rect width="20" height="14" x="2" y="5" rx="2"/><line x1="2" x2="22" y1="10" y2="10"/>"#
            }
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            ),
            Icon::Lock => {
                r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#
            }
            Icon::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Icon::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Icon::Phone => concat!(
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 "#,
                r#"19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 "#,
                r#"2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 "#,
                r#"12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
            ),
            Icon::Shield => r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/>"#,
            Icon::Twitter => concat!(
                r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5"#,
                r#"c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
            ),
            Icon::Users => concat!(
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/>"#,
                r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            ),
            Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
        }
    }

    /// Complete `<svg>` element carrying `class`.
    pub fn svg(&self, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{}" aria-hidden="true">{}</svg>"#,
            class,
            self.body()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 15] = [
        Icon::ArrowRight,
        Icon::BarChart3,
        Icon::Brain,
        Icon::Cloud,
        Icon::CreditCard,
        Icon::Github,
        Icon::Linkedin,
        Icon::Lock,
        Icon::Mail,
        Icon::MapPin,
        Icon::Phone,
        Icon::Shield,
        Icon::Twitter,
        Icon::Users,
        Icon::Zap,
    ];

    #[test]
    fn test_svg_wraps_body_with_class() {
        let markup = Icon::Zap.svg("w-6 h-6 text-white");
        assert!(markup.starts_with("<svg "));
        assert!(markup.ends_with("</svg>"));
        assert!(markup.contains(r#"class="w-6 h-6 text-white""#));
        assert!(markup.contains("<polygon"));
    }

    #[test]
    fn test_every_glyph_has_shapes() {
        for icon in ALL {
            let body = icon.body();
            assert!(body.starts_with('<'), "{:?}", icon);
            assert!(body.ends_with("/>"), "{:?}", icon);
        }
    }
}
