//! Color palette and keyframe definitions.
//!
//! `theme.json` is embedded at compile time and rendered into a stylesheet:
//! one `--color-*` custom property per palette entry, one `@keyframes` block
//! per keyframe set, and one `.animate-<name>` class per named animation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult};

const THEME_JSON: &str = include_str!("../theme.json");

/// One stop of a keyframe set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeStep {
    /// Selector such as `0%` or `0%, 100%`.
    pub offset: String,
    /// CSS property to value.
    pub styles: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: BTreeMap<String, String>,
    pub keyframes: BTreeMap<String, Vec<KeyframeStep>>,
    /// Animation name to `animation` shorthand.
    pub animations: BTreeMap<String, String>,
}

impl Theme {
    /// The theme bundled with the site.
    pub fn load() -> AppResult<Self> {
        Self::parse(THEME_JSON)
    }

    /// Parse and check that every animation names a known keyframe set.
    pub fn parse(json: &str) -> AppResult<Self> {
        let theme: Theme =
            serde_json::from_str(json).map_err(|e| AppError::Theme(e.to_string()))?;

        for (name, shorthand) in &theme.animations {
            let keyframes = shorthand.split_whitespace().next().unwrap_or_default();
            if !theme.keyframes.contains_key(keyframes) {
                return Err(AppError::Theme(format!(
                    "animation '{}' uses unknown keyframes '{}'",
                    name, keyframes
                )));
            }
        }

        Ok(theme)
    }

    pub fn stylesheet(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in &self.colors {
            css.push_str(&format!("  --color-{}: {};\n", name, value));
        }
        css.push_str("}\n");

        for (name, steps) in &self.keyframes {
            css.push_str(&format!("@keyframes {} {{\n", name));
            for step in steps {
                let styles: Vec<String> = step
                    .styles
                    .iter()
                    .map(|(property, value)| format!("{}: {};", property, value))
                    .collect();
                css.push_str(&format!("  {} {{ {} }}\n", step.offset, styles.join(" ")));
            }
            css.push_str("}\n");
        }

        for (name, shorthand) in &self.animations {
            css.push_str(&format!(".animate-{} {{ animation: {}; }}\n", name, shorthand));
        }

        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_theme_loads() {
        let theme = Theme::load().unwrap();
        assert_eq!(theme.colors.get("primary").map(String::as_str), Some("#0891B2"));
        assert_eq!(theme.keyframes.len(), 4);
        assert!(theme.animations.contains_key("pulseSoft"));
    }

    #[test]
    fn test_stylesheet_contains_every_entry() {
        let theme = Theme::load().unwrap();
        let css = theme.stylesheet();

        for name in theme.colors.keys() {
            assert!(css.contains(&format!("--color-{}:", name)), "{}", name);
        }
        for name in theme.keyframes.keys() {
            assert!(css.contains(&format!("@keyframes {} {{", name)), "{}", name);
        }
        for name in theme.animations.keys() {
            assert!(css.contains(&format!(".animate-{} {{", name)), "{}", name);
        }
        assert!(css.contains("0%, 100% { opacity: 0.7; }"));
    }

    #[test]
    fn test_unknown_keyframes_rejected() {
        let json = r#"{
            "colors": {},
            "keyframes": {},
            "animations": { "spin": "spin 1s linear infinite" }
        }"#;
        let err = Theme::parse(json).unwrap_err();
        assert!(matches!(err, AppError::Theme(msg) if msg.contains("spin")));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(Theme::parse("{"), Err(AppError::Theme(_))));
    }
}
