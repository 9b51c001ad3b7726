//! Same-page anchor navigation.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{AppError, AppResult};

/// Element id targeted by a fragment href, `"#products"` -> `"products"`.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll to the element a fragment href points at.
pub fn scroll_to_anchor(href: &str) -> AppResult<()> {
    let id = anchor_id(href).ok_or_else(|| AppError::Anchor(format!("not a fragment: {}", href)))?;
    let target = gloo_utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| AppError::Anchor(format!("no element with id '{}'", id)))?;

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    log::debug!("Scrolled to #{}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("#products"), Some("products"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("products"), None);
        assert_eq!(anchor_id("https://transeffex.com/#products"), None);
    }
}
