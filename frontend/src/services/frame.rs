//! Animation frame scheduling.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::{AppError, AppResult};

/// Run `f` on the next animation frame.
pub fn request_animation_frame(f: impl FnOnce() + 'static) -> AppResult<()> {
    let closure = Closure::once(f);
    gloo_utils::window()
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .map_err(|e| AppError::Browser(format!("requestAnimationFrame failed: {:?}", e)))?;
    closure.forget();
    Ok(())
}

/// Run `f` once the current layout has been painted.
///
/// The first frame callback fires before the paint of the frame that
/// mounted the element, so a second one is needed for CSS transitions to
/// see the starting style.
pub fn after_next_paint(f: impl FnOnce() + 'static) -> AppResult<()> {
    request_animation_frame(move || {
        if let Err(e) = request_animation_frame(f) {
            log::warn!("{}", e);
        }
    })
}
