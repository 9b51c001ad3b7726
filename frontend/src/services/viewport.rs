//! Scroll-into-view detection using `IntersectionObserver`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{AppError, AppResult, IN_VIEW_ROOT_MARGIN, IN_VIEW_THRESHOLD};

/// Call `on_change` whenever `target` enters or leaves the viewport.
///
/// With `once`, only the first entry is reported and the target is then
/// unobserved. The observer lives for the rest of the page.
pub fn observe_in_view(
    target: &Element,
    once: bool,
    on_change: impl Fn(bool) + 'static,
) -> AppResult<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let inside = entry.is_intersecting();

                if inside || !once {
                    on_change(inside);
                }
                if inside && once {
                    observer.unobserve(&entry.target());
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(IN_VIEW_THRESHOLD));
    options.set_root_margin(IN_VIEW_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| AppError::Browser(format!("IntersectionObserver failed: {:?}", e)))?;
    observer.observe(target);

    // The browser keeps the observer alive while it has targets; the
    // callback has to outlive this function for the same period.
    callback.forget();
    Ok(())
}
