//! Viewport visibility tracking via `IntersectionObserver`. Browser only.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be visible to count as "in view".
const VISIBLE_THRESHOLD: f64 = 0.1;

/// Call `on_change(is_intersecting)` whenever `el` enters or leaves the viewport.
///
/// The observer disconnects itself as soon as `on_change` returns `false`.
///
/// # Errors
///
/// Returns `Err` if the browser refuses to construct the observer.
pub fn observe_visibility(el: &Element, mut on_change: impl FnMut(bool) -> bool + 'static) -> Result<(), JsValue> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !on_change(entry.is_intersecting()) {
                    observer.disconnect();
                    return;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(el);
    // The observer holds the only JS reference to the callback for the page's lifetime.
    callback.forget();
    Ok(())
}
