//! Dark mode toggle.
//!
//! Mirrors the current mode onto a `data-theme` attribute on `<html>` so
//! page-level CSS (scrollbars, form controls) follows the palette. Requires a
//! browser environment; SSR and native tests no-op.
//!
//! The mode is not persisted; a reload starts light again.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::ui::DisplayMode;

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(mode: DisplayMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(e) = el.set_attribute("data-theme", mode.as_str()) {
                log::warn!("failed to set data-theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Switch to the other mode and apply it to the document.
pub fn toggle(current: DisplayMode) -> DisplayMode {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    log::debug!("display mode -> {}", next.as_str());
    next
}
