//! # client
//!
//! Leptos + WASM frontend for the portfolio page.
//!
//! This crate contains the page, its section components, the static content
//! they render, the light/dark presentation state, and the entrance-animation
//! model. The hero's 3D sphere is drawn by the `scene` crate through the
//! `SceneHost` bridge component.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive runtime to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    if let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        if let Err(e) = root.class_list().add_1(app::SCRIPTED_CLASS) {
            log::warn!("failed to mark document as scripted: {e:?}");
        }
    }
    leptos::mount::hydrate_body(app::App);
}
