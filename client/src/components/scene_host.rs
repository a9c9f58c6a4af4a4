//! Bridge component between the Leptos UI and the imperative `scene::engine::Engine`.
//!
//! Mounts a `<canvas>`. On hydration it creates the engine once the element
//! exists, forwards pointer input, and re-syncs the scene whenever the
//! display mode changes. During SSR the canvas renders empty.

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use scene::engine::Engine;

use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Run `f` against the engine if it exists, logging instead of propagating failures.
#[cfg(feature = "hydrate")]
fn with_engine(engine: &SharedEngine, f: impl FnOnce(&mut Engine) -> Result<(), wasm_bindgen::JsValue>) {
    if let Some(e) = engine.borrow_mut().as_mut() {
        if let Err(err) = f(e) {
            log::warn!("hero scene: {err:?}");
        }
    }
}

/// Canvas host for the hero sphere.
#[component]
pub fn SceneHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "hydrate")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    // Create on first run, then re-render on every mode change.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let mode = ui.get().display_mode;
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_none() {
                match Engine::new(canvas, crate::util::hero_scene::hero_scene_config(mode)) {
                    Ok(instance) => *engine.borrow_mut() = Some(instance),
                    Err(err) => {
                        log::warn!("hero scene unavailable: {err:?}");
                        return;
                    }
                }
            }
            with_engine(&engine, |e| crate::util::hero_scene::sync_scene(e, mode));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = ui;

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let resize = window_event_listener(leptos::ev::resize, move |_| {
            with_engine(&engine, Engine::redraw);
        });
        on_cleanup(move || resize.remove());
    }

    #[cfg(feature = "hydrate")]
    let on_pointer_down = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
            with_engine(&engine, |e| e.on_pointer_down(ev.pointer_id(), x, y));
        }
    };
    #[cfg(feature = "hydrate")]
    let on_pointer_move = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
            with_engine(&engine, |e| e.on_pointer_move(ev.pointer_id(), x, y));
        }
    };
    #[cfg(feature = "hydrate")]
    let on_pointer_up = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::PointerEvent| {
            if let Some(e) = engine.borrow_mut().as_mut() {
                e.on_pointer_up(ev.pointer_id());
            }
        }
    };
    // Fires for both `pointercancel` and `lostpointercapture`.
    #[cfg(feature = "hydrate")]
    let on_pointer_cancel = {
        let engine = Rc::clone(&engine);
        move |_: leptos::ev::PointerEvent| {
            if let Some(e) = engine.borrow_mut().as_mut() {
                e.on_pointer_cancel();
            }
        }
    };
    #[cfg(feature = "hydrate")]
    let on_lost_capture = on_pointer_cancel.clone();
    #[cfg(feature = "hydrate")]
    let on_wheel = {
        let engine = Rc::clone(&engine);
        move |ev: leptos::ev::WheelEvent| {
            with_engine(&engine, |e| e.on_wheel(ev.delta_y()));
        }
    };

    #[cfg(not(feature = "hydrate"))]
    let (on_pointer_down, on_pointer_move, on_pointer_up, on_pointer_cancel, on_lost_capture, on_wheel) = (
        |_: leptos::ev::PointerEvent| {},
        |_: leptos::ev::PointerEvent| {},
        |_: leptos::ev::PointerEvent| {},
        |_: leptos::ev::PointerEvent| {},
        |_: leptos::ev::PointerEvent| {},
        |_: leptos::ev::WheelEvent| {},
    );

    view! {
        <canvas
            node_ref=canvas_ref
            class="hero__scene"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:lostpointercapture=on_lost_capture
            on:wheel=on_wheel
        >
            "Votre navigateur ne prend pas en charge le canvas."
        </canvas>
    }
}
