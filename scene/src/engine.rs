use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::Scene3D;
use crate::camera::OrbitCamera;
use crate::config::SceneConfig;
use crate::input::{Gesture, InputState, Point};
use crate::render;
use crate::shade::{self, Frame};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What the host should do after an input handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// The host should capture the pointer so the drag survives leaving the canvas.
    CapturePointer,
    RenderNeeded,
}

/// Engine state that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: SceneConfig,
    pub camera: OrbitCamera,
    pub input: InputState,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl EngineCore {
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            camera: OrbitCamera::default(),
            input: InputState::default(),
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    // --- Data inputs ---

    /// Replace the scene description. Returns `true` if anything changed.
    pub fn set_config(&mut self, config: &SceneConfig) -> bool {
        if self.config == *config {
            return false;
        }
        self.config = config.clone();
        if !self.config.rotatable {
            self.input.cancel();
        }
        true
    }

    /// Record the drawing size in pixels. Returns `true` if it changed.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if (self.viewport_width, self.viewport_height) == (width, height) {
            return false;
        }
        self.viewport_width = width;
        self.viewport_height = height;
        true
    }

    // --- Input ---

    pub fn on_pointer_down(&mut self, pointer_id: i32, x: f64, y: f64) -> Action {
        if !self.config.rotatable {
            return Action::None;
        }
        if self.input.pointer_down(pointer_id, Point::new(x, y)) {
            Action::CapturePointer
        } else {
            Action::None
        }
    }

    pub fn on_pointer_move(&mut self, pointer_id: i32, x: f64, y: f64) -> Action {
        match self.input.pointer_move(pointer_id, Point::new(x, y)) {
            Gesture::Orbit { dx, dy } => {
                self.camera.orbit_by_pixels(dx, dy, f64::from(self.viewport_height));
                Action::RenderNeeded
            }
            Gesture::None => Action::None,
        }
    }

    pub fn on_pointer_up(&mut self, pointer_id: i32) -> Action {
        self.input.pointer_up(pointer_id);
        Action::None
    }

    /// The browser took the pointer away (`pointercancel`, lost capture).
    /// Drops any drag so the next press starts fresh.
    pub fn on_pointer_cancel(&mut self) -> Action {
        self.input.cancel();
        Action::None
    }

    /// Wheel input. Ignored unless the scene is zoomable so page scrolling keeps working.
    pub fn on_wheel(&mut self, delta_y: f64) -> Action {
        if !self.config.zoomable || delta_y.abs() < f64::EPSILON {
            return Action::None;
        }
        self.camera.dolly(delta_y);
        Action::RenderNeeded
    }

    // --- Output ---

    #[must_use]
    pub fn frame(&self) -> Frame {
        shade::rasterize(&self.config, &self.camera, self.viewport_width, self.viewport_height)
    }
}

/// The canvas-bound engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Bind a new engine to `canvas`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    /// Match the backing store to the element's layout size and draw a frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if presenting the frame fails.
    pub fn redraw(&mut self) -> Result<(), JsValue> {
        let width = u32::try_from(self.canvas.client_width()).unwrap_or(0);
        let height = u32::try_from(self.canvas.client_height()).unwrap_or(0);
        if self.core.set_viewport(width, height) {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        render::present(&self.ctx, &self.core.frame())
    }

    // --- Delegated input; each redraws when the core asks for it ---

    /// # Errors
    ///
    /// Returns `Err` if capturing the pointer fails.
    pub fn on_pointer_down(&mut self, pointer_id: i32, x: f64, y: f64) -> Result<(), JsValue> {
        if self.core.on_pointer_down(pointer_id, x, y) == Action::CapturePointer {
            self.canvas.set_pointer_capture(pointer_id)?;
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing fails.
    pub fn on_pointer_move(&mut self, pointer_id: i32, x: f64, y: f64) -> Result<(), JsValue> {
        let action = self.core.on_pointer_move(pointer_id, x, y);
        self.apply(action)
    }

    pub fn on_pointer_up(&mut self, pointer_id: i32) {
        self.core.on_pointer_up(pointer_id);
    }

    pub fn on_pointer_cancel(&mut self) {
        self.core.on_pointer_cancel();
    }

    /// # Errors
    ///
    /// Returns `Err` if redrawing fails.
    pub fn on_wheel(&mut self, delta_y: f64) -> Result<(), JsValue> {
        let action = self.core.on_wheel(delta_y);
        self.apply(action)
    }

    fn apply(&mut self, action: Action) -> Result<(), JsValue> {
        match action {
            Action::RenderNeeded => self.redraw(),
            Action::None | Action::CapturePointer => Ok(()),
        }
    }
}

impl Scene3D for Engine {
    type Error = JsValue;

    fn render(&mut self, config: &SceneConfig) -> Result<(), JsValue> {
        self.core.set_config(config);
        self.redraw()
    }
}
