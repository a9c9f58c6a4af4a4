//! Hero-scene rendering engine for the portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws a
//! single lit sphere into a `<canvas>` and lets the visitor orbit around it
//! by dragging. Everything except [`engine::Engine`] and [`render`] is plain
//! Rust and is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Scene description: lights, sphere geometry, sphere color |
//! | [`color`] | `#rrggbb` parsing and sRGB/linear conversions |
//! | [`camera`] | Vector math and the orbit camera |
//! | [`input`] | Pointer gesture state machine |
//! | [`shade`] | Software rasterizer producing RGBA frames |
//! | [`engine`] | Testable [`engine::EngineCore`] and the canvas-bound [`engine::Engine`] |
//! | [`render`] | Presents frames on a 2D context |
//! | [`consts`] | Camera and interaction constants |

pub mod camera;
pub mod color;
pub mod config;
pub mod consts;
pub mod engine;
pub mod input;
pub mod render;
pub mod shade;

use config::SceneConfig;

/// Errors raised while building a scene description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    #[error("invalid color token '{0}' (expected #rgb or #rrggbb)")]
    InvalidColor(String),
}

/// Anything that can draw a [`SceneConfig`].
///
/// The page only decides *what* the scene looks like; implementors own the
/// pipeline that turns it into pixels.
pub trait Scene3D {
    type Error;

    /// Draw the scene described by `config`, replacing whatever was shown.
    ///
    /// # Errors
    ///
    /// Returns the implementor's error when the drawing surface rejects the frame.
    fn render(&mut self, config: &SceneConfig) -> Result<(), Self::Error>;
}
