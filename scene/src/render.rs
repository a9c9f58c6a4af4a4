//! Presentation: copies a rasterized [`Frame`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! Fallible calls propagate `JsValue` errors to [`crate::engine::Engine`].

use wasm_bindgen::{Clamped, JsValue};
use web_sys::{CanvasRenderingContext2d, ImageData};

use crate::shade::Frame;

/// Replace the context's pixels with `frame`.
///
/// # Errors
///
/// Returns `Err` if the browser rejects the image buffer or the draw call.
pub fn present(ctx: &CanvasRenderingContext2d, frame: &Frame) -> Result<(), JsValue> {
    if frame.width == 0 || frame.height == 0 {
        return Ok(());
    }
    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(frame.pixels.as_slice()), frame.width, frame.height)?;
    ctx.put_image_data(&image, 0.0, 0.0)
}
