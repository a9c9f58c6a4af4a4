//! Hero scene description and its bridge to a [`Scene3D`] implementation.
//!
//! The sphere color is the only themed parameter; lights and geometry are
//! constant.

#[cfg(test)]
#[path = "hero_scene_test.rs"]
mod hero_scene_test;

use scene::Scene3D;
use scene::camera::Vec3;
use scene::color::Rgb;
use scene::config::{Light, SceneConfig, SphereSpec};

use crate::state::ui::DisplayMode;
use crate::util::palette::palette_for;

pub const AMBIENT_INTENSITY: f64 = 0.5;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(3.0, 2.0, 1.0);
pub const SPHERE: SphereSpec = SphereSpec { radius: 1.0, scale: 2.0 };

/// Used if a palette token ever fails to parse.
const FALLBACK_SPHERE_COLOR: Rgb = Rgb::new(0x3b, 0x82, 0xf6);

/// Sphere material color for `mode`.
pub fn sphere_color(mode: DisplayMode) -> Rgb {
    let token = palette_for(mode).sphere_color;
    Rgb::from_hex(token).unwrap_or_else(|e| {
        log::warn!("{e}; using fallback sphere color");
        FALLBACK_SPHERE_COLOR
    })
}

/// Orbit-rotatable sphere under ambient + one directional light. Zoom is off
/// so wheel input keeps scrolling the page.
pub fn hero_scene_config(mode: DisplayMode) -> SceneConfig {
    SceneConfig {
        rotatable: true,
        zoomable: false,
        lights: vec![Light::ambient(AMBIENT_INTENSITY), Light::directional(KEY_LIGHT_POSITION)],
        sphere: SPHERE,
        sphere_color: sphere_color(mode),
    }
}

/// Push the scene for `mode` to `scene`.
///
/// # Errors
///
/// Propagates the implementor's render error.
pub fn sync_scene<S: Scene3D>(scene: &mut S, mode: DisplayMode) -> Result<(), S::Error> {
    scene.render(&hero_scene_config(mode))
}
