//! Scene description handed to a [`crate::Scene3D`] implementation.
//!
//! Only the sphere color varies at runtime; lights and geometry are fixed
//! when the page is built.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::camera::Vec3;
use crate::color::Rgb;
use crate::consts::DEFAULT_LIGHT_INTENSITY;

/// A white light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light reaching every surface equally.
    Ambient { intensity: f64 },
    /// Parallel light shining from `position` toward the origin.
    Directional { position: Vec3, intensity: f64 },
}

impl Light {
    #[must_use]
    pub fn ambient(intensity: f64) -> Self {
        Self::Ambient { intensity }
    }

    #[must_use]
    pub fn directional(position: Vec3) -> Self {
        Self::Directional { position, intensity: DEFAULT_LIGHT_INTENSITY }
    }
}

/// Sphere centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSpec {
    pub radius: f64,
    pub scale: f64,
}

impl SphereSpec {
    /// Radius after scaling, in world units.
    #[must_use]
    pub fn world_radius(&self) -> f64 {
        self.radius * self.scale
    }
}

impl Default for SphereSpec {
    fn default() -> Self {
        Self { radius: 1.0, scale: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Whether pointer drags orbit the camera.
    pub rotatable: bool,
    /// Whether wheel input dollies the camera. The hero scene keeps this off.
    pub zoomable: bool,
    pub lights: Vec<Light>,
    pub sphere: SphereSpec,
    pub sphere_color: Rgb,
}

impl SceneConfig {
    /// Sum of all ambient intensities.
    #[must_use]
    pub fn ambient_intensity(&self) -> f64 {
        self.lights
            .iter()
            .map(|light| match light {
                Light::Ambient { intensity } => *intensity,
                Light::Directional { .. } => 0.0,
            })
            .sum()
    }

    /// Directional lights as (unit direction toward the light, intensity) in world space.
    #[must_use]
    pub fn directional_lights(&self) -> Vec<(Vec3, f64)> {
        self.lights
            .iter()
            .filter_map(|light| match light {
                Light::Directional { position, intensity } => Some((position.normalized(), *intensity)),
                Light::Ambient { .. } => None,
            })
            .collect()
    }

    /// Same scene with a different sphere color.
    #[must_use]
    pub fn with_sphere_color(mut self, color: Rgb) -> Self {
        self.sphere_color = color;
        self
    }
}
