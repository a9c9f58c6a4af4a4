//! Software rasterizer for the hero sphere.
//!
//! Casts one ray per pixel from the camera, intersects it with the sphere and
//! applies ambient plus Lambert diffuse lighting in linear light. Pixels that
//! miss the sphere stay fully transparent so the page background shows
//! through.

#[cfg(test)]
#[path = "shade_test.rs"]
mod shade_test;

use crate::camera::{OrbitCamera, Vec3};
use crate::config::SceneConfig;

/// Row-major RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    /// RGBA of the pixel at `(x, y)`, or `None` outside the frame.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }
}

/// Render `config` as seen by `camera` into a `width` × `height` frame.
#[must_use]
pub fn rasterize(config: &SceneConfig, camera: &OrbitCamera, width: u32, height: u32) -> Frame {
    let mut pixels = vec![0_u8; (width as usize) * (height as usize) * 4];
    if width == 0 || height == 0 {
        return Frame { width, height, pixels };
    }

    let aspect = f64::from(width) / f64::from(height);
    let half_fov_tan = camera.half_fov_tan();
    let center = Vec3::new(0.0, 0.0, -camera.distance);
    let radius = config.sphere.world_radius();
    let base = config.sphere_color.to_linear();
    let ambient = config.ambient_intensity();
    let lights: Vec<(Vec3, f64)> = config
        .directional_lights()
        .into_iter()
        .map(|(dir, intensity)| (camera.world_dir_to_view(dir), intensity))
        .collect();

    for py in 0..height {
        let ny = (1.0 - 2.0 * (f64::from(py) + 0.5) / f64::from(height)) * half_fov_tan;
        for px in 0..width {
            let nx = (2.0 * (f64::from(px) + 0.5) / f64::from(width) - 1.0) * aspect * half_fov_tan;
            let ray = Vec3::new(nx, ny, -1.0).normalized();
            let Some(t) = intersect_sphere(ray, center, radius) else {
                continue;
            };
            let normal = ray.scale(t).sub(center).normalized();
            let diffuse: f64 = lights
                .iter()
                .map(|(dir, intensity)| normal.dot(*dir).max(0.0) * intensity)
                .sum();
            let rgb = base.scale(ambient + diffuse).to_srgb();
            let i = ((py * width + px) * 4) as usize;
            pixels[i] = rgb.r;
            pixels[i + 1] = rgb.g;
            pixels[i + 2] = rgb.b;
            pixels[i + 3] = 255;
        }
    }

    Frame { width, height, pixels }
}

/// Nearest positive hit distance along a unit `ray` from the view origin.
fn intersect_sphere(ray: Vec3, center: Vec3, radius: f64) -> Option<f64> {
    let b = ray.dot(center);
    let c = center.dot(center) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = b - disc.sqrt();
    (t > 0.0).then_some(t)
}
