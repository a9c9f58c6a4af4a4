#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::f64::consts::PI;

use crate::consts::{
    CAMERA_DISTANCE, CAMERA_FOV_DEG, DOLLY_STEP, MAX_CAMERA_DISTANCE, MIN_CAMERA_DISTANCE, MIN_POLAR_MARGIN,
    ORBIT_ROTATE_SPEED,
};

/// A vector or point in world or view space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor, z: self.z * factor }
    }

    #[must_use]
    pub fn sub(self, other: Self) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction. The zero vector is returned unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len <= f64::EPSILON { self } else { self.scale(1.0 / len) }
    }
}

/// Orthonormal camera axes expressed in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBasis {
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

/// Camera orbiting the world origin on a sphere of fixed radius.
///
/// `azimuth` turns around the world Y axis (0 = looking down -Z).
/// `polar` is measured from +Y and stays strictly between the poles.
/// `distance` only changes through [`OrbitCamera::dolly`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub azimuth: f64,
    pub polar: f64,
    pub distance: f64,
    pub fov_deg: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self { azimuth: 0.0, polar: PI / 2.0, distance: CAMERA_DISTANCE, fov_deg: CAMERA_FOV_DEG }
    }
}

impl OrbitCamera {
    /// Camera position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (sin_p, cos_p) = self.polar.sin_cos();
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(self.distance * sin_p * sin_a, self.distance * cos_p, self.distance * sin_p * cos_a)
    }

    /// Camera axes for the current orientation, with world +Y as the up hint.
    #[must_use]
    pub fn basis(&self) -> ViewBasis {
        let forward = self.position().scale(-1.0).normalized();
        let right = forward.cross(Vec3::new(0.0, 1.0, 0.0)).normalized();
        let up = right.cross(forward);
        ViewBasis { right, up, forward }
    }

    /// Express a world-space direction in view space (camera looks down -Z).
    #[must_use]
    pub fn world_dir_to_view(&self, dir: Vec3) -> Vec3 {
        let basis = self.basis();
        Vec3::new(dir.dot(basis.right), dir.dot(basis.up), -dir.dot(basis.forward))
    }

    /// Rotate by the given angles, clamping the polar angle away from the poles.
    pub fn rotate(&mut self, d_azimuth: f64, d_polar: f64) {
        self.azimuth = (self.azimuth + d_azimuth).rem_euclid(2.0 * PI);
        self.polar = (self.polar + d_polar).clamp(MIN_POLAR_MARGIN, PI - MIN_POLAR_MARGIN);
    }

    /// Apply a pointer drag of `(dx, dy)` CSS pixels inside a viewport of the given height.
    ///
    /// Dragging right swings the camera left around the target, dragging down
    /// tilts it upward, matching the usual orbit-control feel.
    pub fn orbit_by_pixels(&mut self, dx: f64, dy: f64, viewport_height: f64) {
        if viewport_height <= 0.0 {
            return;
        }
        let per_pixel = 2.0 * PI * ORBIT_ROTATE_SPEED / viewport_height;
        self.rotate(-dx * per_pixel, -dy * per_pixel);
    }

    /// Move toward (negative `wheel_delta_y`) or away from the target by one dolly step.
    pub fn dolly(&mut self, wheel_delta_y: f64) {
        let factor = if wheel_delta_y < 0.0 {
            DOLLY_STEP
        } else if wheel_delta_y > 0.0 {
            1.0 / DOLLY_STEP
        } else {
            return;
        };
        self.distance = (self.distance * factor).clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }

    /// Tangent of half the vertical field of view.
    #[must_use]
    pub fn half_fov_tan(&self) -> f64 {
        (self.fov_deg.to_radians() / 2.0).tan()
    }
}
