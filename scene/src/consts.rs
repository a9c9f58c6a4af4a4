//! Shared numeric constants for the scene crate.

// ── Camera ──────────────────────────────────────────────────────

/// Distance from the orbit target to the camera, in world units.
pub const CAMERA_DISTANCE: f64 = 5.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f64 = 75.0;

/// Dolly limits, in world units.
pub const MIN_CAMERA_DISTANCE: f64 = 2.5;
pub const MAX_CAMERA_DISTANCE: f64 = 20.0;

/// Distance multiplier applied per wheel notch toward the target.
pub const DOLLY_STEP: f64 = 0.95;

/// Closest the polar angle may get to either pole, in radians.
pub const MIN_POLAR_MARGIN: f64 = 1e-3;

// ── Interaction ─────────────────────────────────────────────────

/// Drag-to-rotation multiplier. At 1.0 a drag spanning the viewport height turns a full circle.
pub const ORBIT_ROTATE_SPEED: f64 = 1.0;

// ── Lighting ────────────────────────────────────────────────────

/// Default intensity for lights that do not specify one.
pub const DEFAULT_LIGHT_INTENSITY: f64 = 1.0;
