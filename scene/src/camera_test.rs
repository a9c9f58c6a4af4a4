#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// --- Vec3 ---

#[test]
fn dot_and_cross_follow_right_hand_rule() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(x.dot(y), 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn normalized_has_unit_length() {
    let v = Vec3::new(3.0, 2.0, 1.0).normalized();
    assert!(approx_eq(v.length(), 1.0));
}

#[test]
fn normalized_zero_vector_is_unchanged() {
    let zero = Vec3::new(0.0, 0.0, 0.0);
    assert_eq!(zero.normalized(), zero);
}

// --- OrbitCamera ---

#[test]
fn default_camera_sits_on_positive_z() {
    let cam = OrbitCamera::default();
    assert!(vec_approx_eq(cam.position(), Vec3::new(0.0, 0.0, CAMERA_DISTANCE)));
}

#[test]
fn default_basis_is_identity_view() {
    let basis = OrbitCamera::default().basis();
    assert!(vec_approx_eq(basis.right, Vec3::new(1.0, 0.0, 0.0)));
    assert!(vec_approx_eq(basis.up, Vec3::new(0.0, 1.0, 0.0)));
    assert!(vec_approx_eq(basis.forward, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn world_dir_to_view_is_identity_at_default() {
    let cam = OrbitCamera::default();
    let dir = Vec3::new(3.0, 2.0, 1.0).normalized();
    assert!(vec_approx_eq(cam.world_dir_to_view(dir), dir));
}

#[test]
fn half_turn_flips_depth_axis() {
    let mut cam = OrbitCamera::default();
    cam.rotate(PI, 0.0);
    let view = cam.world_dir_to_view(Vec3::new(0.0, 0.0, 1.0));
    assert!(vec_approx_eq(view, Vec3::new(0.0, 0.0, -1.0)));
}

#[test]
fn polar_is_clamped_away_from_poles() {
    let mut cam = OrbitCamera::default();
    cam.rotate(0.0, -10.0);
    assert!(approx_eq(cam.polar, MIN_POLAR_MARGIN));
    cam.rotate(0.0, 20.0);
    assert!(approx_eq(cam.polar, PI - MIN_POLAR_MARGIN));
}

#[test]
fn azimuth_wraps_into_one_turn() {
    let mut cam = OrbitCamera::default();
    cam.rotate(-PI / 2.0, 0.0);
    assert!(approx_eq(cam.azimuth, 1.5 * PI));
}

#[test]
fn orbit_full_height_drag_is_full_turn() {
    let mut cam = OrbitCamera::default();
    cam.orbit_by_pixels(400.0, 0.0, 400.0);
    assert!(approx_eq(cam.azimuth, 0.0) || approx_eq(cam.azimuth, 2.0 * PI));
    assert!(approx_eq(cam.polar, PI / 2.0));
}

#[test]
fn orbit_drag_right_swings_camera_left() {
    let mut cam = OrbitCamera::default();
    cam.orbit_by_pixels(100.0, 0.0, 400.0);
    assert!(cam.position().x < 0.0);
}

#[test]
fn orbit_ignores_empty_viewport() {
    let mut cam = OrbitCamera::default();
    cam.orbit_by_pixels(50.0, 50.0, 0.0);
    assert_eq!(cam, OrbitCamera::default());
}

#[test]
fn distance_is_unchanged_by_rotation() {
    let mut cam = OrbitCamera::default();
    cam.orbit_by_pixels(37.0, -12.0, 300.0);
    assert!(approx_eq(cam.position().length(), CAMERA_DISTANCE));
}

#[test]
fn dolly_moves_toward_and_away() {
    let mut cam = OrbitCamera::default();
    cam.dolly(-1.0);
    assert!(cam.distance < CAMERA_DISTANCE);
    cam.dolly(1.0);
    assert!(approx_eq(cam.distance, CAMERA_DISTANCE));
}

#[test]
fn dolly_is_clamped() {
    let mut cam = OrbitCamera::default();
    for _ in 0..200 {
        cam.dolly(-1.0);
    }
    assert!(approx_eq(cam.distance, MIN_CAMERA_DISTANCE));
    for _ in 0..200 {
        cam.dolly(1.0);
    }
    assert!(approx_eq(cam.distance, MAX_CAMERA_DISTANCE));
}

#[test]
fn dolly_zero_delta_is_noop() {
    let mut cam = OrbitCamera::default();
    cam.dolly(0.0);
    assert_eq!(cam, OrbitCamera::default());
}
