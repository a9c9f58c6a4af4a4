use super::*;
use crate::camera::Vec3;
use crate::color::Rgb;
use crate::config::{Light, SphereSpec};

fn hero() -> SceneConfig {
    SceneConfig {
        rotatable: true,
        zoomable: false,
        lights: vec![Light::ambient(0.5), Light::directional(Vec3::new(3.0, 2.0, 1.0))],
        sphere: SphereSpec { radius: 1.0, scale: 2.0 },
        sphere_color: Rgb::new(0x3b, 0x82, 0xf6),
    }
}

fn sized_core() -> EngineCore {
    let mut core = EngineCore::new(hero());
    core.set_viewport(200, 100);
    core
}

#[test]
fn new_core_has_default_camera_and_no_viewport() {
    let core = EngineCore::new(hero());
    assert_eq!(core.camera, OrbitCamera::default());
    assert_eq!((core.viewport_width, core.viewport_height), (0, 0));
    assert!(core.frame().pixels.is_empty());
}

#[test]
fn set_viewport_reports_changes_only() {
    let mut core = EngineCore::new(hero());
    assert!(core.set_viewport(10, 10));
    assert!(!core.set_viewport(10, 10));
    assert!(core.set_viewport(20, 10));
}

#[test]
fn set_config_reports_changes_only() {
    let mut core = EngineCore::new(hero());
    assert!(!core.set_config(&hero()));
    let dark = hero().with_sphere_color(Rgb::new(0x1e, 0x40, 0xaf));
    assert!(core.set_config(&dark));
    assert_eq!(core.config.sphere_color, Rgb::new(0x1e, 0x40, 0xaf));
}

#[test]
fn drag_orbits_camera_and_requests_render() {
    let mut core = sized_core();
    assert_eq!(core.on_pointer_down(1, 10.0, 10.0), Action::CapturePointer);
    assert_eq!(core.on_pointer_move(1, 30.0, 10.0), Action::RenderNeeded);
    assert!(core.camera.azimuth > 0.0);
    assert_eq!(core.on_pointer_up(1), Action::None);
    assert_eq!(core.on_pointer_move(1, 60.0, 10.0), Action::None);
}

#[test]
fn non_rotatable_scene_ignores_drags() {
    let mut cfg = hero();
    cfg.rotatable = false;
    let mut core = EngineCore::new(cfg);
    core.set_viewport(200, 100);
    assert_eq!(core.on_pointer_down(1, 0.0, 0.0), Action::None);
    assert_eq!(core.on_pointer_move(1, 50.0, 0.0), Action::None);
    assert_eq!(core.camera, OrbitCamera::default());
}

#[test]
fn disabling_rotation_cancels_active_drag() {
    let mut core = sized_core();
    core.on_pointer_down(1, 0.0, 0.0);
    let mut frozen = hero();
    frozen.rotatable = false;
    core.set_config(&frozen);
    assert!(!core.input.is_dragging());
}

#[test]
fn wheel_is_ignored_when_zoom_disabled() {
    let mut core = sized_core();
    assert_eq!(core.on_wheel(-120.0), Action::None);
    assert_eq!(core.camera, OrbitCamera::default());
}

#[test]
fn wheel_dollies_when_zoom_enabled() {
    let mut cfg = hero();
    cfg.zoomable = true;
    let mut core = EngineCore::new(cfg);
    assert_eq!(core.on_wheel(-120.0), Action::RenderNeeded);
    assert!(core.camera.distance < OrbitCamera::default().distance);
}

#[test]
fn frame_matches_viewport() {
    let frame = sized_core().frame();
    assert_eq!((frame.width, frame.height), (200, 100));
}

#[test]
fn cancelled_pointer_releases_the_drag() {
    let mut core = sized_core();
    assert_eq!(core.on_pointer_down(1, 10.0, 10.0), Action::CapturePointer);
    assert_eq!(core.on_pointer_cancel(), Action::None);
    assert!(!core.input.is_dragging());

    let before = core.camera.azimuth;
    assert_eq!(core.on_pointer_down(2, 10.0, 10.0), Action::CapturePointer);
    assert_eq!(core.on_pointer_move(2, 40.0, 10.0), Action::RenderNeeded);
    assert!(core.camera.azimuth > before);
    assert_eq!(core.on_pointer_move(1, 80.0, 10.0), Action::None);
}

#[test]
fn cancel_without_drag_is_harmless() {
    let mut core = sized_core();
    assert_eq!(core.on_pointer_cancel(), Action::None);
    assert_eq!(core.on_pointer_down(3, 0.0, 0.0), Action::CapturePointer);
}
