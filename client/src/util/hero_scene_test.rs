use super::*;
use crate::util::palette::{DARK_PALETTE, LIGHT_PALETTE};

/// Records every config it is asked to draw.
#[derive(Default)]
struct RecordingScene {
    rendered: Vec<SceneConfig>,
}

impl Scene3D for RecordingScene {
    type Error = String;

    fn render(&mut self, config: &SceneConfig) -> Result<(), String> {
        self.rendered.push(config.clone());
        Ok(())
    }
}

struct BrokenScene;

impl Scene3D for BrokenScene {
    type Error = String;

    fn render(&mut self, _config: &SceneConfig) -> Result<(), String> {
        Err("no context".to_owned())
    }
}

#[test]
fn palette_sphere_tokens_parse() {
    assert!(Rgb::from_hex(LIGHT_PALETTE.sphere_color).is_ok());
    assert!(Rgb::from_hex(DARK_PALETTE.sphere_color).is_ok());
}

#[test]
fn sphere_color_follows_mode() {
    assert_eq!(sphere_color(DisplayMode::Light), Rgb::new(0x3b, 0x82, 0xf6));
    assert_eq!(sphere_color(DisplayMode::Dark), Rgb::new(0x1e, 0x40, 0xaf));
}

#[test]
fn hero_config_is_rotatable_without_zoom() {
    let cfg = hero_scene_config(DisplayMode::Light);
    assert!(cfg.rotatable);
    assert!(!cfg.zoomable);
    assert_eq!(cfg.lights.len(), 2);
    assert!((cfg.ambient_intensity() - AMBIENT_INTENSITY).abs() < 1e-12);
    assert!((cfg.sphere.world_radius() - 2.0).abs() < 1e-12);
}

#[test]
fn color_is_the_only_themed_parameter() {
    let light = hero_scene_config(DisplayMode::Light);
    let dark = hero_scene_config(DisplayMode::Dark);
    assert_ne!(light.sphere_color, dark.sphere_color);
    assert_eq!(light.clone().with_sphere_color(dark.sphere_color), dark);
}

#[test]
fn sync_scene_renders_mode_color() {
    let mut scene = RecordingScene::default();
    sync_scene(&mut scene, DisplayMode::Light).unwrap();
    sync_scene(&mut scene, DisplayMode::Dark).unwrap();
    let colors: Vec<_> = scene.rendered.iter().map(|c| c.sphere_color.to_hex()).collect();
    assert_eq!(colors, ["#3b82f6", "#1e40af"]);
}

#[test]
fn sync_scene_propagates_errors() {
    assert_eq!(sync_scene(&mut BrokenScene, DisplayMode::Dark), Err("no context".to_owned()));
}
