use super::*;

#[test]
fn light_mode_uses_light_palette() {
    assert_eq!(palette_for(DisplayMode::Light), &LIGHT_PALETTE);
    assert_eq!(palette_for(DisplayMode::default()).sphere_color, "#3b82f6");
}

#[test]
fn dark_mode_uses_dark_palette() {
    let dark = palette_for(DisplayMode::Dark);
    assert_eq!(dark.sphere_color, "#1e40af");
    assert_eq!(dark.page_background, "#111827");
    assert_eq!(dark.nav_background, "rgba(17, 24, 39, 0.9)");
}

#[test]
fn every_themed_token_differs_between_modes() {
    let (l, d) = (LIGHT_PALETTE, DARK_PALETTE);
    assert_ne!(l.page_background, d.page_background);
    assert_ne!(l.page_text, d.page_text);
    assert_ne!(l.nav_background, d.nav_background);
    assert_ne!(l.toggle_background, d.toggle_background);
    assert_ne!(l.alt_section_background, d.alt_section_background);
    assert_ne!(l.card_background, d.card_background);
    assert_ne!(l.sphere_color, d.sphere_color);
}

#[test]
fn double_toggle_returns_original_palette() {
    let mode = DisplayMode::Light;
    assert_eq!(palette_for(mode.toggled().toggled()), palette_for(mode));
    assert_ne!(palette_for(mode.toggled()), palette_for(mode));
}

#[test]
fn css_vars_declares_each_token() {
    let vars = LIGHT_PALETTE.css_vars();
    assert!(vars.starts_with("--page-bg: #ffffff;"));
    assert!(vars.contains("--nav-bg: rgba(255, 255, 255, 0.9);"));
    assert!(vars.ends_with("--sphere: #3b82f6"));
    assert!(!vars.ends_with(';'));
    assert_eq!(vars.matches(';').count(), 6);
}
