use super::*;

#[test]
fn light_mode_offers_moon() {
    assert_eq!(toggle_icon(DisplayMode::Light), ToggleIcon::Moon);
    assert_eq!(toggle_icon(DisplayMode::Light).glyph(), "☾");
}

#[test]
fn dark_mode_offers_sun() {
    assert_eq!(toggle_icon(DisplayMode::Dark), ToggleIcon::Sun);
    assert_eq!(toggle_icon(DisplayMode::Dark).glyph(), "☀");
}

#[test]
fn icon_changes_on_every_toggle() {
    let mut mode = DisplayMode::Light;
    let mut icons = Vec::new();
    for _ in 0..3 {
        icons.push(toggle_icon(mode));
        mode = mode.toggled();
    }
    assert_eq!(icons, [ToggleIcon::Moon, ToggleIcon::Sun, ToggleIcon::Moon]);
}

#[test]
fn icon_titles_differ() {
    assert_ne!(ToggleIcon::Moon.title(), ToggleIcon::Sun.title());
}
