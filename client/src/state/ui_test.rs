use super::*;

// =============================================================
// DisplayMode
// =============================================================

#[test]
fn display_mode_default_is_light() {
    assert_eq!(DisplayMode::default(), DisplayMode::Light);
    assert!(!DisplayMode::default().is_dark());
}

#[test]
fn toggled_flips_between_modes() {
    assert_eq!(DisplayMode::Light.toggled(), DisplayMode::Dark);
    assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
}

#[test]
fn data_theme_values() {
    assert_eq!(DisplayMode::Light.as_str(), "light");
    assert_eq!(DisplayMode::Dark.as_str(), "dark");
}

// =============================================================
// UiState
// =============================================================

#[test]
fn ui_state_starts_light() {
    assert_eq!(UiState::default().display_mode, DisplayMode::Light);
}

#[test]
fn single_toggle_switches_to_dark() {
    let mut state = UiState::default();
    assert_eq!(state.toggle_theme(), DisplayMode::Dark);
    assert!(state.display_mode.is_dark());
}

#[test]
fn even_number_of_toggles_restores_initial_state() {
    let mut state = UiState::default();
    for _ in 0..6 {
        state.toggle_theme();
    }
    assert_eq!(state, UiState::default());
}
