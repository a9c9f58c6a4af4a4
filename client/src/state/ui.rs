//! Presentation state shared through Leptos context.
//!
//! DESIGN
//! ======
//! The display mode is the page's only mutable state. It starts light on
//! every load and changes only through the nav-bar toggle.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Light/dark presentation of the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Value written to `data-theme`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// UI state provided as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub display_mode: DisplayMode,
}

impl UiState {
    /// Flip the display mode and return the new one.
    pub fn toggle_theme(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggled();
        self.display_mode
    }
}
