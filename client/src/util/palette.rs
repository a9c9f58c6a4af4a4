//! Light/dark color palettes.
//!
//! Every themed surface reads its colors from the active [`StylePalette`],
//! published on the page root as CSS custom properties.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::state::ui::DisplayMode;

/// Named color tokens for one display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StylePalette {
    pub page_background: &'static str,
    pub page_text: &'static str,
    pub nav_background: &'static str,
    pub toggle_background: &'static str,
    /// Background of the projects band.
    pub alt_section_background: &'static str,
    pub card_background: &'static str,
    /// Material color of the hero sphere.
    pub sphere_color: &'static str,
}

pub const LIGHT_PALETTE: StylePalette = StylePalette {
    page_background: "#ffffff",
    page_text: "#111827",
    nav_background: "rgba(255, 255, 255, 0.9)",
    toggle_background: "#e5e7eb",
    alt_section_background: "#f3f4f6",
    card_background: "#ffffff",
    sphere_color: "#3b82f6",
};

pub const DARK_PALETTE: StylePalette = StylePalette {
    page_background: "#111827",
    page_text: "#ffffff",
    nav_background: "rgba(17, 24, 39, 0.9)",
    toggle_background: "#374151",
    alt_section_background: "#1f2937",
    card_background: "#374151",
    sphere_color: "#1e40af",
};

/// Palette for `mode`.
pub fn palette_for(mode: DisplayMode) -> &'static StylePalette {
    match mode {
        DisplayMode::Light => &LIGHT_PALETTE,
        DisplayMode::Dark => &DARK_PALETTE,
    }
}

impl StylePalette {
    /// Inline `style` value declaring the palette as CSS custom properties.
    pub fn css_vars(&self) -> String {
        [
            ("--page-bg", self.page_background),
            ("--page-fg", self.page_text),
            ("--nav-bg", self.nav_background),
            ("--toggle-bg", self.toggle_background),
            ("--alt-section-bg", self.alt_section_background),
            ("--card-bg", self.card_background),
            ("--sphere", self.sphere_color),
        ]
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
    }
}
