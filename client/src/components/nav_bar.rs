//! Fixed navigation bar with section anchors and the theme toggle.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::content::{NavLink, SiteCopy};
use crate::state::ui::{DisplayMode, UiState};

/// Icon on the theme toggle. It always depicts the mode a click switches *to*.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    Moon,
    Sun,
}

impl ToggleIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Moon => "☾",
            Self::Sun => "☀",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Moon => "Activer le mode sombre",
            Self::Sun => "Activer le mode clair",
        }
    }
}

pub fn toggle_icon(current: DisplayMode) -> ToggleIcon {
    match current {
        DisplayMode::Light => ToggleIcon::Moon,
        DisplayMode::Dark => ToggleIcon::Sun,
    }
}

#[component]
pub fn NavBar(copy: SiteCopy, links: &'static [NavLink]) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let icon = move || toggle_icon(ui.get().display_mode);

    let on_toggle = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get().display_mode);
        ui.update(|u| u.display_mode = next);
    };

    view! {
        <nav class="nav-bar">
            <h1 class="nav-bar__brand">
                <span class="nav-bar__brand-accent">{copy.first_name}</span>
                " "
                {copy.last_name}
            </h1>
            <ul class="nav-bar__links">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a class="nav-bar__link" href=link.target.href()>
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                class="nav-bar__toggle"
                type="button"
                on:click=on_toggle
                title=move || icon().title()
                aria-label=move || icon().title()
            >
                {move || icon().glyph()}
            </button>
        </nav>
    }
}
