//! The single portfolio page.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of the display mode and the injected
//! [`PortfolioContent`]. The active palette is published once on the page
//! root as CSS custom properties; sections never branch on the mode
//! themselves.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::{
    about::About, contact::Contact, footer::Footer, hero::Hero, nav_bar::NavBar, projects::Projects,
};
use crate::content::PortfolioContent;
use crate::state::ui::{DisplayMode, UiState};
use crate::util::palette::palette_for;

/// `style` value for the page root in `mode`.
pub fn root_style(mode: DisplayMode) -> String {
    palette_for(mode).css_vars()
}

#[component]
pub fn PortfolioPage(content: PortfolioContent) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let mode = Memo::new(move |_| ui.get().display_mode);
    let copy = content.copy;

    view! {
        <div class="portfolio" data-theme=move || mode.get().as_str() style=move || root_style(mode.get())>
            <NavBar copy=copy links=content.nav/>
            <Hero copy=copy/>
            <About title=copy.about_title skills=content.skills/>
            <Projects title=copy.projects_title projects=content.projects/>
            <Contact title=copy.contact_title/>
            <Footer copyright=copy.copyright/>
        </div>
    }
}
