//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PortfolioContent;
use crate::pages::portfolio::PortfolioPage;
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Class put on `<html>` by `hydrate()`. Reveal targets only start hidden
/// under it, so a page whose bundle never loads still shows every section.
pub const SCRIPTED_CLASS: &str = "js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page's presentation state. The mode starts light on every
/// load; nothing is persisted between visits.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Sanae Ahjoub | Portfolio"/>

        <Router>
            <Routes fallback=|| "Page introuvable.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <PortfolioPage content=PortfolioContent::default()/> }
                />
            </Routes>
        </Router>
    }
}
