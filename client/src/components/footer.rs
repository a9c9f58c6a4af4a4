use leptos::prelude::*;

/// Static copyright strip.
#[component]
pub fn Footer(copyright: &'static str) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__text">{copyright}</div>
        </footer>
    }
}
