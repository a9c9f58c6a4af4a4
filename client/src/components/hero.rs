//! Landing header: 3D scene, name, tagline, and the two call-to-action links.

use leptos::prelude::*;

use crate::components::scene_host::SceneHost;
use crate::content::{SectionId, SiteCopy};

#[component]
pub fn Hero(copy: SiteCopy) -> impl IntoView {
    view! {
        <header id=SectionId::Accueil.anchor() class="hero">
            <SceneHost/>
            <h1 class="hero__title">{copy.full_name()}</h1>
            <p class="hero__tagline">{copy.tagline}</p>
            <div class="hero__actions">
                <a href=SectionId::Apropos.href() class="btn btn--primary">
                    {copy.learn_more_label}
                </a>
                <a href=copy.cv_path download="" class="btn btn--secondary">
                    {copy.cv_label}
                </a>
            </div>
        </header>
    }
}
