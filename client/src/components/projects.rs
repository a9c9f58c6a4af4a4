//! Project gallery. Cards rise into place the first time they scroll into view.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{ProjectEntry, SectionId};
use crate::util::reveal::{AnimatedReveal, RevealFrom};

/// Entrance for the card at `index`.
pub fn project_reveal(index: usize) -> AnimatedReveal {
    AnimatedReveal::on_scroll_into_view(index, RevealFrom::Rise)
}

#[component]
pub fn Projects(title: &'static str, projects: &'static [ProjectEntry]) -> impl IntoView {
    view! {
        <section id=SectionId::Projets.anchor() class="section section--alt projects">
            <div class="container">
                <h2 class="section__title">{title}</h2>
                <div class="projects__grid">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <Reveal reveal=project_reveal(index) base_class="project-card">
                                    <img class="project-card__image" src=project.image alt=project.title/>
                                    <div class="project-card__body">
                                        <h3 class="project-card__title">{project.title}</h3>
                                        <p class="project-card__description">{project.description}</p>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
