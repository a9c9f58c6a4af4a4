//! "About" section: one circular badge per skill, popping in one after another.

#[cfg(test)]
#[path = "about_test.rs"]
mod about_test;

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{SectionId, SkillEntry};
use crate::util::reveal::{AnimatedReveal, RevealFrom};

/// Entrance for the badge at `index`.
pub fn skill_reveal(index: usize) -> AnimatedReveal {
    AnimatedReveal::on_mount(index, RevealFrom::Scale)
}

/// Inline style tinting a badge with the skill's color.
pub fn badge_style(skill: &SkillEntry) -> String {
    format!("color: {}", skill.color)
}

#[component]
pub fn About(title: &'static str, skills: &'static [SkillEntry]) -> impl IntoView {
    view! {
        <section id=SectionId::Apropos.anchor() class="section about">
            <div class="container">
                <h2 class="section__title">{title}</h2>
                <div class="about__skills">
                    {skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <Reveal reveal=skill_reveal(index) base_class="skill">
                                    <div class="skill__badge" style=badge_style(skill)>
                                        <span class="skill__percent">{skill.proficiency.label()}</span>
                                    </div>
                                    <h3 class="skill__name">{skill.name}</h3>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
