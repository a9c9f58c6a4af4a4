//! Contact form. There is no submission endpoint: the browser's default
//! navigation is suppressed and nothing is sent anywhere.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::content::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Message { rows: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField { name: "name", kind: FieldKind::Text, placeholder: "Votre nom" },
    ContactField { name: "email", kind: FieldKind::Email, placeholder: "Votre email" },
    ContactField { name: "message", kind: FieldKind::Message { rows: 5 }, placeholder: "Votre message" },
];

pub const SUBMIT_LABEL: &str = "Envoyer";

fn field_view(field: ContactField) -> AnyView {
    match field.kind {
        FieldKind::Text | FieldKind::Email => {
            let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
            view! { <input class="contact__field" type=input_type name=field.name placeholder=field.placeholder/> }
                .into_any()
        }
        FieldKind::Message { rows } => view! {
            <textarea class="contact__field" name=field.name placeholder=field.placeholder rows=rows.to_string()></textarea>
        }
        .into_any(),
    }
}

#[component]
pub fn Contact(title: &'static str) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        log::debug!("contact form submitted; no endpoint configured, nothing sent");
    };

    view! {
        <section id=SectionId::Contact.anchor() class="section contact">
            <div class="container">
                <h2 class="section__title">{title}</h2>
                <form class="contact__form" on:submit=on_submit>
                    {CONTACT_FIELDS.into_iter().map(field_view).collect_view()}
                    <button class="btn btn--primary contact__submit" type="submit">
                        {SUBMIT_LABEL}
                    </button>
                </form>
            </div>
        </section>
    }
}
