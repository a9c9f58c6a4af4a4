//! Section and widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page's sections from injected content and read the
//! shared `UiState` from Leptos context where they are themed.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod projects;
pub mod reveal;
pub mod scene_host;
