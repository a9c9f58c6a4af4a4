//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure
//! presentation rules from component markup so both can be tested natively.

pub mod dark_mode;
pub mod hero_scene;
pub mod palette;
pub mod reveal;
#[cfg(feature = "hydrate")]
pub mod viewport;
