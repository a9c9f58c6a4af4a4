//! Reactive page state.

pub mod ui;
