//! Presentational Dioxus components shared by the federation app.

pub mod components;

pub use components::*;
