// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod plot;
pub mod progress;
pub mod router;
pub mod views;

pub use app::run;
