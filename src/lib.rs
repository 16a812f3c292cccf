// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod filter;
pub mod model;
pub mod progress;

pub mod charts;
pub mod placement;
pub mod source;
pub mod store;

pub mod cli;
pub mod file;
pub mod gui;

pub use error::LoadError;
pub use filter::Selection;
pub use model::{Category, ClimberRecord, PlacementRow, Region, ResultSet};
pub use placement::compute_placements;
