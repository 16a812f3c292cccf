// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,reload}.

mod copy;
mod export;
mod reload;

pub use copy::copy;
pub use export::export;
pub use reload::reload;
