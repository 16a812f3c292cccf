// src/gui/components/mod.rs
pub mod chart_tabs;
pub mod export_bar;
pub mod placement_table;
pub mod query_panel;
