// src/gui/views/mod.rs
use eframe::egui;

use crate::{
    config::{options::QueryOptions, state::ChartKind},
    model::ResultSet,
};

pub mod histogram;
pub mod means;
pub mod scatter;

/// One chart tab. Views are stateless; each frame they rebuild their data
/// from the current result set and query.
pub trait ChartView: Send + Sync + 'static {
    /// Short tab caption.
    fn label(&self) -> &'static str;

    /// Heading drawn above the chart.
    fn title(&self) -> &'static str;

    fn kind(&self) -> ChartKind;

    fn draw(&self, ui: &mut egui::Ui, results: &ResultSet, query: &QueryOptions);
}
