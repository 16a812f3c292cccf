// src/gui/views/histogram.rs
use std::collections::BTreeMap;

use eframe::egui::{self, Color32};

use crate::{
    charts::{self, Chart, HistogramBin},
    config::{options::QueryOptions, state::ChartKind},
    gui::plot::{category_color, legend, Canvas},
    model::ResultSet,
};

pub struct CategoryHistogramView;
pub static BY_CATEGORY: CategoryHistogramView = CategoryHistogramView;

pub struct OverallHistogramView;
pub static OVERALL: OverallHistogramView = OverallHistogramView;

const OVERALL_COLOR: Color32 = Color32::from_rgb(0x63, 0x6e, 0xfa);

/// Stack bins sharing a start on top of each other, in the order given
/// (category order for the per-category chart).
fn draw_stacked(ui: &mut egui::Ui, chart: &Chart<HistogramBin>) {
    let reference = chart.reference_line().map(f64::from);

    let mut totals: BTreeMap<i32, usize> = BTreeMap::new();
    for b in &chart.rows {
        *totals.entry(b.start).or_default() += b.count;
    }
    let x_lo = chart.rows.iter().map(|b| b.start).min();
    let x_hi = chart.rows.iter().map(|b| b.end).max();
    let (mut x0, mut x1) = match (x_lo, x_hi) {
        (Some(lo), Some(hi)) => (f64::from(lo), f64::from(hi)),
        _ => (0.0, 3000.0),
    };
    if let Some(r) = reference {
        x0 = x0.min(r - 100.0);
        x1 = x1.max(r + 100.0);
    }
    let y1 = totals.values().copied().max().unwrap_or(1) as f64 * 1.1;

    let canvas = Canvas::new(ui, (x0, x1), (0.0, y1.max(1.0)));
    canvas.y_axis("Count");
    canvas.score_x_axis();

    if chart.is_empty() {
        canvas.empty_note();
    }

    let hover = canvas.hover_pos();
    let mut stacked: BTreeMap<i32, usize> = BTreeMap::new();
    let mut tip: Option<String> = None;
    for b in &chart.rows {
        let base = stacked.entry(b.start).or_default();
        let color = b.category.map(category_color).unwrap_or(OVERALL_COLOR);
        let rect = canvas.bar(
            f64::from(b.start),
            f64::from(b.end),
            *base as f64,
            (*base + b.count) as f64,
            color,
        );
        *base += b.count;

        if hover.is_some_and(|h| rect.contains(h)) {
            let who = b.category.map(|c| format!("{c}: ")).unwrap_or_default();
            tip = Some(format!("{who}{}–{}\nCount {}", b.start, b.end - 1, b.count));
        }
    }

    if let Some(x) = reference {
        canvas.v_reference(x);
    }
    if let Some(text) = tip {
        canvas.tooltip(text);
    }
}

impl super::ChartView for CategoryHistogramView {
    fn label(&self) -> &'static str { "Histogram" }
    fn title(&self) -> &'static str { "Histogram of Scores by Climbing Category (200 point bins)" }
    fn kind(&self) -> ChartKind { ChartKind::CategoryHistogram }

    fn draw(&self, ui: &mut egui::Ui, results: &ResultSet, query: &QueryOptions) {
        legend(ui, query.categories.values());
        let chart = charts::histogram_by_category(results, &query.categories, query.score);
        draw_stacked(ui, &chart);
    }
}

impl super::ChartView for OverallHistogramView {
    fn label(&self) -> &'static str { "All scores" }
    fn title(&self) -> &'static str { "Histogram of QE Scores (200 point bins)" }
    fn kind(&self) -> ChartKind { ChartKind::OverallHistogram }

    fn draw(&self, ui: &mut egui::Ui, results: &ResultSet, query: &QueryOptions) {
        let chart = charts::histogram_overall(results, query.score);
        draw_stacked(ui, &chart);
    }
}
