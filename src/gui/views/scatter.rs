// src/gui/views/scatter.rs
use eframe::egui;

use crate::{
    charts,
    config::{options::QueryOptions, state::ChartKind},
    gui::plot::{category_color, legend, padded_range, Canvas},
    model::{Region, ResultSet},
};

pub struct ScatterView;
pub static VIEW: ScatterView = ScatterView;

/// x position of a region on the categorical axis.
pub(super) fn region_x(region: Region) -> f64 {
    Region::ALL.iter().position(|r| *r == region).unwrap_or(0) as f64
}

impl super::ChartView for ScatterView {
    fn label(&self) -> &'static str { "Scores" }
    fn title(&self) -> &'static str { "Qualifying Event Scores by Region and Category" }
    fn kind(&self) -> ChartKind { ChartKind::Scatter }

    fn draw(&self, ui: &mut egui::Ui, results: &ResultSet, query: &QueryOptions) {
        let chart = charts::scatter(results, &query.categories, query.score);
        legend(ui, query.categories.values());

        let reference = chart.reference_line().map(f64::from);
        let y = padded_range(chart.rows.iter().map(|p| f64::from(p.score)), reference, (0.0, 3000.0));
        let canvas = Canvas::new(ui, (-0.5, Region::ALL.len() as f64 - 0.5), y);
        canvas.y_axis("Score");
        canvas.region_x_axis();

        if chart.is_empty() {
            canvas.empty_note();
        }

        let hover = canvas.hover_pos();
        let mut nearest: Option<(f32, String)> = None;
        for p in &chart.rows {
            let at = canvas.point(region_x(p.region), f64::from(p.score), category_color(p.category));
            if let Some(h) = hover {
                let d = at.distance(h);
                if d < 8.0 && nearest.as_ref().is_none_or(|(best, _)| d < *best) {
                    nearest = Some((d, format!("Region {}\n{}\nScore {}", p.region, p.category, p.score)));
                }
            }
        }

        if let Some(y) = reference {
            canvas.h_reference(y);
        }
        if let Some((_, text)) = nearest {
            canvas.tooltip(text);
        }
    }
}
