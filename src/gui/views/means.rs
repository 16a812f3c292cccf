// src/gui/views/means.rs
use eframe::egui;

use crate::{
    charts,
    config::{options::QueryOptions, state::ChartKind},
    gui::plot::{category_color, legend, padded_range, Canvas},
    model::{Region, ResultSet},
};

use super::scatter::region_x;

pub struct MeansView;
pub static VIEW: MeansView = MeansView;

impl super::ChartView for MeansView {
    fn label(&self) -> &'static str { "Averages" }
    fn title(&self) -> &'static str { "Average QE Score by Region and Category" }
    fn kind(&self) -> ChartKind { ChartKind::Means }

    fn draw(&self, ui: &mut egui::Ui, results: &ResultSet, query: &QueryOptions) {
        let chart = charts::bucket_means(results, &query.categories, query.score);
        legend(ui, query.categories.values());

        let reference = chart.reference_line().map(f64::from);
        let y = padded_range(chart.rows.iter().map(|m| m.mean), reference, (0.0, 3000.0));
        let canvas = Canvas::new(ui, (-0.5, Region::ALL.len() as f64 - 0.5), y);
        canvas.y_axis("Average Score");
        canvas.region_x_axis();

        if chart.is_empty() {
            canvas.empty_note();
        }

        let hover = canvas.hover_pos();
        let mut nearest: Option<(f32, String)> = None;
        for m in &chart.rows {
            let at = canvas.point(region_x(m.region), m.mean, category_color(m.category));
            if let Some(h) = hover {
                let d = at.distance(h);
                if d < 8.0 && nearest.as_ref().is_none_or(|(best, _)| d < *best) {
                    nearest = Some((d, format!(
                        "Region {}\n{}\nAverage {:.1} ({} climbers)",
                        m.region, m.category, m.mean, m.count
                    )));
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
