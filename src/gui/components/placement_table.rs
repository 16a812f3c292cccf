// src/gui/components/placement_table.rs
//
// Placement table for the current query. Purely a view over app.placements.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::PLACEMENT_HEADERS, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let score = app.state.options.query.score;
    ui.label(format!("With a score of {score}"));
    ui.label("your climber would have placed as follows in the selected categories");

    if app.placements.is_empty() {
        let why = if score <= 0 { "Enter a score above 0 to compare" } else { "No results for this selection" };
        ui.weak(why);
        return;
    }

    let height = (ui.available_height() * 0.6).max(160.0);
    TableBuilder::new(ui)
        .id_salt("placements")
        .striped(true)
        .max_scroll_height(height)
        .cell_layout(Layout::left_to_right(Align::Center))
        .columns(Column::auto().at_least(60.0), PLACEMENT_HEADERS.len() - 1)
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for h in PLACEMENT_HEADERS {
                header.col(|ui| { ui.label(RichText::new(h).strong()); });
            }
        })
        .body(|body| {
            body.rows(20.0, app.placements.len(), |mut row| {
                let Some(p) = app.placements.get(row.index()) else { return };
                let place_text = if p.place == 1 {
                    RichText::new(p.place.to_string()).strong()
                } else {
                    RichText::new(p.place.to_string())
                };
                row.col(|ui| { ui.label(p.region.to_string()); });
                row.col(|ui| { ui.label(p.category.tag()).on_hover_text(p.category.label()); });
                row.col(|ui| { ui.label(place_text); });
                row.col(|ui| { ui.label(p.field_size.to_string()); });
            });
        });
}
