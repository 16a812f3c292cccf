// src/gui/components/query_panel.rs
//
// Score input and category multi-select. Any change recomputes the
// placement table straight away.

use eframe::egui;
use crate::{
    config::consts::SCORE_STEP,
    filter::Selection,
    gui::{app::App, plot::category_color},
    model::Category,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut changed = false;
    let q = &mut app.state.options.query;

    ui.label(egui::RichText::new("Enter your climber's score").strong());
    ui.horizontal(|ui| {
        if ui.small_button("−").clicked() {
            q.score = (q.score - SCORE_STEP).max(0);
            changed = true;
        }
        let resp = ui.add(
            egui::DragValue::new(&mut q.score)
                .range(0..=i32::MAX)
                .speed(SCORE_STEP as f64),
        );
        changed |= resp.changed();
        if ui.small_button("+").clicked() {
            q.score = q.score.saturating_add(SCORE_STEP);
            changed = true;
        }
    });

    ui.add_space(6.0);
    ui.label(egui::RichText::new("Choose your climber's category").strong());
    ui.horizontal_wrapped(|ui| {
        for c in Category::ALL {
            let picked = !q.categories.is_all() && q.categories.contains(&c);
            let text = egui::RichText::new(c.tag()).color(category_color(c));
            if ui.selectable_label(picked, text).on_hover_text(c.label()).clicked() {
                q.categories.toggle(c);
                changed = true;
            }
        }
    });
    ui.horizontal(|ui| {
        if ui.button("All").clicked() {
            q.categories = Selection::from_values(Category::ALL);
            changed = true;
        }
        if ui.button("None").on_hover_text("No selection shows every category").clicked() {
            q.categories = Selection::All;
            changed = true;
        }
    });

    if changed {
        logf!("UI: query changed score={} categories={:?}", q.score, q.categories);
        app.recompute();
    }
}
