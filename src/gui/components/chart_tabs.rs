// src/gui/components/chart_tabs.rs
//
// Chart tab strip. Switching only changes which view draws; chart data is
// rebuilt by the view every frame.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.chart;
        for view in router::all_views() {
            let selected = view.kind() == cur;
            if ui.selectable_label(selected, view.label()).on_hover_text(view.title()).clicked() && !selected {
                logf!("UI: Chart tab {:?} → {:?}", cur, view.kind());
                app.state.gui.chart = view.kind();
            }
        }
    });
}
