// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = export.format;
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, ExportFormat::Tsv, "TSV");
            ui.checkbox(&mut export.include_headers, "Include headers");
        });

        if fmt != prev_fmt {
            export.format = fmt;
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });

    ui.separator();

    // --- Data source ---
    ui.horizontal(|ui| {
        ui.label("Data:");
        ui.add(egui::TextEdit::singleline(&mut app.source_text).font(egui::TextStyle::Monospace))
            .on_hover_text("Results CSV/TSV, report text dump (.txt), or http:// URL");
    });
    if ui.button("Reload data").clicked() {
        actions::reload(app);
    }
}
