// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.placements.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = file::placements_to_string(&app.state.options.export, &app.placements);
    logf!(
        "Copy: rows={}, headers={}",
        app.placements.len(),
        app.state.options.export.include_headers
    );

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
