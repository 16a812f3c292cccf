// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // apply the typed path first
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        app.out_path_dirty = false;
        logf!("Export: Out path set → {}", app.out_path_text);
    }

    if app.placements.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let msg = match file::write_placements(&app.state.options.export, &app.placements) {
        Ok(path) => format!("Exported {} row(s) to {}", app.placements.len(), path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
