// src/gui/actions/reload.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    source::open_source,
};

/// Load from the source field and swap the whole result set in on success.
/// On failure the current results stay on screen.
pub fn reload(app: &mut App) {
    let location = app.source_text.trim().to_string();
    if location.is_empty() {
        app.status("Enter a file path or http:// URL");
        return;
    }

    let kind = app.state.options.source.kind;
    let source = open_source(&location, kind);
    logf!("Reload: Begin {}", source.describe());

    let mut prog = GuiProgress::new(app.status.clone());
    match app.store.reload(source.as_ref(), Some(&mut prog)) {
        Ok(results) => {
            app.state.options.source.location = location;
            app.recompute();
            logf!("Reload: OK results={}", results.len());
        }
        Err(e) => {
            app.status(format!("Load error: {e} (keeping previous data)"));
        }
    }
}
