// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use qe_compare::{config::state::AppState, gui, progress::StderrProgress, store::ResultStore};
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let img = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/qe_compare.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = img.dimensions();
    Some(IconData { rgba: img.into_raw(), width: w, height: h })
}

fn main() {
    let state = AppState::default();
    let src = &state.options.source;
    let store = match ResultStore::open_location(&src.location, src.kind, Some(&mut StderrProgress)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Cannot load results from {}: {}", src.location, e);
            std::process::exit(1);
        }
    };

    let size = &state.gui;
    let mut viewport = ViewportBuilder::default()
        .with_inner_size([size.window_w as f32, size.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state, store) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
