// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        consts::{DATA_ATTRIBUTION, WINDOW_TITLE},
        state::AppState,
    },
    model::{PlacementRow, ResultSet},
    placement::compute_placements,
    store::ResultStore,
};

use super::{components, router, views::ChartView};

/// Open the window over an already loaded store.
pub fn run(options: eframe::NativeOptions, state: AppState, store: ResultStore) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(App::new(state, store)))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded once, swapped whole on reload
    pub store: ResultStore,
    pub results: Arc<ResultSet>,

    // derived per query
    pub placements: Vec<PlacementRow>,

    // text fields (mapped <-> options on apply)
    pub source_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, store: ResultStore) -> Self {
        let results = store.snapshot();
        let source_text = state.options.source.location.clone();
        let status = Arc::new(Mutex::new(format!("Loaded {} result(s) from {}", results.len(), source_text)));
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: results={}, chart={:?}", results.len(), state.gui.chart);

        let mut app = Self {
            state,
            store,
            results,
            placements: Vec::new(),
            source_text,
            out_path_text,
            out_path_dirty: false,
            status,
        };
        app.recompute();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_view(&self) -> &'static dyn ChartView { router::view_for(self.state.gui.chart) }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Re-read the store and rebuild everything derived from the query.
    pub fn recompute(&mut self) {
        self.results = self.store.snapshot();
        let q = &self.state.options.query;
        self.placements = compute_placements(&self.results, q.score, &q.regions, &q.categories);
        logd!(
            "Query: score={} categories={:?} → {} placement row(s)",
            q.score, q.categories, self.placements.len()
        );
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Virtual Bouldering Regional Qualifier Events Across USAC Regions");
                ui.small(DATA_ATTRIBUTION);
                ui.label("Use this tool to compare a climber's score to others or to see general trends among climbers at QEs across the country");
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.status_text());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} result(s)", self.results.len()));
                });
            });
        });

        egui::SidePanel::left("query")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                components::query_panel::draw(ui, self);
                ui.separator();
                components::placement_table::draw(ui, self);
                ui.separator();
                components::export_bar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::chart_tabs::draw(ui, self);
            ui.separator();

            let view = self.current_view();
            ui.strong(view.title());
            view.draw(ui, &self.results, &self.state.options.query);
        });
    }
}
