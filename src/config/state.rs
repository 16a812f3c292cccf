// src/config/state.rs
use super::options::AppOptions;

/// Which chart the central panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    #[default]
    Scatter,
    Means,
    CategoryHistogram,
    OverallHistogram,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active chart tab
    pub chart: ChartKind,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1280,
            window_h: 800,
            chart: ChartKind::default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
