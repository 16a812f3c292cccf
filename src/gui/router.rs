// src/gui/router.rs
use crate::config::state::ChartKind::{self, *};
use super::views::{self, ChartView};

pub static VIEWS: &[&'static dyn ChartView] = &[
    &views::scatter::VIEW,
    &views::means::VIEW,
    &views::histogram::BY_CATEGORY,
    &views::histogram::OVERALL,
];

pub fn all_views() -> &'static [&'static dyn ChartView] {
    VIEWS
}

pub fn view_for(kind: ChartKind) -> &'static dyn ChartView {
    match kind {
        Scatter           => &views::scatter::VIEW,
        Means             => &views::means::VIEW,
        CategoryHistogram => &views::histogram::BY_CATEGORY,
        OverallHistogram  => &views::histogram::OVERALL,
    }
}
