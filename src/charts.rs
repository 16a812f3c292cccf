// src/charts.rs
//! Chart data builders.
//!
//! Each builder is a pure transform of a [`ResultSet`] and returns a
//! [`Chart`]. The comparison score rides along untouched; drawing a line for
//! it is the renderer's job. An empty result set yields an empty chart.

use std::collections::BTreeMap;

use crate::{
    config::consts::HISTOGRAM_BIN_WIDTH,
    filter::Selection,
    model::{Category, ClimberRecord, Region, ResultSet},
};

#[derive(Clone, Debug, PartialEq)]
pub struct Chart<T> {
    pub rows: Vec<T>,
    /// Passed through as given.
    pub comparison_score: i32,
}

impl<T> Chart<T> {
    fn new(rows: Vec<T>, comparison_score: i32) -> Self {
        Self { rows, comparison_score }
    }

    /// Where to draw the "your score" line, if anywhere.
    pub fn reference_line(&self) -> Option<i32> {
        (self.comparison_score > 0).then_some(self.comparison_score)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScatterPoint {
    pub region: Region,
    pub score: i32,
    pub category: Category,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BucketMean {
    pub region: Region,
    pub category: Category,
    pub mean: f64,
    pub count: usize,
}

/// Half-open score interval `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistogramBin {
    /// `None` for the all-categories histogram.
    pub category: Option<Category>,
    pub start: i32,
    pub end: i32,
    pub count: usize,
}

fn selected<'a>(
    results: &'a ResultSet,
    categories: &'a Selection<Category>,
) -> impl Iterator<Item = &'a ClimberRecord> + 'a {
    results.iter().filter(move |r| categories.contains(&r.category))
}

/// Lower edge of the bin holding `score`.
pub fn bin_start(score: i32) -> i32 {
    score.div_euclid(HISTOGRAM_BIN_WIDTH) * HISTOGRAM_BIN_WIDTH
}

/// Raw (region, score, category) per record, in load order.
pub fn scatter(
    results: &ResultSet,
    categories: &Selection<Category>,
    comparison_score: i32,
) -> Chart<ScatterPoint> {
    let rows = selected(results, categories)
        .map(|r| ScatterPoint { region: r.region, score: r.score, category: r.category })
        .collect();
    Chart::new(rows, comparison_score)
}

/// Mean score per non-empty (region, category), region then canonical
/// category order.
pub fn bucket_means(
    results: &ResultSet,
    categories: &Selection<Category>,
    comparison_score: i32,
) -> Chart<BucketMean> {
    let mut sums: BTreeMap<(Region, Category), (i64, usize)> = BTreeMap::new();
    for r in selected(results, categories) {
        let e = sums.entry((r.region, r.category)).or_default();
        e.0 += i64::from(r.score);
        e.1 += 1;
    }
    let rows = sums
        .into_iter()
        .map(|((region, category), (sum, count))| BucketMean {
            region,
            category,
            mean: sum as f64 / count as f64,
            count,
        })
        .collect();
    Chart::new(rows, comparison_score)
}

fn bins<'a, I>(records: I, key: impl Fn(&ClimberRecord) -> Option<Category>) -> Vec<HistogramBin>
where
    I: Iterator<Item = &'a ClimberRecord>,
{
    let mut counts: BTreeMap<(Option<Category>, i32), usize> = BTreeMap::new();
    for r in records {
        *counts.entry((key(r), bin_start(r.score))).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((category, start), count)| HistogramBin {
            category,
            start,
            end: start + HISTOGRAM_BIN_WIDTH,
            count,
        })
        .collect()
}

/// 200-point bins per category, ordered by category then bin.
pub fn histogram_by_category(
    results: &ResultSet,
    categories: &Selection<Category>,
    comparison_score: i32,
) -> Chart<HistogramBin> {
    Chart::new(bins(selected(results, categories), |r| Some(r.category)), comparison_score)
}

/// 200-point bins over every record, ignoring categories.
pub fn histogram_overall(results: &ResultSet, comparison_score: i32) -> Chart<HistogramBin> {
    Chart::new(bins(results.iter(), |_| None), comparison_score)
}
