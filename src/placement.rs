// src/placement.rs
use crate::{
    filter::Selection,
    model::{Category, PlacementRow, Region, ResultSet},
};

/// Where a candidate score would have placed in each (region, category)
/// bucket.
///
/// - `candidate_score <= 0` means no comparison: returns nothing.
/// - Place is 1 + the number of strictly higher scores, so a tie keeps the
///   candidate level with the tied climbers.
/// - Rows come region-major, category-minor, in selection order; empty
///   buckets are left out.
pub fn compute_placements(
    results: &ResultSet,
    candidate_score: i32,
    regions: &Selection<Region>,
    categories: &Selection<Category>,
) -> Vec<PlacementRow> {
    if candidate_score <= 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for &region in regions.values() {
        for &category in categories.values() {
            let mut field_size = 0usize;
            let mut higher = 0usize;
            for r in results.iter().filter(|r| r.region == region && r.category == category) {
                field_size += 1;
                if r.score > candidate_score { higher += 1; }
            }
            if field_size > 0 {
                out.push(PlacementRow { region, category, place: higher + 1, field_size });
            }
        }
    }
    out
}

/// Table cells for display/export, one `Vec` per row.
pub fn placement_cells(rows: &[PlacementRow]) -> Vec<Vec<String>> {
    rows.iter().map(PlacementRow::cells).collect()
}
