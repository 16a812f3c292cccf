// tests/placements.rs
//
// Placement calculator behaviour on small hand-built result sets.

use qe_compare::{
    compute_placements, Category, ClimberRecord, PlacementRow, Region, ResultSet, Selection,
};

fn rec(region: u8, category: Category, score: i32) -> ClimberRecord {
    ClimberRecord {
        region: Region(region),
        category,
        first_name: "Test".into(),
        last_name: format!("Climber{score}"),
        score,
        competition: "Test QE".into(),
    }
}

fn two_mjr() -> ResultSet {
    ResultSet::new(vec![rec(11, Category::MJR, 2200), rec(11, Category::MJR, 1800)])
}

fn mixed() -> ResultSet {
    ResultSet::new(vec![
        rec(11, Category::MJR, 2200),
        rec(11, Category::MJR, 1800),
        rec(11, Category::FYA, 2000),
        rec(12, Category::FYA, 2100),
        rec(12, Category::FYA, 2000),
        rec(12, Category::FYA, 1500),
        rec(92, Category::MYD, 900),
        rec(31, Category::FJR, 2600),
    ])
}

fn one(r: u8) -> Selection<Region> { Selection::Subset(vec![Region(r)]) }
fn cat(c: Category) -> Selection<Category> { Selection::Subset(vec![c]) }

#[test]
fn worked_example_place_two_of_two() {
    let rows = compute_placements(&two_mjr(), 2000, &one(11), &cat(Category::MJR));
    assert_eq!(rows, vec![PlacementRow { region: Region(11), category: Category::MJR, place: 2, field_size: 2 }]);
}

#[test]
fn worked_example_above_everyone() {
    let rows = compute_placements(&two_mjr(), 2500, &one(11), &cat(Category::MJR));
    assert_eq!(rows, vec![PlacementRow { region: Region(11), category: Category::MJR, place: 1, field_size: 2 }]);
}

#[test]
fn non_positive_score_is_no_comparison() {
    let rs = mixed();
    assert!(compute_placements(&rs, 0, &Selection::All, &Selection::All).is_empty());
    assert!(compute_placements(&rs, -50, &Selection::All, &Selection::All).is_empty());
}

#[test]
fn ties_do_not_push_candidate_down() {
    // 2100 > 2000, the other 2000 is a tie
    let rows = compute_placements(&mixed(), 2000, &one(12), &cat(Category::FYA));
    assert_eq!(rows[0].place, 2);
    assert_eq!(rows[0].field_size, 3);
}

#[test]
fn field_size_matches_bucket_and_place_in_range() {
    let rs = mixed();
    for score in [1, 900, 1500, 2000, 2150, 5000] {
        for row in compute_placements(&rs, score, &Selection::All, &Selection::All) {
            let bucket = rs
                .iter()
                .filter(|r| r.region == row.region && r.category == row.category)
                .count();
            assert_eq!(row.field_size, bucket);
            assert!(row.field_size > 0);
            assert!((1..=row.field_size + 1).contains(&row.place));
        }
    }
}

#[test]
fn every_non_empty_bucket_gets_exactly_one_row() {
    let rows = compute_placements(&mixed(), 1000, &Selection::All, &Selection::All);
    let buckets: Vec<(u8, Category)> = rows.iter().map(|r| (r.region.code(), r.category)).collect();
    assert_eq!(
        buckets,
        vec![
            (11, Category::MJR),
            (11, Category::FYA),
            (12, Category::FYA),
            (31, Category::FJR),
            (92, Category::MYD),
        ]
    );
}

#[test]
fn idempotent() {
    let rs = mixed();
    let cats = Selection::from_values([Category::FYA, Category::MJR]);
    let a = compute_placements(&rs, 1900, &Selection::All, &cats);
    let b = compute_placements(&rs, 1900, &Selection::All, &cats);
    assert_eq!(a, b);
}

#[test]
fn place_never_worsens_as_score_rises() {
    let rs = mixed();
    let mut prev: Option<Vec<PlacementRow>> = None;
    for score in (50..=3000).step_by(50) {
        let rows = compute_placements(&rs, score, &Selection::All, &Selection::All);
        if let Some(p) = &prev {
            assert_eq!(p.len(), rows.len());
            for (before, now) in p.iter().zip(&rows) {
                assert_eq!((before.region, before.category), (now.region, now.category));
                assert!(now.place <= before.place, "score {score}: {now:?} vs {before:?}");
            }
        }
        prev = Some(rows);
    }
}

#[test]
fn absent_region_filter_equals_full_canonical_set() {
    let rs = mixed();
    let explicit = Selection::Subset(Region::ALL.to_vec());
    for score in [800, 2000, 2700] {
        assert_eq!(
            compute_placements(&rs, score, &Selection::All, &Selection::All),
            compute_placements(&rs, score, &explicit, &Selection::All),
        );
        assert_eq!(
            compute_placements(&rs, score, &Selection::from_optional(Some(vec![])), &Selection::All),
            compute_placements(&rs, score, &Selection::from_optional(None), &Selection::All),
        );
    }
}

#[test]
fn order_follows_the_filters() {
    let rs = mixed();
    let regions = Selection::Subset(vec![Region(12), Region(11)]);
    let cats = Selection::Subset(vec![Category::FYA, Category::MJR]);
    let got: Vec<(u8, Category)> = compute_placements(&rs, 1000, &regions, &cats)
        .iter()
        .map(|r| (r.region.code(), r.category))
        .collect();
    assert_eq!(got, vec![(12, Category::FYA), (11, Category::FYA), (11, Category::MJR)]);
}

#[test]
fn unknown_regions_are_ignored() {
    let rs = mixed();
    let regions = Selection::Subset(vec![Region(10), Region(99), Region(11)]);
    let rows = compute_placements(&rs, 2000, &regions, &Selection::All);
    assert!(rows.iter().all(|r| r.region == Region(11)));
    assert_eq!(rows.len(), 2);
}

#[test]
fn empty_result_set_gives_no_rows() {
    assert!(compute_placements(&ResultSet::default(), 2000, &Selection::All, &Selection::All).is_empty());
}
