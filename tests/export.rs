// tests/export.rs
//
// Placement export paths/formats and the CLI renderer.

use std::fs;
use std::path::PathBuf;

use qe_compare::cli::{self, View};
use qe_compare::config::options::{ExportFormat, ExportOptions, SourceKind};
use qe_compare::file::{placements_to_string, write_placements};
use qe_compare::{compute_placements, Category, ClimberRecord, Region, ResultSet, Selection};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("qe_export_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn results() -> ResultSet {
    let rec = |region, category, score| ClimberRecord {
        region: Region(region),
        category,
        first_name: "F".into(),
        last_name: "L".into(),
        score,
        competition: "QE".into(),
    };
    ResultSet::new(vec![
        rec(11, Category::MJR, 2200),
        rec(11, Category::MJR, 1800),
        rec(12, Category::FYA, 2100),
    ])
}

#[test]
fn default_path_follows_format() {
    let mut opts = ExportOptions::default();
    assert!(opts.is_default_path());
    assert!(opts.out_path().ends_with("placements.csv"));
    opts.format = ExportFormat::Tsv;
    assert!(opts.out_path().ends_with("placements.tsv"));
}

#[test]
fn typed_extension_wins_over_format() {
    let dir = tmp_dir("ext");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("mine.txt").to_str().unwrap());
    opts.format = ExportFormat::Tsv;
    assert_eq!(opts.out_path(), dir.join("mine.txt"));
    assert!(!opts.is_default_path());

    opts.set_path("  ");
    assert!(opts.is_default_path());
}

#[test]
fn directory_input_keeps_default_name() {
    let dir = tmp_dir("dir");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.to_str().unwrap());
    assert_eq!(opts.out_path(), dir.join("placements.csv"));
    assert_eq!(opts.current_dir(), dir.as_path());

    opts.set_path("reports/");
    assert_eq!(opts.out_path(), PathBuf::from("reports/").join("placements.csv"));
}

#[test]
fn write_creates_parent_and_respects_headers() {
    let dir = tmp_dir("write");
    let mut opts = ExportOptions::default();
    opts.set_path(dir.join("nested/deeper/out.csv").to_str().unwrap());

    let rows = compute_placements(&results(), 2000, &Selection::All, &Selection::All);
    let path = write_placements(&opts, &rows).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Region,Category,Place,Number of Climbers\n11,MJR,2,2\n12,FYA,2,1\n");

    opts.include_headers = false;
    opts.format = ExportFormat::Tsv;
    assert_eq!(placements_to_string(&opts, &rows), "11\tMJR\t2\t2\n12\tFYA\t2\t1\n");
}

#[test]
fn cli_parses_flags() {
    let p = cli::parse_args(args(&[
        "--data", "dump.txt", "--source", "report", "--score", "1750",
        "--cat", "fjr,MJR,bogus", "--regions", "11,21-32", "--view", "means",
        "--format", "tsv", "--no-headers", "-o", "out/", "-v",
    ]))
    .unwrap();

    assert_eq!(p.options.source.location, "dump.txt");
    assert_eq!(p.options.source.kind, SourceKind::Report);
    assert_eq!(p.options.query.score, 1750);
    assert_eq!(p.options.query.categories, Selection::Subset(vec![Category::FJR, Category::MJR]));
    assert_eq!(
        p.options.query.regions,
        Selection::Subset(vec![Region(11), Region(21), Region(22), Region(31), Region(32)])
    );
    assert_eq!(p.view, View::Means);
    assert_eq!(p.options.export.format, ExportFormat::Tsv);
    assert!(!p.options.export.include_headers);
    assert_eq!(p.out.as_deref(), Some("out/"));
    assert!(p.verbose);
}

#[test]
fn cli_rejects_bad_input() {
    assert!(cli::parse_args(args(&["--bogus"])).is_err());
    assert!(cli::parse_args(args(&["--score"])).is_err());
    assert!(cli::parse_args(args(&["--score", "abc"])).is_err());
    assert!(cli::parse_args(args(&["--view", "pie"])).is_err());
    assert!(cli::parse_args(args(&["--regions", "32-11"])).is_err());
}

#[test]
fn cli_defaults() {
    let p = cli::parse_args(Vec::<String>::new()).unwrap();
    assert_eq!(p.view, View::Placements);
    assert_eq!(p.options.query.score, 2000);
    assert!(p.options.query.categories.is_all());
    assert!(p.options.query.regions.is_all());
    assert!(p.out.is_none());
}

#[test]
fn cli_renders_each_view() {
    let rs = results();
    let mut p = cli::parse_args(args(&["--score", "2000"])).unwrap();

    assert_eq!(
        cli::render(&p, &rs),
        "Region,Category,Place,Number of Climbers\n11,MJR,2,2\n12,FYA,2,1\n"
    );

    p.view = View::Means;
    assert_eq!(
        cli::render(&p, &rs),
        "Region,Category,Average Score,Climbers\n11,MJR,2000.0,2\n12,FYA,2100.0,1\n"
    );

    p.view = View::HistogramAll;
    assert_eq!(cli::render(&p, &rs), "From,To,Count\n1800,2000,1\n2000,2200,1\n2200,2400,1\n");

    p.view = View::Scatter;
    p.options.query.categories = Selection::Subset(vec![Category::FYA]);
    assert_eq!(cli::render(&p, &rs), "Region,Score,Category\n12,2100,FYA\n");

    p.view = View::Histogram;
    assert_eq!(cli::render(&p, &rs), "Category,From,To,Count\nFYA,2000,2200,1\n");
}

#[test]
fn cli_no_comparison_gives_header_only() {
    let p = cli::parse_args(args(&["--score", "0"])).unwrap();
    assert_eq!(cli::render(&p, &results()), "Region,Category,Place,Number of Climbers\n");
}

#[test]
fn cli_region_filter_drops_unusable_tokens() {
    let p = cli::parse_args(args(&["--regions", "11,300,abc"])).unwrap();
    assert_eq!(p.options.query.regions, Selection::Subset(vec![Region(11)]));

    let p = cli::parse_args(args(&["--regions", "abc"])).unwrap();
    assert!(p.options.query.regions.is_all());
}

#[test]
fn cli_output_directory_names_file_after_view() {
    let dir = tmp_dir("view_names");
    let out = format!("{}/", dir.to_str().unwrap());

    let mut p = cli::parse_args(args(&["-o", &out])).unwrap();
    assert_eq!(cli::output_path(&p), Some(dir.join("placements.csv")));

    p.view = View::Scatter;
    assert_eq!(cli::output_path(&p), Some(dir.join("scatter.csv")));

    p.view = View::HistogramAll;
    p.options.export.format = ExportFormat::Tsv;
    assert_eq!(cli::output_path(&p), Some(dir.join("histogram_all.tsv")));

    // an explicit file name is kept whatever the view
    p.out = Some(dir.join("mine.csv").to_string_lossy().into_owned());
    assert_eq!(cli::output_path(&p), Some(dir.join("mine.csv")));

    p.out = None;
    assert_eq!(cli::output_path(&p), None);
}

#[test]
fn default_stem_only_moves_untouched_paths() {
    let mut opts = ExportOptions::default();
    opts.set_default_stem("means");
    assert!(opts.is_default_path());
    assert!(opts.out_path().ends_with("means.csv"));

    opts.set_path("keep/this.csv");
    opts.set_default_stem("scatter");
    assert_eq!(opts.out_path(), PathBuf::from("keep/this.csv"));
}
