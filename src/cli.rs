// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    charts,
    config::{
        consts::DEFAULT_FILE,
        options::{AppOptions, ExportFormat, SourceKind},
    },
    csv::to_export_string,
    file,
    filter::{parse_categories, parse_regions},
    model::{Category, Region, ResultSet},
    placement::compute_placements,
    progress::{Progress, StderrProgress},
    store::ResultStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Placements,
    Scatter,
    Means,
    Histogram,
    HistogramAll,
}

impl View {
    fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "placements" | "place" => Some(View::Placements),
            "scatter" => Some(View::Scatter),
            "means" | "avg" | "average" => Some(View::Means),
            "histogram" | "hist" => Some(View::Histogram),
            "histogram-all" | "hist-all" => Some(View::HistogramAll),
            _ => None,
        }
    }

    /// Default output file name for this view.
    pub fn file_stem(self) -> &'static str {
        match self {
            View::Placements => DEFAULT_FILE,
            View::Scatter => "scatter",
            View::Means => "means",
            View::Histogram => "histogram",
            View::HistogramAll => "histogram_all",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Params {
    pub options: AppOptions,
    pub view: View,
    pub out: Option<String>,
    pub verbose: bool,
    pub list_categories: bool,
    pub list_regions: bool,
    pub help: bool,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_args(env::args().skip(1))?;

    if params.help {
        eprintln!(include_str!("cli_help.txt"));
        return Ok(());
    }
    if params.list_categories {
        for c in Category::ALL {
            println!("{},{}", c.tag(), c.label());
        }
        return Ok(());
    }
    if params.list_regions {
        for r in Region::ALL {
            println!("{}", r);
        }
        return Ok(());
    }

    let src = &params.options.source;
    logf!("CLI: view={:?} source={}", params.view, src.location);

    let mut sink = StderrProgress;
    let progress: Option<&mut dyn Progress> = if params.verbose {
        Some(&mut sink as &mut dyn Progress)
    } else {
        None
    };
    let store = ResultStore::open_location(&src.location, src.kind, progress)?;

    let results = store.snapshot();
    let text = render(&params, &results);

    match output_path(&params) {
        None => print!("{text}"),
        Some(path) => {
            file::write_text(&path, &text)?;
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Where `-o` sends the output; a bare directory gets a file named after the view.
pub fn output_path(params: &Params) -> Option<PathBuf> {
    let out = params.out.as_deref()?;
    let mut export = params.options.export.clone();
    export.set_default_stem(params.view.file_stem());
    export.set_path(out);
    Some(export.out_path())
}

/// Render the chosen view as CSV/TSV text.
pub fn render(params: &Params, results: &ResultSet) -> String {
    let q = &params.options.query;
    let export = &params.options.export;
    let cats = &q.categories;

    let (headers, rows): (&[&str], Vec<Vec<String>>) = match params.view {
        View::Placements => {
            let rows = compute_placements(results, q.score, &q.regions, cats);
            return file::placements_to_string(export, &rows);
        }
        View::Scatter => (
            &["Region", "Score", "Category"][..],
            charts::scatter(results, cats, q.score)
                .rows
                .iter()
                .map(|p| vec![p.region.to_string(), p.score.to_string(), s!(p.category.tag())])
                .collect(),
        ),
        View::Means => (
            &["Region", "Category", "Average Score", "Climbers"][..],
            charts::bucket_means(results, cats, q.score)
                .rows
                .iter()
                .map(|m| vec![
                    m.region.to_string(),
                    s!(m.category.tag()),
                    format!("{:.1}", m.mean),
                    m.count.to_string(),
                ])
                .collect(),
        ),
        View::Histogram => (
            &["Category", "From", "To", "Count"][..],
            charts::histogram_by_category(results, cats, q.score)
                .rows
                .iter()
                .map(|b| vec![
                    b.category.map(|c| s!(c.tag())).unwrap_or_default(),
                    b.start.to_string(),
                    b.end.to_string(),
                    b.count.to_string(),
                ])
                .collect(),
        ),
        View::HistogramAll => (
            &["From", "To", "Count"][..],
            charts::histogram_overall(results, q.score)
                .rows
                .iter()
                .map(|b| vec![b.start.to_string(), b.end.to_string(), b.count.to_string()])
                .collect(),
        ),
    };

    to_export_string(headers, &rows, export.include_headers, export.delim())
}

pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--data" => params.options.source.location = args.next().ok_or("Missing value for --data")?,
            "--source" => {
                let v = args.next().ok_or("Missing value for --source")?;
                params.options.source.kind =
                    SourceKind::parse(&v).ok_or_else(|| format!("Unknown source kind: {}", v))?;
            }
            "--score" => {
                params.options.query.score = args.next().ok_or("Missing value for --score")?.trim().parse()?;
            }
            "--cat" | "--categories" => {
                let v = args.next().ok_or("Missing value for --cat")?;
                params.options.query.categories = parse_categories(&v);
            }
            "--regions" => {
                let v = args.next().ok_or("Missing value for --regions")?;
                params.options.query.regions = parse_regions(&v)?;
            }
            "--view" => {
                let v = args.next().ok_or("Missing value for --view")?;
                params.view = View::parse(&v).ok_or_else(|| format!("Unknown view: {}", v))?;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.options.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.options.export.include_headers = true,
            "--no-headers" => params.options.export.include_headers = false,
            "-o" | "--out" => params.out = Some(args.next().ok_or("Missing output path")?),
            "--list-categories" => params.list_categories = true,
            "--list-regions" => params.list_regions = true,
            "-v" | "--verbose" => params.verbose = true,
            "-h" | "--help" => params.help = true,
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}
