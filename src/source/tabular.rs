// src/source/tabular.rs
//
// Flat-file loader: Region, Category, FirstName, LastName, Score, Comp.
// Columns are found by header name, so order and extra columns don't matter.

use std::path::PathBuf;

use crate::{
    csv::{parse_rows, Delim, Row},
    error::LoadError,
    model::{Category, ClimberRecord, Region, ResultSet},
    progress::Progress,
};

use super::{extension, read_text, DataSource};

/// (canonical name, accepted normalized spellings)
const COLUMNS: [(&str, &[&str]); 6] = [
    ("Region", &["region"]),
    ("Category", &["category", "cat"]),
    ("FirstName", &["firstname", "first"]),
    ("LastName", &["lastname", "last"]),
    ("Score", &["score"]),
    ("Comp", &["comp", "competition", "competitionname"]),
];

const REGION: usize = 0;
const CATEGORY: usize = 1;
const FIRST: usize = 2;
const LAST: usize = 3;
const SCORE: usize = 4;
const COMP: usize = 5;

pub struct CsvFileSource {
    path: PathBuf,
    delim: Option<Delim>,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let delim = match extension(&path).as_deref() {
            Some("tsv") => Some(Delim::Tsv),
            Some("csv") => Some(Delim::Csv),
            _ => None,
        };
        Self { path, delim }
    }
}

impl DataSource for CsvFileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn load(&self, mut progress: Option<&mut dyn Progress>) -> Result<ResultSet, LoadError> {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Reading {}…", self.path.display()));
        }
        let text = read_text(&self.path)?;
        parse_results(&text, self.delim, progress)
    }
}

fn normalize_header(h: &str) -> String {
    h.trim_start_matches('\u{feff}')
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Map each canonical column to its index in the header row.
fn locate_columns(header: &[String]) -> Result<[usize; 6], LoadError> {
    let normalized: Vec<String> = header.iter().map(|h| normalize_header(h)).collect();
    let mut out = [0usize; 6];
    for (slot, (name, spellings)) in COLUMNS.iter().enumerate() {
        out[slot] = normalized
            .iter()
            .position(|h| spellings.iter().any(|s| *s == h.as_str()))
            .ok_or(LoadError::MissingColumn(*name))?;
    }
    Ok(out)
}

fn cell<'a>(row: &'a Row, ix: usize, name: &str) -> Result<&'a str, LoadError> {
    row.cells
        .get(ix)
        .map(|c| c.trim())
        .ok_or_else(|| LoadError::bad_row(row.line, format!("missing {name}")))
}

fn parse_record(row: &Row, cols: &[usize; 6]) -> Result<ClimberRecord, LoadError> {
    let region_txt = cell(row, cols[REGION], "Region")?;
    let region = Region::parse_valid(region_txt)
        .ok_or_else(|| LoadError::bad_row(row.line, format!("invalid region code '{region_txt}'")))?;

    let category: Category = cell(row, cols[CATEGORY], "Category")?
        .parse()
        .map_err(|e: String| LoadError::bad_row(row.line, e))?;

    let score_txt = cell(row, cols[SCORE], "Score")?;
    let score: i32 = score_txt
        .parse()
        .map_err(|_| LoadError::bad_row(row.line, format!("score '{score_txt}' is not an integer")))?;

    Ok(ClimberRecord {
        region,
        category,
        first_name: s!(cell(row, cols[FIRST], "FirstName")?),
        last_name: s!(cell(row, cols[LAST], "LastName")?),
        score,
        competition: s!(cell(row, cols[COMP], "Comp")?),
    })
}

/// Parse a whole file. `delim: None` sniffs it from the header line.
pub fn parse_results(
    text: &str,
    delim: Option<Delim>,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ResultSet, LoadError> {
    let delim = delim.unwrap_or_else(|| Delim::sniff(text));
    let mut rows = parse_rows(text, delim).into_iter();

    let header = rows.next().ok_or(LoadError::Empty)?;
    let cols = locate_columns(&header.cells)?;

    if let Some(p) = progress.as_deref_mut() { p.begin(rows.len()); }

    let records = rows
        .map(|row| parse_record(&row, &cols))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(p) = progress.as_deref_mut() { p.finish(records.len()); }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    logd!("Load: tabular delim={:?} rows={}", delim, records.len());
    Ok(ResultSet::new(records))
}
