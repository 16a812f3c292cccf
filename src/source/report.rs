// src/source/report.rs
//
// Best-effort reader for the text dump of the regional ranking report
// (e.g. `pdftotext -layout`). One result per line:
//
//   [anything…] <region> <category> <first> <last…> <score> [competition…]
//
// Known limitations, left as-is on purpose:
// - a first name with a space is split, the second word lands in the last name
// - a last name containing a number token ends the name early
// - results wrapped onto two lines are skipped
// Lines that don't fit are counted in `ReportParse::skipped`.

use std::path::PathBuf;

use crate::{
    error::LoadError,
    model::{Category, ClimberRecord, Region, ResultSet},
    progress::Progress,
};

use super::{read_text, DataSource};

pub struct ReportTextSource {
    path: PathBuf,
}

impl ReportTextSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for ReportTextSource {
    fn describe(&self) -> String {
        format!("report text {}", self.path.display())
    }

    fn load(&self, mut progress: Option<&mut dyn Progress>) -> Result<ResultSet, LoadError> {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Reading report dump {}…", self.path.display()));
        }
        let text = read_text(&self.path)?;
        parse_report(&text, progress).map(|r| r.results)
    }
}

#[derive(Debug)]
pub struct ReportParse {
    pub results: ResultSet,
    /// Non-blank lines that did not look like a result.
    pub skipped: usize,
}

/// Index of the first `<region> <category>` token pair.
fn anchor(tokens: &[&str]) -> Option<usize> {
    tokens.windows(2).position(|w| {
        Region::parse_valid(w[0]).is_some() && w[1].parse::<Category>().is_ok()
    })
}

pub fn parse_line(line: &str) -> Option<ClimberRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let start = anchor(&tokens)?;
    let rest = &tokens[start..];

    // region, category, first, at least one last-name token, then score
    let score_ix = (4..rest.len()).find(|&i| rest[i].parse::<i32>().is_ok())?;

    Some(ClimberRecord {
        region: Region::parse_valid(rest[0])?,
        category: rest[1].parse().ok()?,
        first_name: s!(rest[2]),
        last_name: rest[3..score_ix].join(" "),
        score: rest[score_ix].parse().ok()?,
        competition: rest[score_ix + 1..].join(" "),
    })
}

pub fn parse_report(text: &str, mut progress: Option<&mut dyn Progress>) -> Result<ReportParse, LoadError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if let Some(p) = progress.as_deref_mut() { p.begin(lines.len()); }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for line in lines {
        match parse_line(line) {
            Some(r) => records.push(r),
            None => skipped += 1,
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        if skipped > 0 {
            p.log(&format!("Skipped {skipped} line(s) that did not look like results"));
        }
        p.finish(records.len());
    }
    logd!("Load: report records={} skipped={}", records.len(), skipped);

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(ReportParse { results: ResultSet::new(records), skipped })
}
