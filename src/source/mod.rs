// src/source/mod.rs
//! # Dataset loaders
//!
//! Every way of producing a [`ResultSet`] sits behind [`DataSource`], so the
//! rest of the app never knows whether results came from a validated flat
//! file, a text dump of the ranking report, or an HTTP fetch of either.
//!
//! - [`tabular`]: the trusted path. Header-located columns, strict rows.
//! - [`report`]: best-effort line heuristics over the report's text dump.
//!   Lines that do not fit are skipped and counted, never patched.
//! - [`remote`]: plain HTTP GET, then one of the two parsers above.

use std::path::{Path, PathBuf};

use crate::{
    config::options::SourceKind,
    core::net,
    csv::Delim,
    error::LoadError,
    model::ResultSet,
    progress::Progress,
};

pub mod report;
pub mod remote;
pub mod tabular;

pub use remote::RemoteSource;
pub use report::ReportTextSource;
pub use tabular::CsvFileSource;

pub trait DataSource {
    /// Human-readable origin for status lines and logs.
    fn describe(&self) -> String;

    /// Produce a complete, non-empty result set or fail.
    fn load(&self, progress: Option<&mut dyn Progress>) -> Result<ResultSet, LoadError>;
}

/// Parser picked for a body of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Tabular(Option<Delim>),
    Report,
}

impl Format {
    /// Resolve `Auto` from a file extension, then from the text itself.
    pub fn resolve(kind: SourceKind, ext: Option<&str>, text: &str) -> Format {
        match kind {
            SourceKind::Csv => Format::Tabular(None),
            SourceKind::Report => Format::Report,
            SourceKind::Auto => match ext.map(|e| e.to_ascii_lowercase()).as_deref() {
                Some("csv") => Format::Tabular(Some(Delim::Csv)),
                Some("tsv") => Format::Tabular(Some(Delim::Tsv)),
                Some("txt") => Format::Report,
                _ if looks_tabular(text) => Format::Tabular(None),
                _ => Format::Report,
            },
        }
    }

    pub fn parse(self, text: &str, progress: Option<&mut dyn Progress>) -> Result<ResultSet, LoadError> {
        match self {
            Format::Tabular(delim) => tabular::parse_results(text, delim, progress),
            Format::Report => report::parse_report(text, progress).map(|r| r.results),
        }
    }
}

/// A header line naming the Region and Score columns.
fn looks_tabular(text: &str) -> bool {
    let first = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("").to_ascii_lowercase();
    first.contains("region") && first.contains("score")
}

/// Pick a loader for a path or URL.
pub fn open_source(location: &str, kind: SourceKind) -> Box<dyn DataSource> {
    if net::is_http_url(location) {
        return Box::new(RemoteSource::new(location, kind));
    }
    let path = PathBuf::from(location);
    let format = match kind {
        SourceKind::Report => Format::Report,
        SourceKind::Csv => Format::Tabular(None),
        SourceKind::Auto => match extension(&path).as_deref() {
            Some("txt") => Format::Report,
            _ => Format::Tabular(None),
        },
    };
    match format {
        Format::Report => Box::new(ReportTextSource::new(path)),
        Format::Tabular(_) => Box::new(CsvFileSource::new(path)),
    }
}

pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase())
}

pub(crate) fn read_text(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_auto_by_extension_then_content() {
        assert_eq!(Format::resolve(SourceKind::Auto, Some("TSV"), ""), Format::Tabular(Some(Delim::Tsv)));
        assert_eq!(Format::resolve(SourceKind::Auto, Some("txt"), "Region,Score"), Format::Report);
        assert_eq!(Format::resolve(SourceKind::Auto, None, "\nRegion,Category,Score\n"), Format::Tabular(None));
        assert_eq!(Format::resolve(SourceKind::Auto, Some("pdf"), "11 MJR A B 10"), Format::Report);
        assert_eq!(Format::resolve(SourceKind::Csv, Some("txt"), ""), Format::Tabular(None));
    }

    #[test]
    fn open_source_dispatch() {
        assert!(open_source("http://host/x.csv", SourceKind::Auto).describe().starts_with("http://"));
        assert!(open_source("dump.txt", SourceKind::Auto).describe().contains("report"));
        assert!(open_source("dump.txt", SourceKind::Csv).describe().contains("dump.txt"));
    }
}
