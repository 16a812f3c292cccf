// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::{
    csv::Delim,
    filter::Selection,
    model::{Category, Region},
};

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub query: QueryOptions,
    pub export: ExportOptions,
}

/* ---------------- Source ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SourceKind {
    /// Decide from extension, then content.
    #[default]
    Auto,
    Csv,
    Report,
}

impl SourceKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Some(SourceKind::Auto),
            "csv" | "tsv" | "table" => Some(SourceKind::Csv),
            "report" | "text" | "txt" => Some(SourceKind::Report),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    /// File path or http:// URL.
    pub location: String,
    pub kind: SourceKind,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { location: s!(DEFAULT_DATA_FILE), kind: SourceKind::Auto }
    }
}

/* ---------------- Query ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Candidate score; `<= 0` means "no comparison".
    pub score: i32,
    pub regions: Selection<Region>,
    pub categories: Selection<Category>,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            score: DEFAULT_SCORE,
            regions: Selection::All,
            categories: Selection::All,
        }
    }
}

/* ---------------- Export ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str { self.delim().ext() }

    pub fn delim(&self) -> Delim {
        match self { ExportFormat::Csv => Delim::Csv, ExportFormat::Tsv => Delim::Tsv }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
    /// Extension typed by the user; None follows the format.
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    /// File name used when only a directory is given.
    default_stem: OsString,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            default_stem: OsString::from(DEFAULT_FILE),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; a user-typed extension wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let mut name = self.out_path.file_stem.clone();
        name.push(".");
        match &self.out_path.ext {
            Some(e) => name.push(e),
            None => name.push(self.format.ext()),
        }
        self.out_path.dir.join(name)
    }

    pub fn current_dir(&self) -> &Path { &self.out_path.dir }

    /// Change the fallback file name. A path still at its default follows.
    pub fn set_default_stem(&mut self, stem: &str) {
        let was_default = self.is_default_path();
        self.default_stem = OsString::from(stem);
        if was_default {
            self.out_path = self.default_out_path();
        }
    }

    fn default_out_path(&self) -> OutputPath {
        OutputPath { file_stem: self.default_stem.clone(), ..OutputPath::default() }
    }

    /// Parse GUI/CLI text into dir + stem (+ extension if typed).
    /// Empty text resets to the default. A trailing separator, or a path
    /// naming an existing directory, keeps the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = self.default_out_path();
            return;
        }

        let p = Path::new(s);
        if looks_like_dir_hint(s) || p.is_dir() {
            self.out_path = OutputPath { dir: p.to_path_buf(), ..self.default_out_path() };
            return;
        }

        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn is_default_path(&self) -> bool {
        self.out_path == self.default_out_path()
    }

    pub fn delim(&self) -> Delim { self.format.delim() }
}

fn looks_like_dir_hint(s: &str) -> bool {
    s.ends_with('/') || s.ends_with('\\')
}
