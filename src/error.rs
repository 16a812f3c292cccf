// src/error.rs
use std::{fmt, io, path::PathBuf};

/// Why a dataset could not be produced. Nothing partial is ever served.
#[derive(Debug)]
pub enum LoadError {
    Io { path: PathBuf, source: io::Error },
    Fetch(String),
    MissingColumn(&'static str),
    /// `line` is 1-based and counts the header line.
    BadRow { line: usize, reason: String },
    Empty,
}

impl LoadError {
    pub fn bad_row(line: usize, reason: impl Into<String>) -> Self {
        LoadError::BadRow { line, reason: reason.into() }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io { path, source } => write!(f, "Cannot read {}: {}", path.display(), source),
            LoadError::Fetch(msg) => write!(f, "Fetch failed: {msg}"),
            LoadError::MissingColumn(name) => write!(f, "Missing column: {name}"),
            LoadError::BadRow { line, reason } => write!(f, "Line {line}: {reason}"),
            LoadError::Empty => f.write_str("Source contains no results"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
