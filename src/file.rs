// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::{consts::PLACEMENT_HEADERS, options::ExportOptions},
    csv::to_export_string,
    model::PlacementRow,
    placement::placement_cells,
};

/// Render placement rows as CSV/TSV text per the export options.
pub fn placements_to_string(export: &ExportOptions, rows: &[PlacementRow]) -> String {
    to_export_string(
        &PLACEMENT_HEADERS,
        &placement_cells(rows),
        export.include_headers,
        export.delim(),
    )
}

/// Write the placement table to `export.out_path()`. Returns the path written.
pub fn write_placements(
    export: &ExportOptions,
    rows: &[PlacementRow],
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, placements_to_string(export, rows))?;
    logf!("Export: wrote {} row(s) to {}", rows.len(), path.display());
    Ok(path)
}

/// Write any text (chart dumps from the CLI) next to the usual output.
pub fn write_text(path: &Path, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
