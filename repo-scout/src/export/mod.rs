//! Filtering and CSV export of listing results.

mod error;
mod table;

pub use error::ExportError;
pub use table::RecordTable;

use crate::record::RepositoryRecord;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Keeps records with at least `min_stars` stars, preserving order.
pub fn filter_min_stars(records: Vec<RepositoryRecord>, min_stars: u64) -> Vec<RepositoryRecord> {
    records
        .into_iter()
        .filter(|record| record.stars >= min_stars)
        .collect()
}

/// Name of the CSV file exported for `input`.
///
/// Characters other than ASCII letters, digits, `-`, `_` and `.` are replaced
/// with `_` so the name stays inside the export directory.
pub fn export_file_name(input: &str) -> String {
    let safe: String = input
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}_repositories.csv")
}

/// Writes `table` as CSV with a header row.
///
/// # Errors
///
/// Returns [`ExportError::Csv`] if writing fails.
pub fn export_csv<W: Write>(writer: W, table: &RecordTable) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(table.columns())?;
    for row in table.rows() {
        csv.write_record(row)?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Exports `table` to `dir/<input>_repositories.csv`, creating `dir` if needed.
///
/// # Errors
///
/// Returns [`ExportError`] if the directory or file cannot be written.
pub fn export_to_dir(dir: &Path, input: &str, table: &RecordTable) -> Result<PathBuf, ExportError> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::IoError {
        path: dir.display().to_string(),
        source: e,
    })?;

    let path = dir.join(export_file_name(input));
    let file = std::fs::File::create(&path).map_err(|e| ExportError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    export_csv(file, table)?;
    info!(path = %path.display(), rows = table.len(), "Exported CSV");
    Ok(path)
}
