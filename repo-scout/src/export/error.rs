//! Export error types.

use thiserror::Error;

/// Errors that can occur while exporting records.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create or write an export file.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
