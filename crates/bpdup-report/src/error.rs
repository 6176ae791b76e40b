//! Error types for report export.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A pair refers to a record index outside the record slice.
    #[error("candidate pair refers to unknown record index {index}")]
    UnknownRecord { index: usize },
}

pub type Result<T> = std::result::Result<T, ReportError>;
