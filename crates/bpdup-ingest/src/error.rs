//! Error types for Business Partner data ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading input files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File starts with a byte-order mark of an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}, save the file as UTF-8")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Errors ===
    /// Input has no header row.
    #[error("input is empty")]
    EmptyInput,

    /// Header row lacks required columns.
    #[error("missing required columns: {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Malformed CSV content.
    #[error("malformed CSV{}: {source}", line_suffix(.line))]
    Csv {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// Failed to write a generated file.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        Self::Csv {
            line: err.position().map(csv::Position::line),
            source: err,
        }
    }
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|line| format!(" at line {line}"))
        .unwrap_or_default()
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/partners.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/partners.csv");

        let err = IngestError::MissingColumns {
            columns: vec!["BP_Number".to_string(), "Name2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns: BP_Number, Name2"
        );
    }
}
