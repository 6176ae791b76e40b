//! Business Partner table loading.
//!
//! The table needs a header row naming `BP_Number`, `Name1` and `Name2`
//! (any case, any order, extra columns ignored). Rows the engine must not
//! see, those without a BP number or repeating one, are returned as
//! [`RejectedRow`]s next to the usable records.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use bpdup_model::Record;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

use crate::error::{IngestError, Result};
use crate::source::{MAX_INPUT_FILE_SIZE, check_file_size, open_input, validate_encoding};

/// Required column names, in canonical spelling.
pub const REQUIRED_COLUMNS: [&str; 3] = ["BP_Number", "Name1", "Name2"];

/// Why an input row was not turned into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    MissingIdentifier,
    /// The BP number already appeared on `first_line`.
    DuplicateIdentifier { first_line: u64 },
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIdentifier => write!(f, "missing BP number"),
            Self::DuplicateIdentifier { first_line } => {
                write!(f, "duplicate BP number (first seen on line {first_line})")
            }
        }
    }
}

/// An input row left out of the record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// 1-based line number in the input.
    pub line: u64,
    pub bp_number: Option<String>,
    pub reason: RejectReason,
}

/// Records ready for matching plus the rows that were rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedRecords {
    pub records: Vec<Record>,
    pub rejected: Vec<RejectedRow>,
}

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    bp_number: usize,
    name1: usize,
    name2: usize,
}

impl ColumnIndex {
    fn detect(headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let find = |wanted: &str| names.iter().position(|name| name == &wanted.to_lowercase());

        let positions: Vec<Option<usize>> = REQUIRED_COLUMNS.iter().map(|c| find(c)).collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .zip(&positions)
            .filter(|(_, position)| position.is_none())
            .map(|(column, _)| (*column).to_string())
            .collect();

        match positions[..] {
            [Some(bp_number), Some(name1), Some(name2)] => Ok(Self {
                bp_number,
                name1,
                name2,
            }),
            _ => Err(IngestError::MissingColumns { columns: missing }),
        }
    }
}

/// Loads a Business Partner table from a CSV file.
pub fn read_records_csv(path: &Path) -> Result<LoadedRecords> {
    check_file_size(path, MAX_INPUT_FILE_SIZE)?;
    validate_encoding(path)?;
    let file = open_input(path)?;
    let loaded = read_records_from_reader(file)?;
    tracing::info!(
        path = %path.display(),
        records = loaded.records.len(),
        rejected = loaded.rejected.len(),
        "loaded business partner table"
    );
    Ok(loaded)
}

/// Loads a Business Partner table from any CSV source.
pub fn read_records_from_reader<R: Read>(reader: R) -> Result<LoadedRecords> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim_matches('\u{feff}').trim().is_empty()) {
        return Err(IngestError::EmptyInput);
    }
    let columns = ColumnIndex::detect(&headers)?;

    let mut loaded = LoadedRecords::default();
    let mut first_seen: HashMap<String, u64> = HashMap::new();

    for row in reader.records() {
        let row = row?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        let line = row.position().map_or(0, csv::Position::line);
        let cell = |index: usize| row.get(index).unwrap_or_default().to_string();
        let bp_number = cell(columns.bp_number);

        if bp_number.is_empty() {
            tracing::debug!(line, "row rejected: missing BP number");
            loaded.rejected.push(RejectedRow {
                line,
                bp_number: None,
                reason: RejectReason::MissingIdentifier,
            });
            continue;
        }
        if let Some(&first_line) = first_seen.get(&bp_number) {
            tracing::debug!(
                line,
                first_line,
                bp_number = %bp_number,
                "row rejected: duplicate BP number"
            );
            loaded.rejected.push(RejectedRow {
                line,
                bp_number: Some(bp_number),
                reason: RejectReason::DuplicateIdentifier { first_line },
            });
            continue;
        }

        first_seen.insert(bp_number.clone(), line);
        loaded.records.push(Record {
            bp_number,
            name1: cell(columns.name1),
            name2: cell(columns.name2),
        });
    }

    if !loaded.rejected.is_empty() {
        tracing::warn!(rejected = loaded.rejected.len(), "input rows rejected");
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(text: &str) -> Result<LoadedRecords> {
        read_records_from_reader(text.as_bytes())
    }

    #[test]
    fn headers_are_case_insensitive_and_reorderable() {
        let loaded = load("name2, NAME1 ,Extra,bp_number\nDivision,XYZ Corp.,x,BP006\n").unwrap();
        assert_eq!(
            loaded.records,
            vec![Record::new("BP006", "XYZ Corp.", "Division")]
        );
    }

    #[test]
    fn reports_every_missing_column() {
        let err = load("BP_Number,Name\nBP001,Acme\n").unwrap_err();
        match err {
            IngestError::MissingColumns { columns } => {
                assert_eq!(columns, vec!["Name1", "Name2"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn short_rows_have_empty_names() {
        let loaded = load("BP_Number,Name1,Name2\nBP001,Acme\n").unwrap();
        assert_eq!(loaded.records, vec![Record::new("BP001", "Acme", "")]);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(load(""), Err(IngestError::EmptyInput)));
    }

    #[test]
    fn byte_order_mark_is_stripped() {
        let loaded = load("\u{feff}BP_Number,Name1,Name2\nBP001,Acme,\n").unwrap();
        assert_eq!(loaded.records.len(), 1);
    }
}
