//! Demonstration input table.

use std::path::Path;

use bpdup_model::Record;

use crate::error::{IngestError, Result};
use crate::records::REQUIRED_COLUMNS;

/// Twenty partners covering the usual duplicate patterns: legal-form
/// variants, honorifics, abbreviations, split names and one partner with
/// no duplicate.
pub const EXAMPLE_ROWS: [(&str, &str, &str); 20] = [
    ("BP001", "ABC Company Ltd.", ""),
    ("BP002", "ABC Company Limited", ""),
    ("BP003", "Mrs. Jane Smith", ""),
    ("BP004", "Jane Smith", ""),
    ("BP005", "XYZ Corporation", "Technology Division"),
    ("BP006", "XYZ Corp.", "Tech Division"),
    ("BP007", "Global Trading Co.", ""),
    ("BP008", "Global Trading Company", "International"),
    ("BP009", "Mr. John Doe", ""),
    ("BP010", "John Doe", "Senior Partner"),
    ("BP011", "Smith & Associates LLC", ""),
    ("BP012", "Smith and Associates", "LLC"),
    ("BP013", "First National Bank", ""),
    ("BP014", "1st National Bank", ""),
    ("BP015", "Acme Industries", ""),
    ("BP016", "ACME INDUSTRIES LTD", ""),
    ("BP017", "Tech Solutions Inc.", ""),
    ("BP018", "Unique Company", "No Matches"),
    ("BP019", "Pacific Trading", "Enterprises"),
    ("BP020", "Pacific Trading Enterprises", ""),
];

/// The demonstration table as records.
#[must_use]
pub fn example_records() -> Vec<Record> {
    EXAMPLE_ROWS
        .iter()
        .map(|(bp_number, name1, name2)| Record::new(*bp_number, *name1, *name2))
        .collect()
}

/// Writes the demonstration table as a CSV file with the required header.
pub fn write_example_input(path: &Path) -> Result<()> {
    let write_error = |source: csv::Error| IngestError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_path(path)
        .map_err(write_error)?;
    writer.write_record(REQUIRED_COLUMNS).map_err(write_error)?;
    for (bp_number, name1, name2) in EXAMPLE_ROWS {
        writer
            .write_record([bp_number, name1, name2])
            .map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|e| write_error(csv::Error::from(e)))?;

    tracing::info!(path = %path.display(), rows = EXAMPLE_ROWS.len(), "wrote example input");
    Ok(())
}
