//! Output boundary for the duplicate checker.
//!
//! Maps candidate pairs back to their records and writes them as CSV
//! (flat or ranked per record), a summary sheet, or JSON. Scores are
//! rounded to two decimals in CSV output only.

pub mod csv_export;
pub mod error;
pub mod export;
pub mod json;

pub use csv_export::{
    PAIR_HEADERS, RANKED_HEADERS, write_pairs_csv, write_ranked_csv, write_summary_csv,
};
pub use error::{ReportError, Result};
pub use export::{ExportFormat, Report, export_summary_to_path, export_to_path, write_report};
pub use json::{JsonReport, PairEntry, write_json};
