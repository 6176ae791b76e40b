//! Input boundary for the duplicate checker.
//!
//! Loads the Business Partner table from CSV, rejecting rows the matching
//! engine must not see, and reads ignore-word list files.

pub mod error;
pub mod example;
pub mod ignore_words;
pub mod records;
pub mod source;

pub use error::{IngestError, Result};
pub use example::{EXAMPLE_ROWS, example_records, write_example_input};
pub use ignore_words::{load_ignore_words, parse_ignore_words};
pub use records::{
    LoadedRecords, REQUIRED_COLUMNS, RejectReason, RejectedRow, read_records_csv,
    read_records_from_reader,
};
pub use source::{MAX_INPUT_FILE_SIZE, check_file_size, validate_encoding};
