//! Data model for the Business Partner duplicate checker.
//!
//! Holds the records handed to the matching engine, the configuration of a
//! run and the candidate pairs it produces. No algorithms live here.

pub mod config;
pub mod error;
pub mod pair;
pub mod record;

pub use config::{
    DEFAULT_CHUNK_ROWS, DEFAULT_IGNORE_WORDS, DEFAULT_MAX_NAME_CHARS, DEFAULT_MINIMUM_SCORE,
    EmptyNamePolicy, IgnoreWordSet, MatchConfig,
};
pub use error::{ConfigError, Result};
pub use pair::{CandidatePair, ConfidenceLevel, format_score};
pub use record::Record;
