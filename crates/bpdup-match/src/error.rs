//! Error types for matching runs.

use bpdup_model::ConfigError;
use thiserror::Error;

/// Errors that stop a matching run.
///
/// Configuration errors are raised before any comparison starts, so a run
/// never returns partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("matching run cancelled after {pairs_emitted} candidate pairs")]
    Cancelled { pairs_emitted: usize },
}

pub type Result<T> = std::result::Result<T, MatchError>;
