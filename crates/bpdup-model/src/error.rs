use thiserror::Error;

/// Invalid matching configuration. Raised before any comparison starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("minimum score must be between 0 and 100, got {value}")]
    MinimumScoreOutOfRange { value: f64 },
    #[error("max_name_chars must be at least 1")]
    MaxNameCharsZero,
    #[error("chunk_rows must be at least 1")]
    ChunkRowsZero,
    #[error("top_n must be at least 1")]
    TopNZero,
}

pub type Result<T> = std::result::Result<T, ConfigError>;
