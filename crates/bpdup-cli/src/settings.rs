//! Settings file for the `bpdup` command.
//!
//! A TOML file with any subset of the fields of [`Settings`]; missing fields
//! take their defaults and unknown fields are rejected. The tool only reads
//! settings, it never writes the file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use bpdup_model::{
    ConfigError, DEFAULT_MAX_NAME_CHARS, DEFAULT_MINIMUM_SCORE, EmptyNamePolicy, IgnoreWordSet,
    MatchConfig,
};
use serde::{Deserialize, Serialize};

/// Default number of ranked partners per record.
pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Pairs scoring below this value (0-100) are not reported.
    pub minimum_score: f64,
    /// Partners listed per record in the ranked export.
    pub top_n: usize,
    /// Start from the built-in honorific and legal-form list.
    pub use_default_ignore_words: bool,
    /// Additional ignore words.
    pub ignore_words: Vec<String>,
    /// Treatment of two names that are both empty after normalization.
    pub empty_names: EmptyNamePolicy,
    /// Upper bound on a normalized name, in characters.
    pub max_name_chars: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minimum_score: DEFAULT_MINIMUM_SCORE,
            top_n: DEFAULT_TOP_N,
            use_default_ignore_words: true,
            ignore_words: Vec::new(),
            empty_names: EmptyNamePolicy::default(),
            max_name_chars: DEFAULT_MAX_NAME_CHARS,
        }
    }
}

impl Settings {
    /// Ignore words in effect: the built-in list (if enabled) plus the extra words.
    #[must_use]
    pub fn ignore_word_set(&self) -> IgnoreWordSet {
        let mut words = if self.use_default_ignore_words {
            IgnoreWordSet::defaults()
        } else {
            IgnoreWordSet::new()
        };
        words.extend(&self.ignore_words);
        words
    }

    /// Builds the engine configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn to_match_config(&self) -> std::result::Result<MatchConfig, ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::TopNZero);
        }
        let config = MatchConfig::new(self.minimum_score)?
            .with_ignore_words(self.ignore_word_set())
            .with_empty_names(self.empty_names)
            .with_max_name_chars(self.max_name_chars);
        config.validate()?;
        Ok(config)
    }

    /// Renders the settings as TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize settings")
    }
}

/// Reads settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read settings {}", path.display()))?;
    let settings: Settings = toml::from_str(&content)
        .with_context(|| format!("parse settings {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded settings");
    Ok(settings)
}
