//! Matching configuration.
//!
//! A [`MatchConfig`] is an immutable value handed to the engine for one run.
//! It is never shared as mutable state, so parallel scoring only ever reads it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default minimum combined score for a pair to be reported.
pub const DEFAULT_MINIMUM_SCORE: f64 = 50.0;

/// Default upper bound on the length of a normalized name, in characters.
pub const DEFAULT_MAX_NAME_CHARS: usize = 256;

/// Default number of outer-loop rows evaluated per batch.
pub const DEFAULT_CHUNK_ROWS: usize = 64;

/// Honorifics and legal-form words that carry no identity information.
pub const DEFAULT_IGNORE_WORDS: &[&str] = &[
    "mrs",
    "ms",
    "mr",
    "dr",
    "prof",
    "company",
    "co",
    "ltd",
    "llc",
    "inc",
    "corp",
    "corporation",
    "limited",
    "plc",
    "gmbh",
    "ag",
    "sa",
    "srl",
    "the",
    "and",
];

/// Case-insensitive set of whole tokens removed during normalization.
///
/// Entries are stored trimmed and lowercased; blank entries are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct IgnoreWordSet {
    words: BTreeSet<String>,
}

impl IgnoreWordSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in list of honorifics and legal forms.
    #[must_use]
    pub fn defaults() -> Self {
        DEFAULT_IGNORE_WORDS.iter().collect()
    }

    /// Adds a word. Returns false when the word was blank or already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word)
    }

    /// Whole-token, case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        if token.chars().any(char::is_uppercase) {
            self.words.contains(&token.to_lowercase())
        } else {
            self.words.contains(token)
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<S: AsRef<str>> Extend<S> for IgnoreWordSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl From<Vec<String>> for IgnoreWordSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<IgnoreWordSet> for Vec<String> {
    fn from(set: IgnoreWordSet) -> Self {
        set.words.into_iter().collect()
    }
}

/// How to treat a pair whose two normalized names are both empty.
///
/// Blank names (or names made only of ignore words) are literally identical,
/// but rarely mean the two partners are the same business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyNamePolicy {
    /// Never report a pair of two empty names.
    #[default]
    Exclude,
    /// Score two empty names as identical (100).
    Compare,
}

impl std::fmt::Display for EmptyNamePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exclude => write!(f, "exclude"),
            Self::Compare => write!(f, "compare"),
        }
    }
}

/// Configuration for one matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Tokens dropped from names before comparison.
    pub ignore_words: IgnoreWordSet,
    /// Pairs scoring below this value (0..=100) are not reported.
    pub minimum_score: f64,
    /// Treatment of pairs where both normalized names are empty.
    pub empty_names: EmptyNamePolicy,
    /// Normalized names longer than this are cut back to whole tokens.
    pub max_name_chars: usize,
    /// Outer-loop rows per batch; cancellation is checked between batches.
    pub chunk_rows: usize,
    /// Evaluate the rows of a batch on the rayon thread pool.
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ignore_words: IgnoreWordSet::new(),
            minimum_score: DEFAULT_MINIMUM_SCORE,
            empty_names: EmptyNamePolicy::default(),
            max_name_chars: DEFAULT_MAX_NAME_CHARS,
            chunk_rows: DEFAULT_CHUNK_ROWS,
            parallel: true,
        }
    }
}

impl MatchConfig {
    /// Creates a configuration with the given threshold and defaults elsewhere.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MinimumScoreOutOfRange`] when the threshold is
    /// NaN or outside `0..=100`.
    pub fn new(minimum_score: f64) -> Result<Self> {
        let config = Self {
            minimum_score,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_ignore_words(mut self, ignore_words: IgnoreWordSet) -> Self {
        self.ignore_words = ignore_words;
        self
    }

    #[must_use]
    pub fn with_default_ignore_words(self) -> Self {
        self.with_ignore_words(IgnoreWordSet::defaults())
    }

    #[must_use]
    pub fn with_empty_names(mut self, policy: EmptyNamePolicy) -> Self {
        self.empty_names = policy;
        self
    }

    #[must_use]
    pub fn with_max_name_chars(mut self, max_name_chars: usize) -> Self {
        self.max_name_chars = max_name_chars;
        self
    }

    #[must_use]
    pub fn with_chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = chunk_rows;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks every field invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.minimum_score) {
            return Err(ConfigError::MinimumScoreOutOfRange {
                value: self.minimum_score,
            });
        }
        if self.max_name_chars == 0 {
            return Err(ConfigError::MaxNameCharsZero);
        }
        if self.chunk_rows == 0 {
            return Err(ConfigError::ChunkRowsZero);
        }
        Ok(())
    }
}
