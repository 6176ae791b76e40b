//! Ignore-word list files.
//!
//! One word per line; commas also separate words. Text after `#` is a
//! comment. Words are trimmed and lowercased.

use std::path::Path;

use bpdup_model::IgnoreWordSet;

use crate::error::Result;
use crate::source::io_error;

/// Parses ignore words from list-file text.
#[must_use]
pub fn parse_ignore_words(text: &str) -> IgnoreWordSet {
    text.lines()
        .map(|line| line.split_once('#').map_or(line, |(before, _)| before))
        .flat_map(|line| line.split(','))
        .collect()
}

/// Loads ignore words from a list file.
pub fn load_ignore_words(path: &Path) -> Result<IgnoreWordSet> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    let words = parse_ignore_words(text.trim_start_matches('\u{feff}'));
    tracing::debug!(path = %path.display(), count = words.len(), "loaded ignore words");
    Ok(words)
}
