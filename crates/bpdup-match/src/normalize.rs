//! Name normalization.
//!
//! Turns a raw name into the canonical string every similarity metric works
//! on: lowercase, punctuation replaced by spaces, ignore words removed,
//! single-space separated.

use bpdup_model::{IgnoreWordSet, MatchConfig, Record};

/// Normalizes `raw` without a length bound.
#[must_use]
pub fn normalize(raw: &str, ignore_words: &IgnoreWordSet) -> String {
    normalize_bounded(raw, ignore_words, usize::MAX)
}

/// Normalizes `raw` and keeps at most `max_chars` characters.
///
/// Trailing tokens that do not fit are dropped whole. When the first
/// surviving token alone is longer than the bound it is cut at `max_chars`
/// characters. Applying the function to its own output returns the output
/// unchanged.
#[must_use]
pub fn normalize_bounded(raw: &str, ignore_words: &IgnoreWordSet, max_chars: usize) -> String {
    let folded: String = raw
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut out = String::with_capacity(folded.len().min(max_chars));
    let mut out_chars = 0usize;

    for token in folded
        .split_whitespace()
        .filter(|token| !ignore_words.contains(token))
    {
        let token_chars = token.chars().count();
        if out.is_empty() {
            if token_chars > max_chars {
                let cut: String = token.chars().take(max_chars).collect();
                // A cut prefix can itself be an ignore word.
                if !ignore_words.contains(&cut) {
                    out = cut;
                }
                break;
            }
            out.push_str(token);
            out_chars = token_chars;
        } else {
            if out_chars + 1 + token_chars > max_chars {
                break;
            }
            out.push(' ');
            out.push_str(token);
            out_chars += 1 + token_chars;
        }
    }

    out
}

/// Normalizes the combined name (`name1` then `name2`) of a record.
#[must_use]
pub fn normalize_record(record: &Record, config: &MatchConfig) -> String {
    normalize_bounded(
        &record.combined_name(),
        &config.ignore_words,
        config.max_name_chars,
    )
}
