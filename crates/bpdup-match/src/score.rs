//! Similarity metrics on normalized names.
//!
//! Three metrics are combined into a single score in `0..=100`:
//! token sort ratio (40%), token set ratio (40%) and simple ratio (20%).
//! All of them are built on character-level Levenshtein distance.

use std::collections::BTreeSet;

use serde::Serialize;

/// Weight of the token sort ratio, in percent.
pub const TOKEN_SORT_WEIGHT: f64 = 40.0;
/// Weight of the token set ratio, in percent.
pub const TOKEN_SET_WEIGHT: f64 = 40.0;
/// Weight of the simple ratio, in percent.
pub const SIMPLE_WEIGHT: f64 = 20.0;

/// The three sub-metrics and the combined score for one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub token_sort: f64,
    pub token_set: f64,
    pub simple: f64,
    /// Weighted combination, full precision.
    pub combined: f64,
}

impl ScoreBreakdown {
    /// Human-readable explanation of the score.
    pub fn explain(&self) -> String {
        format!(
            "token sort: {:.2}; token set: {:.2}; simple: {:.2}; combined: {:.2}",
            self.token_sort, self.token_set, self.simple, self.combined
        )
    }
}

/// Character-level edit distance (insertions, deletions, substitutions).
///
/// Uses two rows of the dynamic-programming table, sized by the shorter input.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr = vec![0usize; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, short_char) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(long_char != short_char);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            curr[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Edit-distance similarity: `100 * (1 - distance / max_len)`.
///
/// Two empty strings are identical (100).
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }
    let distance = levenshtein(a, b);
    (max_len - distance) as f64 * 100.0 / max_len as f64
}

/// Ratio of the two strings after sorting each one's tokens alphabetically.
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Ratio after splitting shared tokens from the tokens unique to each side.
///
/// Compares the sorted intersection against each side's intersection plus
/// its own remainder, and the two extended strings against each other, then
/// keeps the best. A name whose tokens are a subset of the other's scores 100.
#[must_use]
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    match (tokens_a.is_empty(), tokens_b.is_empty()) {
        (true, true) => return 100.0,
        (true, false) | (false, true) => return 0.0,
        (false, false) => {}
    }

    let shared: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let shared_str = shared.join(" ");
    let extended_a = join_nonempty(&shared_str, &only_a.join(" "));
    let extended_b = join_nonempty(&shared_str, &only_b.join(" "));

    ratio(&shared_str, &extended_a)
        .max(ratio(&shared_str, &extended_b))
        .max(ratio(&extended_a, &extended_b))
}

/// Computes all three metrics and their weighted combination.
#[must_use]
pub fn score_breakdown(a: &str, b: &str) -> ScoreBreakdown {
    let token_sort = token_sort_ratio(a, b);
    let token_set = token_set_ratio(a, b);
    let simple = ratio(a, b);
    let combined = ((TOKEN_SORT_WEIGHT * token_sort
        + TOKEN_SET_WEIGHT * token_set
        + SIMPLE_WEIGHT * simple)
        / 100.0)
        .clamp(0.0, 100.0);

    ScoreBreakdown {
        token_sort,
        token_set,
        simple,
        combined,
    }
}

/// Combined similarity of two normalized names, in `0..=100`.
#[must_use]
pub fn score(a: &str, b: &str) -> f64 {
    score_breakdown(a, b).combined
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (false, true) => head.to_string(),
        (false, false) => format!("{head} {tail}"),
    }
}
