//! Summary statistics of a matching run.

use std::collections::BTreeSet;

use bpdup_model::ConfidenceLevel;
use serde::Serialize;

use crate::engine::MatchOutcome;

/// Counts and averages shown alongside the candidate pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchSummary {
    pub total_records: usize,
    /// Records appearing in at least one candidate pair.
    pub records_with_matches: usize,
    pub total_pairs: usize,
    /// Mean pair score, full precision; 0 when there are no pairs.
    pub average_score: f64,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub skipped_records: usize,
    pub comparisons: u64,
}

impl MatchSummary {
    #[must_use]
    pub fn from_outcome(outcome: &MatchOutcome, total_records: usize) -> Self {
        let mut summary = Self {
            total_records,
            total_pairs: outcome.pairs.len(),
            skipped_records: outcome.skipped.len(),
            comparisons: outcome.comparisons,
            ..Self::default()
        };

        let mut matched = BTreeSet::new();
        let mut total_score = 0.0;
        for pair in &outcome.pairs {
            matched.insert(pair.index_a);
            matched.insert(pair.index_b);
            total_score += pair.score;
            match pair.confidence {
                ConfidenceLevel::High => summary.high += 1,
                ConfidenceLevel::Medium => summary.medium += 1,
                ConfidenceLevel::Low => summary.low += 1,
            }
        }

        summary.records_with_matches = matched.len();
        if !outcome.pairs.is_empty() {
            summary.average_score = total_score / outcome.pairs.len() as f64;
        }
        summary
    }

    /// Number of pairs at `level`.
    #[must_use]
    pub fn count(&self, level: ConfidenceLevel) -> usize {
        match level {
            ConfidenceLevel::High => self.high,
            ConfidenceLevel::Medium => self.medium,
            ConfidenceLevel::Low => self.low,
        }
    }
}
