//! Matching orchestrator.
//!
//! [`MatchEngine`] screens the input, normalizes each record once, drives
//! the pair stream and returns candidate pairs sorted by descending score.

use std::collections::HashSet;
use std::time::Instant;

use bpdup_model::{CandidatePair, MatchConfig, Record};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::control::{CancellationToken, Progress, RunControl};
use crate::error::{MatchError, Result};
use crate::pairs::{generate_pairs_stream, normalize_records};

/// Why a record was left out of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    MissingIdentifier,
    DuplicateIdentifier,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingIdentifier => write!(f, "missing BP number"),
            Self::DuplicateIdentifier => write!(f, "duplicate BP number"),
        }
    }
}

/// A record excluded from comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position in the input sequence.
    pub index: usize,
    pub bp_number: String,
    pub reason: SkipReason,
}

/// Result of a completed run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOutcome {
    /// Candidate pairs, highest score first; ties keep enumeration order.
    pub pairs: Vec<CandidatePair>,
    pub skipped: Vec<SkippedRecord>,
    /// Records that took part in the comparison.
    pub records_compared: usize,
    /// Pair comparisons performed.
    pub comparisons: u64,
}

/// Runs duplicate detection over a record set.
///
/// Holds a validated configuration, so a constructed engine never fails
/// on configuration.
pub struct MatchEngine {
    config: MatchConfig,
    cancel: Option<CancellationToken>,
    progress: Option<Box<crate::control::ProgressFn>>,
}

impl MatchEngine {
    /// Creates an engine after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Config`] when the configuration is invalid.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cancel: None,
            progress: None,
        })
    }

    /// Checks `token` before every batch of comparisons.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Calls `progress` after every batch of comparisons.
    #[must_use]
    pub fn with_progress<F>(mut self, progress: F) -> Self
    where
        F: Fn(Progress) + Send + Sync + 'static,
    {
        self.progress = Some(Box::new(progress));
        self
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Compares every pair of usable records.
    ///
    /// Records without an identifier, and records repeating an identifier
    /// already seen, are reported in [`MatchOutcome::skipped`] and not
    /// compared.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::Cancelled`] when the cancellation token is set
    /// before the last batch completes, or [`MatchError::Config`] when the
    /// configuration is invalid.
    pub fn run(&self, records: &[Record]) -> Result<MatchOutcome> {
        let span = info_span!(
            "match_run",
            record_count = records.len(),
            minimum_score = self.config.minimum_score
        );
        let _guard = span.enter();
        let start = Instant::now();

        let (accepted, skipped) = screen_records(records);
        if !skipped.is_empty() {
            warn!(skipped = skipped.len(), "records excluded from matching");
        }

        let entries = normalize_records(accepted, &self.config);
        debug!(
            records_compared = entries.len(),
            ignore_words = self.config.ignore_words.len(),
            "names normalized"
        );

        let control = RunControl {
            cancel: self.cancel.as_ref(),
            progress: self.progress.as_deref(),
        };
        let mut stream = generate_pairs_stream(&entries, &self.config, control)?;
        let mut pairs: Vec<CandidatePair> = stream.by_ref().collect();

        if stream.is_cancelled() {
            let pairs_emitted = stream.emitted();
            warn!(pairs_emitted, "matching run cancelled");
            return Err(MatchError::Cancelled { pairs_emitted });
        }

        // Stable sort keeps (i, j) order among equal scores.
        pairs.sort_by(|a, b| b.score.total_cmp(&a.score));

        let comparisons = stream.comparisons();
        info!(
            records_compared = entries.len(),
            comparisons,
            pair_count = pairs.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "matching run complete"
        );

        Ok(MatchOutcome {
            pairs,
            skipped,
            records_compared: entries.len(),
            comparisons,
        })
    }
}

/// Validates `config` and runs the engine once over `records`.
///
/// # Errors
///
/// Returns [`MatchError::Config`] when the configuration is invalid.
pub fn run(records: &[Record], config: &MatchConfig) -> Result<MatchOutcome> {
    MatchEngine::new(config.clone())?.run(records)
}

fn screen_records(records: &[Record]) -> (Vec<(usize, &Record)>, Vec<SkippedRecord>) {
    let mut seen: HashSet<&str> = HashSet::with_capacity(records.len());
    let mut accepted = Vec::with_capacity(records.len());
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let reason = if !record.has_identifier() {
            Some(SkipReason::MissingIdentifier)
        } else if !seen.insert(record.bp_number.trim()) {
            Some(SkipReason::DuplicateIdentifier)
        } else {
            None
        };

        match reason {
            Some(reason) => {
                debug!(index, bp_number = %record.bp_number, %reason, "record skipped");
                skipped.push(SkippedRecord {
                    index,
                    bp_number: record.bp_number.clone(),
                    reason,
                });
            }
            None => accepted.push((index, record)),
        }
    }

    (accepted, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screening_skips_blank_and_repeated_ids() {
        let records = vec![
            Record::new("BP001", "Acme", ""),
            Record::new("  ", "Acme", ""),
            Record::new("BP001", "Acme", ""),
            Record::new("BP002", "Acme", ""),
        ];
        let (accepted, skipped) = screen_records(&records);
        let accepted: Vec<usize> = accepted.iter().map(|(i, _)| *i).collect();
        assert_eq!(accepted, vec![0, 3]);
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].reason, SkipReason::MissingIdentifier);
        assert_eq!(skipped[1].reason, SkipReason::DuplicateIdentifier);
        assert_eq!(skipped[1].index, 2);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = MatchConfig {
            minimum_score: 101.0,
            ..MatchConfig::default()
        };
        assert!(matches!(
            MatchEngine::new(config),
            Err(MatchError::Config(_))
        ));
    }

    #[test]
    fn pairs_are_sorted_by_score() {
        let records = vec![
            Record::new("BP001", "acme trading", ""),
            Record::new("BP002", "acme trade", ""),
            Record::new("BP003", "acme trading", ""),
        ];
        let outcome = run(&records, &MatchConfig::default()).unwrap();
        assert_eq!(outcome.pairs[0].score, 100.0);
        assert_eq!((outcome.pairs[0].index_a, outcome.pairs[0].index_b), (0, 2));
        assert!(
            outcome
                .pairs
                .windows(2)
                .all(|w| w[0].score >= w[1].score)
        );
        assert_eq!(outcome.comparisons, 3);
    }
}
