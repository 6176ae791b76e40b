//! Pair generation over a record set.
//!
//! Every unordered pair `(i, j)` with `i < j` is scored once. The work is
//! split into batches of `chunk_rows` outer rows; a [`PairStream`] evaluates
//! one batch at a time, so memory stays proportional to the matches of a
//! single batch rather than to the full comparison set.

use std::ops::Range;

use bpdup_model::{CandidatePair, EmptyNamePolicy, MatchConfig, Record};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::classify::classify;
use crate::control::{Progress, RunControl};
use crate::error::Result;
use crate::normalize::normalize_record;
use crate::score::score;

/// A record together with its normalized combined name.
#[derive(Debug, Clone)]
pub struct NormalizedRecord<'a> {
    /// Position of the record in the caller's input sequence.
    pub index: usize,
    pub record: &'a Record,
    pub name: String,
}

/// Normalizes each record once, keeping its input position.
#[must_use]
pub fn normalize_records<'a, I>(records: I, config: &MatchConfig) -> Vec<NormalizedRecord<'a>>
where
    I: IntoIterator<Item = (usize, &'a Record)>,
{
    records
        .into_iter()
        .map(|(index, record)| NormalizedRecord {
            index,
            record,
            name: normalize_record(record, config),
        })
        .collect()
}

/// Lazy, finite sequence of candidate pairs in `(i, j)` enumeration order.
///
/// Not restartable: once exhausted or cancelled it yields nothing more.
pub struct PairStream<'a> {
    entries: &'a [NormalizedRecord<'a>],
    config: &'a MatchConfig,
    control: RunControl<'a>,
    next_row: usize,
    buffer: std::vec::IntoIter<CandidatePair>,
    emitted: usize,
    comparisons: u64,
    cancelled: bool,
}

/// Starts a pair enumeration over already normalized entries.
///
/// # Errors
///
/// Returns [`MatchError::Config`](crate::MatchError::Config) when the
/// configuration is invalid; nothing is compared in that case.
pub fn generate_pairs_stream<'a>(
    entries: &'a [NormalizedRecord<'a>],
    config: &'a MatchConfig,
    control: RunControl<'a>,
) -> Result<PairStream<'a>> {
    config.validate()?;
    Ok(PairStream {
        entries,
        config,
        control,
        next_row: 0,
        buffer: Vec::new().into_iter(),
        emitted: 0,
        comparisons: 0,
        cancelled: false,
    })
}

/// Scores all unordered pairs of `records` and returns those at or above
/// the minimum score, in enumeration order.
///
/// # Errors
///
/// Returns [`MatchError::Config`](crate::MatchError::Config) when the
/// configuration is invalid.
pub fn generate_pairs(records: &[Record], config: &MatchConfig) -> Result<Vec<CandidatePair>> {
    config.validate()?;
    let entries = normalize_records(records.iter().enumerate(), config);
    Ok(generate_pairs_stream(&entries, config, RunControl::default())?.collect())
}

impl PairStream<'_> {
    /// Pairs yielded so far.
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Pair comparisons performed so far.
    #[must_use]
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// True when the stream stopped because the cancellation token was set.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn fill_next_chunk(&mut self) -> bool {
        let total = self.entries.len();
        if self.cancelled || self.next_row >= total {
            return false;
        }
        if self.control.is_cancelled() {
            debug!(
                rows_done = self.next_row,
                rows_total = total,
                "pair enumeration cancelled"
            );
            self.cancelled = true;
            return false;
        }

        let rows = self.next_row..(self.next_row + self.config.chunk_rows).min(total);
        self.comparisons += rows
            .clone()
            .map(|row| (total - row - 1) as u64)
            .sum::<u64>();
        let found = self.evaluate(rows.clone());
        self.next_row = rows.end;

        let batch: Vec<CandidatePair> = found.into_iter().flatten().collect();
        self.control.report(Progress {
            rows_done: self.next_row,
            rows_total: total,
            pairs_found: self.emitted + batch.len(),
        });
        self.buffer = batch.into_iter();
        true
    }

    #[cfg(feature = "parallel")]
    fn evaluate(&self, rows: Range<usize>) -> Vec<Vec<CandidatePair>> {
        if self.config.parallel {
            rows.into_par_iter().map(|row| self.score_row(row)).collect()
        } else {
            rows.map(|row| self.score_row(row)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate(&self, rows: Range<usize>) -> Vec<Vec<CandidatePair>> {
        rows.map(|row| self.score_row(row)).collect()
    }

    fn score_row(&self, row: usize) -> Vec<CandidatePair> {
        let left = &self.entries[row];
        let mut found = Vec::new();

        for right in &self.entries[row + 1..] {
            if left.name.is_empty()
                && right.name.is_empty()
                && self.config.empty_names == EmptyNamePolicy::Exclude
            {
                continue;
            }
            let score = score(&left.name, &right.name);
            if score >= self.config.minimum_score {
                found.push(CandidatePair {
                    record_a: left.record.bp_number.clone(),
                    record_b: right.record.bp_number.clone(),
                    index_a: left.index,
                    index_b: right.index,
                    score,
                    confidence: classify(score),
                });
            }
        }

        found
    }
}

impl Iterator for PairStream<'_> {
    type Item = CandidatePair;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pair) = self.buffer.next() {
                self.emitted += 1;
                return Some(pair);
            }
            if !self.fill_next_chunk() {
                return None;
            }
        }
    }
}
