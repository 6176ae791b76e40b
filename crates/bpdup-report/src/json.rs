//! JSON export.

use std::io::Write;

use bpdup_ingest::RejectedRow;
use bpdup_match::{MatchSummary, SkippedRecord};
use bpdup_model::{CandidatePair, ConfidenceLevel, Record};
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::csv_export::{GENERATED_FORMAT, record_at};
use crate::error::Result;

/// One candidate pair with both records spelled out.
#[derive(Debug, Serialize)]
pub struct PairEntry<'a> {
    pub partner_a: &'a Record,
    pub partner_b: &'a Record,
    /// Full-precision score.
    pub score: f64,
    pub confidence: ConfidenceLevel,
}

/// Document written by [`write_json`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated: String,
    pub summary: &'a MatchSummary,
    pub pairs: Vec<PairEntry<'a>>,
    /// Records the engine left out.
    pub skipped: &'a [SkippedRecord],
    /// Input rows rejected before matching.
    pub rejected: &'a [RejectedRow],
}

impl<'a> JsonReport<'a> {
    /// Resolves the pair indices against `records`.
    pub fn new(
        summary: &'a MatchSummary,
        pairs: &[CandidatePair],
        records: &'a [Record],
        skipped: &'a [SkippedRecord],
        rejected: &'a [RejectedRow],
        generated: NaiveDateTime,
    ) -> Result<Self> {
        let pairs = pairs
            .iter()
            .map(|pair| {
                Ok(PairEntry {
                    partner_a: record_at(records, pair.index_a)?,
                    partner_b: record_at(records, pair.index_b)?,
                    score: pair.score,
                    confidence: pair.confidence,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            generated: generated.format(GENERATED_FORMAT).to_string(),
            summary,
            pairs,
            skipped,
            rejected,
        })
    }
}

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, report: &JsonReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
