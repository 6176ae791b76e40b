//! Path-based export in a chosen format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bpdup_ingest::RejectedRow;
use bpdup_match::{MatchOutcome, MatchSummary, RecordMatches};
use bpdup_model::Record;
use chrono::NaiveDateTime;

use crate::csv_export::{write_pairs_csv, write_ranked_csv, write_summary_csv};
use crate::error::{ReportError, Result};
use crate::json::{JsonReport, write_json};

/// Output layout of an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// One row per candidate pair.
    #[default]
    Csv,
    /// One row per record and ranked partner.
    RankedCsv,
    /// Summary, pairs, skipped records and rejected rows as one JSON document.
    Json,
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::RankedCsv => write!(f, "ranked"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Everything a report can draw from.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub records: &'a [Record],
    pub outcome: &'a MatchOutcome,
    pub summary: &'a MatchSummary,
    pub ranked: &'a [RecordMatches<'a>],
    /// Input rows rejected before matching.
    pub rejected: &'a [RejectedRow],
    pub generated: NaiveDateTime,
}

/// Writes `report` to `writer` in `format`.
pub fn write_report<W: Write>(writer: W, format: ExportFormat, report: &Report<'_>) -> Result<()> {
    match format {
        ExportFormat::Csv => write_pairs_csv(writer, &report.outcome.pairs, report.records),
        ExportFormat::RankedCsv => write_ranked_csv(writer, report.ranked),
        ExportFormat::Json => {
            let json = JsonReport::new(
                report.summary,
                &report.outcome.pairs,
                report.records,
                &report.outcome.skipped,
                report.rejected,
                report.generated,
            )?;
            write_json(writer, &json)
        }
    }
}

/// Creates `path` and writes `report` to it in `format`.
pub fn export_to_path(path: &Path, format: ExportFormat, report: &Report<'_>) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_report(BufWriter::new(file), format, report)?;
    tracing::info!(
        path = %path.display(),
        %format,
        pairs = report.outcome.pairs.len(),
        "exported results"
    );
    Ok(())
}

/// Creates `path` and writes the summary sheet to it.
pub fn export_summary_to_path(
    path: &Path,
    summary: &MatchSummary,
    generated: NaiveDateTime,
) -> Result<()> {
    let file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_summary_csv(BufWriter::new(file), summary, generated)?;
    tracing::info!(path = %path.display(), "exported summary");
    Ok(())
}
