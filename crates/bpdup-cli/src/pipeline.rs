//! Load, match and export steps behind `bpdup check`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bpdup_ingest::{RejectedRow, read_records_csv};
use bpdup_match::{MatchEngine, MatchOutcome, MatchSummary, Progress, top_matches};
use bpdup_model::{MatchConfig, Record};
use bpdup_report::{ExportFormat, Report, export_summary_to_path, export_to_path};
use chrono::NaiveDateTime;
use tracing::trace;

use crate::logging::redact_value;

/// Records, rejected rows and match results of one input file.
#[derive(Debug)]
pub struct CheckOutput {
    pub records: Vec<Record>,
    pub rejected: Vec<RejectedRow>,
    pub outcome: MatchOutcome,
    pub summary: MatchSummary,
}

/// Where `bpdup check` writes its results.
#[derive(Debug, Clone, Default)]
pub struct ExportTargets {
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    pub summary_output: Option<PathBuf>,
}

/// Loads `input` and compares every pair of accepted records.
///
/// Rejected input rows count towards the total and the skipped records of
/// the summary.
pub fn match_file<F>(input: &Path, config: MatchConfig, progress: F) -> Result<CheckOutput>
where
    F: Fn(Progress) + Send + Sync + 'static,
{
    let loaded =
        read_records_csv(input).with_context(|| format!("load {}", input.display()))?;

    let outcome = MatchEngine::new(config)?
        .with_progress(progress)
        .run(&loaded.records)
        .context("matching failed")?;

    for pair in &outcome.pairs {
        let a = &loaded.records[pair.index_a];
        let b = &loaded.records[pair.index_b];
        trace!(
            bp_a = %a.bp_number,
            bp_b = %b.bp_number,
            name_a = %redact_value(&a.combined_name()),
            name_b = %redact_value(&b.combined_name()),
            score = pair.score,
            "candidate pair"
        );
    }

    let mut summary =
        MatchSummary::from_outcome(&outcome, loaded.records.len() + loaded.rejected.len());
    summary.skipped_records += loaded.rejected.len();

    Ok(CheckOutput {
        records: loaded.records,
        rejected: loaded.rejected,
        outcome,
        summary,
    })
}

/// Writes the requested result and summary files.
pub fn export_check(
    check: &CheckOutput,
    top_n: usize,
    targets: &ExportTargets,
    generated: NaiveDateTime,
) -> Result<()> {
    let ranked = top_matches(&check.outcome, &check.records, top_n)?;
    let report = Report {
        records: &check.records,
        outcome: &check.outcome,
        summary: &check.summary,
        ranked: &ranked,
        rejected: &check.rejected,
        generated,
    };

    if let Some(path) = &targets.output {
        export_to_path(path, targets.format, &report)
            .with_context(|| format!("write {}", path.display()))?;
    }
    if let Some(path) = &targets.summary_output {
        export_summary_to_path(path, &check.summary, generated)
            .with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}
