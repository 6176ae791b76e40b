//! CSV layouts: flat pair list, ranked per-record list and summary sheet.

use std::io::Write;

use bpdup_match::{MatchSummary, RecordMatches};
use bpdup_model::{CandidatePair, Record, format_score};
use chrono::NaiveDateTime;

use crate::error::{ReportError, Result};

/// Header of the flat candidate-pair export.
pub const PAIR_HEADERS: [&str; 8] = [
    "BP Number A",
    "Name1 A",
    "Name2 A",
    "BP Number B",
    "Name1 B",
    "Name2 B",
    "Similarity Score",
    "Confidence Level",
];

/// Header of the ranked per-record export.
pub const RANKED_HEADERS: [&str; 9] = [
    "Source BP Number",
    "Source Name1",
    "Source Name2",
    "Match Rank",
    "Match BP Number",
    "Match Name1",
    "Match Name2",
    "Similarity Score",
    "Confidence Level",
];

/// Timestamp format of the summary sheet.
pub const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

pub(crate) fn record_at(records: &[Record], index: usize) -> Result<&Record> {
    records
        .get(index)
        .ok_or(ReportError::UnknownRecord { index })
}

/// Writes one row per candidate pair, in the given order.
///
/// `records` is the slice the pairs were computed from.
pub fn write_pairs_csv<W: Write>(
    writer: W,
    pairs: &[CandidatePair],
    records: &[Record],
) -> Result<()> {
    let mut out = csv_writer(writer);
    out.write_record(PAIR_HEADERS)?;

    for pair in pairs {
        let a = record_at(records, pair.index_a)?;
        let b = record_at(records, pair.index_b)?;
        out.write_record([
            a.bp_number.as_str(),
            a.name1.as_str(),
            a.name2.as_str(),
            b.bp_number.as_str(),
            b.name1.as_str(),
            b.name2.as_str(),
            pair.display_score().as_str(),
            pair.confidence.label(),
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Writes each record's ranked partners, one row per partner.
pub fn write_ranked_csv<W: Write>(writer: W, ranked: &[RecordMatches<'_>]) -> Result<()> {
    let mut out = csv_writer(writer);
    out.write_record(RANKED_HEADERS)?;

    for entry in ranked {
        let source = entry.record;
        for ranked_match in &entry.matches {
            let partner = ranked_match.record;
            out.write_record([
                source.bp_number.as_str(),
                source.name1.as_str(),
                source.name2.as_str(),
                ranked_match.rank.to_string().as_str(),
                partner.bp_number.as_str(),
                partner.name1.as_str(),
                partner.name2.as_str(),
                format_score(ranked_match.score).as_str(),
                ranked_match.confidence.label(),
            ])?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Writes the summary as label/value rows.
pub fn write_summary_csv<W: Write>(
    writer: W,
    summary: &MatchSummary,
    generated: NaiveDateTime,
) -> Result<()> {
    let rows: Vec<(&str, String)> = vec![
        ("BP Duplicate Check - Summary Report", String::new()),
        ("Generated", generated.format(GENERATED_FORMAT).to_string()),
        ("", String::new()),
        ("Total Records Analyzed", summary.total_records.to_string()),
        (
            "Records with Potential Matches",
            summary.records_with_matches.to_string(),
        ),
        ("Total Match Pairs Found", summary.total_pairs.to_string()),
        ("Records Skipped", summary.skipped_records.to_string()),
        (
            "Average Similarity Score",
            format!("{}%", format_score(summary.average_score)),
        ),
        ("", String::new()),
        ("Confidence Breakdown", String::new()),
        ("High Confidence (>=80%)", summary.high.to_string()),
        ("Medium Confidence (60-79%)", summary.medium.to_string()),
        ("Low Confidence (<60%)", summary.low.to_string()),
    ];

    let mut out = csv_writer(writer);
    for (label, value) in &rows {
        out.write_record([*label, value.as_str()])?;
    }
    out.flush()?;
    Ok(())
}
