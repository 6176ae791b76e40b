//! Per-record view of the candidate pairs: each record with its best partners.

use std::collections::BTreeMap;

use bpdup_model::{ConfidenceLevel, ConfigError, Record};

use crate::engine::MatchOutcome;
use crate::error::Result;

/// One ranked partner of a record.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch<'a> {
    /// 1-based rank among the record's partners.
    pub rank: usize,
    /// Input position of the partner.
    pub index: usize,
    pub record: &'a Record,
    pub score: f64,
    pub confidence: ConfidenceLevel,
}

/// A record and its best-scoring partners.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordMatches<'a> {
    pub index: usize,
    pub record: &'a Record,
    pub matches: Vec<RankedMatch<'a>>,
}

/// Lists, for every record in input order, its `top_n` best partners.
///
/// A pair counts for both of its records. Partners are ranked by descending
/// score, ties by partner input position. Records without any candidate
/// pair are left out. `records` must be the slice the outcome was computed
/// from.
///
/// # Errors
///
/// Returns [`ConfigError::TopNZero`] when `top_n` is zero.
pub fn top_matches<'a>(
    outcome: &MatchOutcome,
    records: &'a [Record],
    top_n: usize,
) -> Result<Vec<RecordMatches<'a>>> {
    if top_n == 0 {
        return Err(ConfigError::TopNZero.into());
    }

    let mut partners: BTreeMap<usize, Vec<(usize, f64, ConfidenceLevel)>> = BTreeMap::new();
    for pair in &outcome.pairs {
        for index in [pair.index_a, pair.index_b] {
            if let Some(partner) = pair.partner_of(index) {
                partners
                    .entry(index)
                    .or_default()
                    .push((partner, pair.score, pair.confidence));
            }
        }
    }

    let mut ranked = Vec::with_capacity(partners.len());
    for (index, mut list) in partners {
        let Some(record) = records.get(index) else {
            continue;
        };
        list.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        let matches = list
            .into_iter()
            .take(top_n)
            .filter_map(|(partner, score, confidence)| {
                records
                    .get(partner)
                    .map(|partner_record| (partner, partner_record, score, confidence))
            })
            .enumerate()
            .map(|(position, (partner, partner_record, score, confidence))| RankedMatch {
                rank: position + 1,
                index: partner,
                record: partner_record,
                score,
                confidence,
            })
            .collect();
        ranked.push(RecordMatches {
            index,
            record,
            matches,
        });
    }

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use bpdup_model::CandidatePair;

    use super::*;
    use crate::error::MatchError;

    fn pair(a: usize, b: usize, score: f64) -> CandidatePair {
        CandidatePair {
            record_a: format!("BP{a}"),
            record_b: format!("BP{b}"),
            index_a: a,
            index_b: b,
            score,
            confidence: crate::classify(score),
        }
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!("BP{i}"), format!("name {i}"), ""))
            .collect()
    }

    #[test]
    fn ranks_both_directions_and_truncates() {
        let records = records(4);
        let outcome = MatchOutcome {
            pairs: vec![pair(0, 1, 90.0), pair(1, 2, 95.0), pair(1, 3, 70.0)],
            ..MatchOutcome::default()
        };
        let ranked = top_matches(&outcome, &records, 2).unwrap();

        let sources: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(sources, vec![0, 1, 2, 3]);

        let of_one: Vec<(usize, usize)> = ranked[1]
            .matches
            .iter()
            .map(|m| (m.rank, m.index))
            .collect();
        assert_eq!(of_one, vec![(1, 2), (2, 0)]);
        assert_eq!(ranked[3].matches[0].index, 1);
    }

    #[test]
    fn ties_break_on_partner_position() {
        let records = records(3);
        let outcome = MatchOutcome {
            pairs: vec![pair(1, 2, 80.0), pair(0, 1, 80.0)],
            ..MatchOutcome::default()
        };
        let ranked = top_matches(&outcome, &records, 3).unwrap();
        let partners: Vec<usize> = ranked[1].matches.iter().map(|m| m.index).collect();
        assert_eq!(partners, vec![0, 2]);
    }

    #[test]
    fn zero_top_n_is_a_config_error() {
        let outcome = MatchOutcome::default();
        assert_eq!(
            top_matches(&outcome, &[], 0).unwrap_err(),
            MatchError::Config(ConfigError::TopNZero)
        );
    }
}
