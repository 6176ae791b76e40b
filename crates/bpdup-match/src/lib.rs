//! Fuzzy duplicate detection for Business Partner names.
//!
//! The pipeline is: [`normalize`] each record's combined name once, score
//! every unordered pair with the weighted similarity in [`score`], keep the
//! pairs at or above the configured minimum, [`classify`] them, and sort by
//! descending score. [`MatchEngine`] ties the steps together.

pub mod classify;
pub mod control;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod pairs;
pub mod ranking;
pub mod score;
pub mod summary;

pub use classify::{ConfidenceThresholds, classify};
pub use control::{CancellationToken, Progress, ProgressFn, RunControl};
pub use engine::{MatchEngine, MatchOutcome, SkipReason, SkippedRecord, run};
pub use error::{MatchError, Result};
pub use normalize::{normalize, normalize_bounded, normalize_record};
pub use pairs::{
    NormalizedRecord, PairStream, generate_pairs, generate_pairs_stream, normalize_records,
};
pub use ranking::{RankedMatch, RecordMatches, top_matches};
pub use score::{
    ScoreBreakdown, levenshtein, ratio, score, score_breakdown, token_set_ratio,
    token_sort_ratio,
};
pub use summary::MatchSummary;
