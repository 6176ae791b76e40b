//! Match results: candidate duplicate pairs and their confidence bands.

use serde::{Deserialize, Serialize};

/// Discrete confidence band for human triage of a candidate pair.
///
/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Weak similarity, needs manual verification.
    Low,
    /// Reasonable similarity, should be reviewed.
    Medium,
    /// Near-certain duplicate.
    High,
}

impl ConfidenceLevel {
    /// All levels, highest first.
    pub const ALL: [ConfidenceLevel; 3] = [Self::High, Self::Medium, Self::Low];

    /// Label used in exports and terminal output.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Returns a human-readable description of the confidence level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely duplicate",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs verification",
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Two distinct input records whose combined names meet the minimum score.
///
/// `index_a < index_b` always holds; both are positions in the input
/// sequence handed to the engine, so (A, B) and (B, A) are never both emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePair {
    pub record_a: String,
    pub record_b: String,
    pub index_a: usize,
    pub index_b: usize,
    /// Combined similarity, full precision, in `0..=100`.
    pub score: f64,
    pub confidence: ConfidenceLevel,
}

impl CandidatePair {
    /// The other side of the pair, if `index` is one of its members.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        if index == self.index_a {
            Some(self.index_b)
        } else if index == self.index_b {
            Some(self.index_a)
        } else {
            None
        }
    }

    /// Score rounded to two decimals for display.
    #[must_use]
    pub fn display_score(&self) -> String {
        format_score(self.score)
    }
}

/// Formats a score with two decimals. Rounding is display-only.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}
