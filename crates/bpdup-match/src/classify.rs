//! Confidence classification of combined scores.

use bpdup_model::ConfidenceLevel;
use serde::{Deserialize, Serialize};

/// Lower bound of the High band.
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Lower bound of the Medium band.
pub const MEDIUM_THRESHOLD: f64 = 60.0;
/// Lower bound of the Low band.
pub const LOW_THRESHOLD: f64 = 50.0;

/// Score bands for confidence levels.
///
/// - Below `low`: not classified
/// - `low` to `medium`: [`ConfidenceLevel::Low`]
/// - `medium` to `high`: [`ConfidenceLevel::Medium`]
/// - At or above `high`: [`ConfidenceLevel::High`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: HIGH_THRESHOLD,
            medium: MEDIUM_THRESHOLD,
            low: LOW_THRESHOLD,
        }
    }
}

impl ConfidenceThresholds {
    /// Categorizes a score into a confidence level.
    ///
    /// Returns `None` if the score is below the low threshold.
    #[must_use]
    pub fn categorize(&self, score: f64) -> Option<ConfidenceLevel> {
        if score >= self.high {
            Some(ConfidenceLevel::High)
        } else if score >= self.medium {
            Some(ConfidenceLevel::Medium)
        } else if score >= self.low {
            Some(ConfidenceLevel::Low)
        } else {
            None
        }
    }

    /// Like [`Self::categorize`], but scores below the low band are labelled
    /// [`ConfidenceLevel::Low`].
    #[must_use]
    pub fn classify(&self, score: f64) -> ConfidenceLevel {
        self.categorize(score).unwrap_or(ConfidenceLevel::Low)
    }
}

/// Classifies a score with the default bands.
#[must_use]
pub fn classify(score: f64) -> ConfidenceLevel {
    ConfidenceThresholds::default().classify(score)
}
