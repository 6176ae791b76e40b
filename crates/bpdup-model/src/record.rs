//! Business Partner input records.

use serde::{Deserialize, Serialize};

/// One row of the Business Partner master list.
///
/// Records are owned by the caller; the matching engine only borrows them
/// for the duration of a run and never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    /// Business Partner number. Opaque, expected to be unique within a run.
    pub bp_number: String,
    /// Primary name field.
    pub name1: String,
    /// Secondary name field, frequently empty.
    #[serde(default)]
    pub name2: String,
}

impl Record {
    pub fn new(
        bp_number: impl Into<String>,
        name1: impl Into<String>,
        name2: impl Into<String>,
    ) -> Self {
        Self {
            bp_number: bp_number.into(),
            name1: name1.into(),
            name2: name2.into(),
        }
    }

    /// `name1` followed by `name2`, separated by a single space.
    #[must_use]
    pub fn combined_name(&self) -> String {
        format!("{} {}", self.name1, self.name2)
    }

    /// True when the record carries a non-blank identifier.
    #[must_use]
    pub fn has_identifier(&self) -> bool {
        !self.bp_number.trim().is_empty()
    }
}
