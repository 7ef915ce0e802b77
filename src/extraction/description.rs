//! Natural-language descriptions of the patterns an oracle should extract

use serde::{Deserialize, Serialize};
use std::fmt;

/// What to extract from a grid, as produced by a description generator
///
/// Only `name` is required. Descriptions are opaque to the validator; they are
/// forwarded to the oracle and echoed in reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternDescription {
    /// Short name of the pattern
    pub name: String,
    /// Indices of the grids on the page this description applies to; empty means all
    #[serde(alias = "matrices")]
    pub grids: Vec<usize>,
    /// How to extract patterns matching this description
    pub extraction: String,
    /// What makes the pattern stand out
    pub prominent_reason: Option<String>,
    /// Where the pattern is found
    pub location: Option<String>,
    /// How to recognize the pattern in an unseen grid
    pub unique_identifier: Option<String>,
    /// Features shared by every occurrence
    pub common_features: Vec<String>,
    /// Features that differ between occurrences
    pub varying_features: Vec<String>,
}

impl PatternDescription {
    /// Description with only a name, applying to every grid
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the extraction recipe
    #[must_use]
    pub fn with_extraction(mut self, extraction: impl Into<String>) -> Self {
        self.extraction = extraction.into();
        self
    }

    /// Check if the description applies to the grid at `index`
    pub fn applies_to(&self, index: usize) -> bool {
        self.grids.is_empty() || self.grids.contains(&index)
    }
}

impl fmt::Display for PatternDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extraction.is_empty() {
            write!(f, ": {}", self.extraction)?;
        }
        Ok(())
    }
}
