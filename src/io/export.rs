//! JSON run reports for extracted pages

use serde::Serialize;
use std::path::Path;

use crate::extraction::{GiveUpReason, GridDecomposition, Outcome, PageOutcome};
use crate::io::error::{Result, file_system};
use crate::spatial::{Color, Pattern};
use crate::validation::FailureReport;

/// Serialized form of one pattern
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternRecord {
    /// Label attached by the oracle
    pub label: Option<String>,
    /// Probability weight
    pub probability: f64,
    /// Rows of optional colors
    pub rows: Vec<Vec<Option<Color>>>,
}

impl From<&Pattern> for PatternRecord {
    fn from(pattern: &Pattern) -> Self {
        Self {
            label: pattern.label().map(str::to_string),
            probability: pattern.probability(),
            rows: pattern.to_rows(),
        }
    }
}

/// Serialized form of one (grid, description) run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecompositionReport {
    /// Index of the grid on the page
    pub grid_index: usize,
    /// Description name
    pub description: String,
    /// Whether a proposal passed validation
    pub converged: bool,
    /// Number of oracle calls made
    pub attempts: usize,
    /// Why the controller stopped, if it did not converge
    pub give_up_reason: Option<GiveUpReason>,
    /// Accepted patterns, or the best-known ones on non-convergence
    pub patterns: Vec<PatternRecord>,
    /// Failure reports accumulated along the way
    pub failure_reports: Vec<FailureReport>,
}

impl From<&GridDecomposition> for DecompositionReport {
    fn from(decomposition: &GridDecomposition) -> Self {
        let outcome = &decomposition.outcome;
        let (give_up_reason, failure_reports) = match outcome {
            Outcome::Converged { .. } => (None, Vec::new()),
            Outcome::NonConverged {
                reason, reports, ..
            } => (Some(reason.clone()), reports.clone()),
        };
        Self {
            grid_index: decomposition.grid_index,
            description: decomposition.description.clone(),
            converged: outcome.is_converged(),
            attempts: outcome.attempts(),
            give_up_reason,
            patterns: outcome
                .patterns()
                .unwrap_or_default()
                .iter()
                .map(PatternRecord::from)
                .collect(),
            failure_reports,
        }
    }
}

/// Serialized summary of a page run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReport {
    /// Page number
    pub page: usize,
    /// Whether every decomposition converged
    pub converged: bool,
    /// Number of grids in the assembled hierarchy, if any
    pub hierarchy_grids: Option<usize>,
    /// Per-run details
    pub decompositions: Vec<DecompositionReport>,
}

impl PageReport {
    /// Summarize a page outcome
    pub fn from_outcome(outcome: &PageOutcome) -> Self {
        Self {
            page: outcome.page,
            converged: outcome.is_converged(),
            hierarchy_grids: outcome.hierarchy.as_ref().map(|constellation| constellation.len()),
            decompositions: outcome
                .decompositions
                .iter()
                .map(DecompositionReport::from)
                .collect(),
        }
    }

    /// Pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized or written
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }
        std::fs::write(path, json).map_err(|e| file_system(path, "write report", e))
    }
}
