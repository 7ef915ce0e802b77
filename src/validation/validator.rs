//! Pass/fail decisions for candidate decompositions

use serde::Serialize;
use tracing::debug;

use crate::spatial::{Coord, Grid, Pattern};
use crate::validation::checks::{
    DimensionFinding, FidelityFinding, Overlap, check_dimensions, check_fidelity,
    check_occupancy,
};
use crate::validation::report::{FailureKind, FailureReport};

/// Everything the four checks observed about a candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Findings {
    /// Shape comparison for every pattern
    pub dimensions: Vec<DimensionFinding>,
    /// Color comparison for every pattern
    pub fidelity: Vec<FidelityFinding>,
    /// Coordinates with two or more claimants
    pub overlaps: Vec<Overlap>,
    /// Coordinates with no claimant
    pub uncovered: Vec<Coord>,
}

impl Findings {
    /// Run all checks in their fixed order
    pub fn collect(grid: &Grid, patterns: &[Pattern]) -> Self {
        let dimensions = check_dimensions(grid, patterns);
        let fidelity = check_fidelity(grid, patterns);
        let (overlaps, uncovered) = check_occupancy(grid, patterns);
        Self {
            dimensions,
            fidelity,
            overlaps,
            uncovered,
        }
    }

    /// Violated check classes in check order
    pub fn failed_kinds(&self) -> Vec<FailureKind> {
        let mut kinds = Vec::new();
        if self.dimensions.iter().any(|finding| !finding.passes()) {
            kinds.push(FailureKind::DimensionMismatch);
        }
        if self.fidelity.iter().any(FidelityFinding::fails) {
            kinds.push(FailureKind::FidelityMismatch);
        }
        if !self.overlaps.is_empty() {
            kinds.push(FailureKind::OverlapViolation);
        }
        if !self.uncovered.is_empty() {
            kinds.push(FailureKind::CoverageGap);
        }
        kinds
    }

    /// Total number of individual violations
    ///
    /// Counts mis-shaped patterns, mismatched cells, overlapping coordinates, and
    /// uncovered coordinates. Used to rank failed attempts.
    pub fn violation_count(&self) -> usize {
        let dimensions = self.dimensions.iter().filter(|f| !f.passes()).count();
        let cells: usize = self
            .fidelity
            .iter()
            .map(|finding| match finding {
                FidelityFinding::Checked { mismatches, .. } => mismatches.len(),
                FidelityFinding::Skipped { .. } => 0,
            })
            .sum();
        dimensions + cells + self.overlaps.len() + self.uncovered.len()
    }
}

/// Outcome of validating one candidate decomposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Validation {
    /// Raw check results
    pub findings: Findings,
    /// One rendered report per violated check class, empty on pass
    pub reports: Vec<FailureReport>,
}

impl Validation {
    /// Check if every invariant holds
    pub fn is_pass(&self) -> bool {
        self.reports.is_empty()
    }

    /// Total number of individual violations
    pub fn violation_count(&self) -> usize {
        self.findings.violation_count()
    }

    /// Classes of the failed checks
    pub fn failed_kinds(&self) -> Vec<FailureKind> {
        self.reports.iter().map(|report| report.kind).collect()
    }
}

/// Validates candidate decompositions against one reference grid
///
/// The validator never mutates its inputs and the same candidate always
/// produces the same reports.
#[derive(Debug, Clone, Copy)]
pub struct PatternValidator<'g> {
    grid: &'g Grid,
}

impl<'g> PatternValidator<'g> {
    /// Create a validator for `grid`
    pub const fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    /// Reference grid
    pub const fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Check dimension fidelity, value fidelity, non-overlap, and completeness
    pub fn validate(&self, patterns: &[Pattern]) -> Validation {
        let findings = Findings::collect(self.grid, patterns);
        let reports: Vec<FailureReport> = findings
            .failed_kinds()
            .into_iter()
            .map(|kind| FailureReport::render(kind, self.grid, patterns, &findings))
            .collect();

        debug!(
            patterns = patterns.len(),
            failed_checks = reports.len(),
            violations = findings.violation_count(),
            "validated decomposition"
        );
        Validation { findings, reports }
    }
}
