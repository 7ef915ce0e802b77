//! Rendered failure reports replayed to the pattern generator

use serde::Serialize;
use std::fmt;

use crate::spatial::{Grid, Pattern};
use crate::validation::checks::FidelityFinding;
use crate::validation::validator::Findings;

/// Class of validation failure
///
/// These are recoverable through the retry loop and never surface as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum FailureKind {
    /// A pattern does not have the grid's shape
    DimensionMismatch,
    /// A member cell differs from the grid
    FidelityMismatch,
    /// A coordinate is claimed by two or more patterns
    OverlapViolation,
    /// A coordinate is claimed by no pattern
    CoverageGap,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch => write!(f, "dimension mismatch"),
            Self::FidelityMismatch => write!(f, "fidelity mismatch"),
            Self::OverlapViolation => write!(f, "overlap violation"),
            Self::CoverageGap => write!(f, "coverage gap"),
        }
    }
}

/// Plain-text report for one violated check class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureReport {
    /// Which check failed
    pub kind: FailureKind,
    /// Rendered diagnostic text
    pub text: String,
}

impl FailureReport {
    /// Render the report for `kind`
    pub fn render(kind: FailureKind, grid: &Grid, patterns: &[Pattern], findings: &Findings) -> Self {
        let text = Rendered {
            kind,
            grid,
            patterns,
            findings,
        }
        .to_string();
        Self { kind, text }
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

struct Rendered<'a> {
    kind: FailureKind,
    grid: &'a Grid,
    patterns: &'a [Pattern],
    findings: &'a Findings,
}

impl Rendered<'_> {
    fn name(&self, index: usize) -> String {
        match self.patterns.get(index).and_then(Pattern::label) {
            Some(label) => format!("Pattern {index} ({label})"),
            None => format!("Pattern {index}"),
        }
    }

    fn pattern_body(&self, f: &mut fmt::Formatter<'_>, index: usize) -> fmt::Result {
        if let Some(pattern) = self.patterns.get(index) {
            write!(f, "{pattern}")?;
        }
        Ok(())
    }

    fn dimensions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dimension mismatch detected:")?;
        writeln!(f, "Original grid dimensions: {}", self.grid.shape())?;
        writeln!(f, "Extracted pattern dimensions:")?;
        for finding in &self.findings.dimensions {
            let name = self.name(finding.index);
            if finding.passes() {
                writeln!(f, "{name}: {} ok", finding.actual)?;
            } else {
                writeln!(
                    f,
                    "{name}: {} (expected {}; {} rows instead of {}, {} columns instead of {})",
                    finding.actual,
                    finding.expected,
                    finding.actual.rows,
                    finding.expected.rows,
                    finding.actual.cols,
                    finding.expected.cols,
                )?;
            }
        }
        write!(
            f,
            "All extracted patterns must have the same dimensions as the original grid."
        )
    }

    fn fidelity(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "One or more extracted patterns do not match the original grid:\n"
        )?;
        writeln!(f, "Original grid:\n{}", self.grid)?;
        for finding in &self.findings.fidelity {
            let name = self.name(finding.index());
            match finding {
                FidelityFinding::Skipped { .. } => {
                    writeln!(f, "{name}: skipped (dimension mismatch)")?;
                }
                FidelityFinding::Checked {
                    category,
                    mismatches,
                    ..
                } if mismatches.is_empty() => {
                    writeln!(f, "{name}: {category}")?;
                }
                FidelityFinding::Checked {
                    index,
                    category,
                    mismatches,
                } => {
                    writeln!(f, "{name}: {category}")?;
                    for mismatch in mismatches {
                        writeln!(
                            f,
                            "  Cell {}: expected {}, found {}",
                            mismatch.coord, mismatch.expected, mismatch.actual
                        )?;
                    }
                    writeln!(f, "Extracted pattern:")?;
                    self.pattern_body(f, *index)?;
                }
            }
        }
        write!(
            f,
            "\nEvery extracted pattern must be a subset of the original grid at the same positions."
        )
    }

    fn overlaps(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Overlapping patterns detected:\n")?;
        writeln!(f, "Original grid:\n{}", self.grid)?;
        writeln!(f, "Overlapping cells:")?;
        for overlap in &self.findings.overlaps {
            let names: Vec<String> = overlap
                .claimants
                .iter()
                .map(|&index| self.name(index))
                .collect();
            writeln!(
                f,
                "Cell {} is covered by multiple patterns: {:?} ({})",
                overlap.coord,
                overlap.claimants,
                names.join(", ")
            )?;
        }
        write!(
            f,
            "\nPlease refine the pattern extraction so that each cell belongs to only one pattern."
        )
    }

    fn coverage(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Incomplete coverage detected:\n")?;
        writeln!(f, "Original grid:\n{}", self.grid)?;
        writeln!(f, "Uncovered cells:")?;
        for coord in &self.findings.uncovered {
            let color = self
                .grid
                .color_at(*coord)
                .map_or_else(String::new, |color| format!(" (color {color})"));
            writeln!(f, "Cell {coord}{color} is not covered by any pattern")?;
        }
        write!(
            f,
            "\nPlease refine the pattern extraction to ensure complete coverage of the original grid."
        )
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::DimensionMismatch => self.dimensions(f),
            FailureKind::FidelityMismatch => self.fidelity(f),
            FailureKind::OverlapViolation => self.overlaps(f),
            FailureKind::CoverageGap => self.coverage(f),
        }
    }
}
