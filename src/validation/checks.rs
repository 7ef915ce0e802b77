//! The four validation checks and the findings they produce
//!
//! Every check reports all instances, passing and failing, so a rendered report can
//! show the generator what it got right as well as what it got wrong.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use crate::spatial::{Color, Coord, Grid, Pattern, Shape};

/// Dimension check result for one pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionFinding {
    /// Position of the pattern in the candidate list
    pub index: usize,
    /// Shape of the reference grid
    pub expected: Shape,
    /// Shape of the pattern
    pub actual: Shape,
}

impl DimensionFinding {
    /// Check if the pattern has the grid's shape
    pub fn passes(&self) -> bool {
        self.expected == self.actual
    }
}

/// One member cell whose color differs from the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellMismatch {
    /// Position of the cell
    pub coord: Coord,
    /// Color in the reference grid
    pub expected: Color,
    /// Color claimed by the pattern
    pub actual: Color,
}

/// How a pattern relates to the grid it was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FidelityCategory {
    /// Every member cell matches the grid
    Exact,
    /// The footprint is right but at most half of the colors differ
    DigitChanged,
    /// The pattern fits the grid when translated
    Shifted {
        /// Row offset that makes the pattern fit
        d_row: isize,
        /// Column offset that makes the pattern fit
        d_col: isize,
    },
    /// The colors exist in the grid but no translation fits
    WrongShape,
    /// None of the pattern's colors occur in the grid
    Spurious,
}

impl FidelityCategory {
    /// Check if the pattern matched the grid exactly
    pub const fn passes(&self) -> bool {
        matches!(self, Self::Exact)
    }
}

impl fmt::Display for FidelityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "matches the grid"),
            Self::DigitChanged => write!(f, "digit changed"),
            Self::Shifted { d_row, d_col } => {
                write!(f, "shifted position (fits when moved by {d_row:+} rows, {d_col:+} cols)")
            }
            Self::WrongShape => write!(f, "wrong shape"),
            Self::Spurious => write!(f, "spurious pattern"),
        }
    }
}

/// Fidelity check result for one pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FidelityFinding {
    /// Not checked because the pattern failed the dimension check
    Skipped {
        /// Position of the pattern in the candidate list
        index: usize,
    },
    /// Cell values were compared against the grid
    Checked {
        /// Position of the pattern in the candidate list
        index: usize,
        /// Classification of the pattern
        category: FidelityCategory,
        /// Every member cell that differs from the grid, row-major
        mismatches: Vec<CellMismatch>,
    },
}

impl FidelityFinding {
    /// Position of the pattern in the candidate list
    pub const fn index(&self) -> usize {
        match self {
            Self::Skipped { index } | Self::Checked { index, .. } => *index,
        }
    }

    /// Check if the pattern was compared and failed
    pub fn fails(&self) -> bool {
        matches!(self, Self::Checked { mismatches, .. } if !mismatches.is_empty())
    }
}

/// A coordinate claimed by more than one pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overlap {
    /// Position of the shared cell
    pub coord: Coord,
    /// Candidate indices of every claiming pattern, ascending
    pub claimants: Vec<usize>,
}

/// Compare every pattern's shape with the grid's
pub fn check_dimensions(grid: &Grid, patterns: &[Pattern]) -> Vec<DimensionFinding> {
    let expected = grid.shape();
    patterns
        .iter()
        .enumerate()
        .map(|(index, pattern)| DimensionFinding {
            index,
            expected,
            actual: pattern.shape(),
        })
        .collect()
}

/// Compare member colors with the grid, classifying each failing pattern
///
/// Patterns whose shape differs from the grid's are skipped.
pub fn check_fidelity(grid: &Grid, patterns: &[Pattern]) -> Vec<FidelityFinding> {
    let grid_colors = grid.colors();
    patterns
        .iter()
        .enumerate()
        .map(|(index, pattern)| {
            if pattern.shape() != grid.shape() {
                return FidelityFinding::Skipped { index };
            }
            let mismatches: Vec<CellMismatch> = pattern
                .iter()
                .filter_map(|(coord, actual)| {
                    grid.color_at(coord)
                        .filter(|&expected| expected != actual)
                        .map(|expected| CellMismatch {
                            coord,
                            expected,
                            actual,
                        })
                })
                .collect();
            let category = classify(grid, &grid_colors, pattern, mismatches.len());
            FidelityFinding::Checked {
                index,
                category,
                mismatches,
            }
        })
        .collect()
}

fn classify(
    grid: &Grid,
    grid_colors: &BTreeSet<Color>,
    pattern: &Pattern,
    mismatch_count: usize,
) -> FidelityCategory {
    if mismatch_count == 0 {
        return FidelityCategory::Exact;
    }
    if pattern.colors().is_disjoint(grid_colors) {
        return FidelityCategory::Spurious;
    }
    // A lone cell keeps its footprint whatever its color, so it is never shifted
    if pattern.len() == 1 || mismatch_count * 2 <= pattern.len() {
        return FidelityCategory::DigitChanged;
    }
    // Only a mostly-wrong footprint is searched for a translation
    best_translation(grid, pattern).map_or(FidelityCategory::WrongShape, |(d_row, d_col)| {
        FidelityCategory::Shifted { d_row, d_col }
    })
}

// Smallest non-zero offset (manhattan, then row-major) under which every member
// cell lands on an in-bounds grid cell of the same color
fn best_translation(grid: &Grid, pattern: &Pattern) -> Option<(isize, isize)> {
    let shape = grid.shape();
    let max_row = isize::try_from(shape.rows).ok()?;
    let max_col = isize::try_from(shape.cols).ok()?;
    let cells: Vec<(Coord, Color)> = pattern.iter().collect();

    let mut best: Option<(usize, (isize, isize))> = None;
    for d_row in (1 - max_row)..max_row {
        for d_col in (1 - max_col)..max_col {
            if d_row == 0 && d_col == 0 {
                continue;
            }
            let distance = d_row.unsigned_abs() + d_col.unsigned_abs();
            if best.is_some_and(|(shortest, _)| distance >= shortest) {
                continue;
            }
            let fits = cells.iter().all(|&(coord, color)| {
                coord
                    .offset(d_row, d_col)
                    .and_then(|moved| grid.color_at(moved))
                    == Some(color)
            });
            if fits {
                best = Some((distance, (d_row, d_col)));
            }
        }
    }
    best.map(|(_, offset)| offset)
}

/// Occupancy of every grid coordinate by dimension-correct patterns
///
/// Returns the overlapping coordinates and the uncovered coordinates, both in
/// row-major order. Colors are ignored.
pub fn check_occupancy(grid: &Grid, patterns: &[Pattern]) -> (Vec<Overlap>, Vec<Coord>) {
    let shape = grid.shape();
    let mut claimants: Vec<Vec<usize>> = vec![Vec::new(); shape.area()];
    for (index, pattern) in patterns.iter().enumerate() {
        if pattern.shape() != shape {
            continue;
        }
        for (coord, _) in pattern.iter() {
            if let Some(slot) = shape.index_of(coord).and_then(|i| claimants.get_mut(i)) {
                slot.push(index);
            }
        }
    }

    let mut overlaps = Vec::new();
    let mut uncovered = Vec::new();
    for (index, claimed_by) in claimants.into_iter().enumerate() {
        let coord = shape.coord_at(index);
        match claimed_by.len() {
            0 => uncovered.push(coord),
            1 => {}
            _ => overlaps.push(Overlap {
                coord,
                claimants: claimed_by,
            }),
        }
    }
    (overlaps, uncovered)
}
