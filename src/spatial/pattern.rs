//! Sparse patterns sharing the dimensions of their source grid
//!
//! A pattern is an `Option<Color>` array: `Some` marks membership, `None` marks
//! "not part of this pattern". Patterns are produced per decomposition attempt and
//! may be built up incrementally before validation.

use ndarray::Array2;
use std::collections::BTreeSet;
use std::fmt;

use crate::io::error::{GridsplitError, Result, StructuralDefect};
use crate::spatial::cell::{Cell, Color, Coord, Shape};

/// Order-independent identity of a pattern: its (coordinate, color) pairs
pub type Footprint = BTreeSet<(Coord, Color)>;

/// Sparse sub-shape of a grid
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    cells: Array2<Option<Color>>,
    probability: f64,
    label: Option<String>,
}

impl Pattern {
    /// Create a pattern with no member cells
    pub fn empty(shape: Shape) -> Self {
        Self {
            cells: Array2::from_elem(shape.as_dim(), None),
            probability: 0.0,
            label: None,
        }
    }

    /// Build a pattern from `(coordinate, color)` pairs
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate lies outside `shape`
    pub fn from_cells(
        shape: Shape,
        cells: impl IntoIterator<Item = (Coord, Color)>,
    ) -> Result<Self> {
        let mut pattern = Self::empty(shape);
        for (coord, color) in cells {
            pattern.insert(coord, color)?;
        }
        Ok(pattern)
    }

    /// Build a pattern from rows where `None` marks non-members
    ///
    /// Zero rows produce a `0x0` pattern, which never matches a real grid.
    ///
    /// # Errors
    ///
    /// Returns a structural error if the rows have unequal lengths
    pub fn from_rows<R: AsRef<[Option<Color>]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut flat = Vec::with_capacity(rows.len() * width);
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(StructuralDefect::Ragged {
                    row: row_index,
                    expected: width,
                    actual: row.len(),
                }
                .into());
            }
            flat.extend_from_slice(row);
        }

        let cells = Array2::from_shape_vec((rows.len(), width), flat).map_err(|e| {
            crate::io::error::invalid_parameter("rows", &format!("{}x{width}", rows.len()), &e)
        })?;
        Ok(Self {
            cells,
            probability: 0.0,
            label: None,
        })
    }

    // Callers guarantee every coordinate is inside `shape`
    pub(crate) fn from_grid_cells(
        shape: Shape,
        cells: impl IntoIterator<Item = (Coord, Color)>,
    ) -> Self {
        let mut pattern = Self::empty(shape);
        for (coord, color) in cells {
            pattern.claim(coord, color);
        }
        pattern
    }

    /// Copy with a different probability weight
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Copy with a human-readable label, used in diagnostic reports
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Shape of the pattern
    pub fn shape(&self) -> Shape {
        let (rows, cols) = self.cells.dim();
        Shape::new(rows, cols)
    }

    /// Probability weight
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Label attached by whoever produced the pattern
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Color at a coordinate, `None` if unclaimed or out of bounds
    pub fn get(&self, coord: Coord) -> Option<Color> {
        self.cells.get((coord.row, coord.col)).copied().flatten()
    }

    /// Check if the pattern claims a coordinate
    pub fn claims(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Add a member cell, replacing any previous color at that coordinate
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the pattern
    pub fn insert(&mut self, coord: Coord, color: Color) -> Result<()> {
        let shape = self.shape();
        let slot = self
            .cells
            .get_mut((coord.row, coord.col))
            .ok_or(GridsplitError::CoordinateOutOfBounds { coord, shape })?;
        *slot = Some(color);
        Ok(())
    }

    pub(crate) fn claim(&mut self, coord: Coord, color: Color) {
        if let Some(slot) = self.cells.get_mut((coord.row, coord.col)) {
            *slot = Some(color);
        }
    }

    /// Number of member cells
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if the pattern has no member cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Member cells as `(coordinate, color)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((row, col), &slot)| slot.map(|color| (Coord::new(row, col), color)))
    }

    /// Member cells carrying the pattern's probability
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter()
            .map(|(coord, color)| Cell::new(coord, color).with_probability(self.probability))
    }

    /// Distinct member colors, ascending
    pub fn colors(&self) -> BTreeSet<Color> {
        self.iter().map(|(_, color)| color).collect()
    }

    /// Order-independent `(coordinate, color)` set
    pub fn footprint(&self) -> Footprint {
        self.iter().collect()
    }

    /// Rows of optional colors, the inverse of [`Pattern::from_rows`]
    pub fn to_rows(&self) -> Vec<Vec<Option<Color>>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect()
    }

    /// Copy reshaped to `shape`, dropping members that fall outside it
    #[must_use]
    pub fn cropped(&self, shape: Shape) -> Self {
        let mut cropped = Self::from_grid_cells(
            shape,
            self.iter().filter(|(coord, _)| shape.contains(*coord)),
        )
        .with_probability(self.probability);
        cropped.label.clone_from(&self.label);
        cropped
    }

    /// Cell-wise union of patterns sharing `shape`
    ///
    /// Later patterns win where two claim the same coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if a member coordinate lies outside `shape`
    pub fn union<'a>(shape: Shape, patterns: impl IntoIterator<Item = &'a Self>) -> Result<Self> {
        let mut union = Self::empty(shape);
        for pattern in patterns {
            for (coord, color) in pattern.iter() {
                union.insert(coord, color)?;
            }
        }
        Ok(union)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let slots: Vec<String> = row
                .iter()
                .map(|slot| slot.map_or_else(|| "_".to_string(), |color| color.to_string()))
                .collect();
            writeln!(f, "[{}]", slots.join(", "))?;
        }
        Ok(())
    }
}
