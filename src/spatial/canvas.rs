//! The one mutable surface exposed to a presentation layer
//!
//! Grids and accepted patterns are read-only; user edits land on an output canvas,
//! which can be snapshotted into a grid and checked against an expected solution.

use ndarray::Array2;

use crate::io::error::{GridsplitError, Result};
use crate::spatial::cell::{Cell, Color, Coord, Shape};
use crate::spatial::grid::Grid;

/// Color used for freshly created or reset canvases
pub const DEFAULT_FILL: Color = 0;

/// Editable output grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCanvas {
    cells: Array2<Color>,
    fill: Color,
}

impl OutputCanvas {
    /// Create a canvas filled with one color
    pub fn new(shape: Shape, fill: Color) -> Self {
        Self {
            cells: Array2::from_elem(shape.as_dim(), fill),
            fill,
        }
    }

    /// Create a canvas holding a copy of a grid's colors
    pub fn copy_of(grid: &Grid) -> Self {
        let mut canvas = Self::new(grid.shape(), DEFAULT_FILL);
        for cell in grid.cells() {
            if let Some(slot) = canvas.cells.get_mut((cell.x(), cell.y())) {
                *slot = cell.color();
            }
        }
        canvas
    }

    /// Shape of the canvas
    pub fn shape(&self) -> Shape {
        let (rows, cols) = self.cells.dim();
        Shape::new(rows, cols)
    }

    /// Color at a coordinate
    pub fn get(&self, coord: Coord) -> Option<Color> {
        self.cells.get((coord.row, coord.col)).copied()
    }

    /// Paint a single cell
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate lies outside the canvas
    pub fn paint(&mut self, coord: Coord, color: Color) -> Result<()> {
        let shape = self.shape();
        let slot = self
            .cells
            .get_mut((coord.row, coord.col))
            .ok_or(GridsplitError::CoordinateOutOfBounds { coord, shape })?;
        *slot = color;
        Ok(())
    }

    /// Change the canvas size, keeping overlapping content
    pub fn resize(&mut self, shape: Shape) {
        let mut resized = Array2::from_elem(shape.as_dim(), self.fill);
        for ((row, col), &color) in self.cells.indexed_iter() {
            if let Some(slot) = resized.get_mut((row, col)) {
                *slot = color;
            }
        }
        self.cells = resized;
    }

    /// Overwrite every cell with the fill color
    pub fn reset(&mut self) {
        self.cells.fill(self.fill);
    }

    /// Freeze the current content into an immutable grid
    ///
    /// # Errors
    ///
    /// Returns a structural error if the canvas has zero rows or columns
    pub fn snapshot(&self) -> Result<Grid> {
        Grid::from_cells(
            self.cells
                .indexed_iter()
                .map(|((row, col), &color)| Cell::new(Coord::new(row, col), color)),
            crate::spatial::grid::OBSERVED_PROBABILITY,
        )
    }

    /// Coordinates where the canvas differs from `expected`
    ///
    /// A shape mismatch reports every coordinate of the larger of the two shapes
    /// that is not present in both.
    pub fn differences(&self, expected: &Grid) -> Vec<Coord> {
        let shape = self.shape();
        let expected_shape = expected.shape();
        let bounds = Shape::new(
            shape.rows.max(expected_shape.rows),
            shape.cols.max(expected_shape.cols),
        );
        bounds
            .coords()
            .filter(|&coord| self.get(coord) != expected.color_at(coord))
            .collect()
    }

    /// Check the canvas against an expected solution
    pub fn matches(&self, expected: &Grid) -> bool {
        self.differences(expected).is_empty()
    }
}
