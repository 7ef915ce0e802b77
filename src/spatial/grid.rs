//! Immutable, fully-covering grids of colored cells
//!
//! A grid is built once per puzzle page and never mutated afterwards. Construction
//! checks that every coordinate inside the bounding rectangle holds exactly one cell.

use ndarray::Array2;
use std::collections::BTreeSet;
use std::fmt;

use crate::io::error::{Result, StructuralDefect};
use crate::spatial::cell::{Cell, Color, Coord, Shape};
use crate::spatial::pattern::Pattern;

/// Probability assigned to grids built from observed puzzle data
pub const OBSERVED_PROBABILITY: f64 = 1.0;

/// Rectangular array of cells with exactly one cell per coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Array2<Cell>,
    probability: f64,
}

impl Grid {
    /// Build a grid from an unordered collection of cells
    ///
    /// The shape is the bounding rectangle anchored at (0, 0). Coordinates are
    /// scanned in row-major order and the first defect found is reported.
    ///
    /// # Errors
    ///
    /// Returns a structural error if no cells are given, or if a coordinate
    /// inside the rectangle is missing or supplied more than once
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, probability: f64) -> Result<Self> {
        let mut cells: Vec<Cell> = cells.into_iter().collect();
        cells.sort_by_key(Cell::coord);

        let (Some(max_row), Some(max_col)) = (
            cells.iter().map(Cell::x).max(),
            cells.iter().map(Cell::y).max(),
        ) else {
            return Err(StructuralDefect::Empty.into());
        };

        // Sorted cells must match the row-major sequence one for one
        let mut expected = Some(Coord::new(0, 0));
        let mut previous: Option<Coord> = None;
        for cell in &cells {
            let coord = cell.coord();
            if previous == Some(coord) {
                return Err(StructuralDefect::Duplicate(coord).into());
            }
            match expected {
                Some(next) if next == coord => {}
                Some(next) => return Err(StructuralDefect::Missing(next).into()),
                None => return Err(StructuralDefect::Duplicate(coord).into()),
            }
            previous = Some(coord);
            expected = if coord.col == max_col {
                coord.row.checked_add(1).map(|row| Coord::new(row, 0))
            } else {
                Some(Coord::new(coord.row, coord.col + 1))
            };
        }

        let last = Coord::new(max_row, max_col);
        if previous != Some(last) {
            return Err(StructuralDefect::Missing(expected.unwrap_or(last)).into());
        }

        // Every coordinate up to (max_row, max_col) holds one cell, so both
        // dimensions are bounded by the number of cells
        let shape = Shape::new(max_row + 1, max_col + 1);
        Self::from_ordered(shape, cells, probability)
    }

    /// Build a grid from rows of colors
    ///
    /// Cells get zero probability; the grid itself is weighted as observed data.
    ///
    /// # Errors
    ///
    /// Returns a structural error for an empty input or rows of unequal length
    pub fn from_rows<R: AsRef<[Color]>>(rows: &[R]) -> Result<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if width == 0 {
            return Err(StructuralDefect::Empty.into());
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
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
            cells.extend(
                row.iter()
                    .enumerate()
                    .map(|(col, &color)| Cell::new(Coord::new(row_index, col), color)),
            );
        }

        Self::from_ordered(Shape::new(rows.len(), width), cells, OBSERVED_PROBABILITY)
    }

    fn from_ordered(shape: Shape, cells: Vec<Cell>, probability: f64) -> Result<Self> {
        let cells = Array2::from_shape_vec(shape.as_dim(), cells).map_err(|e| {
            crate::io::error::invalid_parameter("cells", &shape, &e)
        })?;
        Ok(Self { cells, probability })
    }

    /// Shape of the grid
    pub fn shape(&self) -> Shape {
        let (rows, cols) = self.cells.dim();
        Shape::new(rows, cols)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Probability weight of the grid
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Cell at a coordinate
    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get((coord.row, coord.col))
    }

    /// Color at a coordinate
    pub fn color_at(&self, coord: Coord) -> Option<Color> {
        self.get(coord).map(Cell::color)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Distinct colors present, ascending
    pub fn colors(&self) -> BTreeSet<Color> {
        self.cells.iter().map(Cell::color).collect()
    }

    /// Color rows, the inverse of [`Grid::from_rows`]
    pub fn to_rows(&self) -> Vec<Vec<Color>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(Cell::color).collect())
            .collect()
    }

    /// A pattern claiming every cell of the grid
    pub fn full_pattern(&self) -> Pattern {
        Pattern::from_grid_cells(
            self.shape(),
            self.cells.iter().map(|cell| (cell.coord(), cell.color())),
        )
        .with_probability(self.probability)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let colors: Vec<String> = row.iter().map(|cell| cell.color().to_string()).collect();
            writeln!(f, "[{}]", colors.join(", "))?;
        }
        Ok(())
    }
}
