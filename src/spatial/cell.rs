//! Coordinates, shapes, and the atomic colored cell

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::error::{GridsplitError, Result};
use crate::spatial::pattern::Pattern;

/// Palette index of a cell (puzzle pages use 0-9)
pub type Color = u8;

/// Grid position, row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (the `x` of a cell)
    pub row: usize,
    /// Column index (the `y` of a cell)
    pub col: usize,
}

impl Coord {
    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translate by a signed offset, `None` if either axis would go negative
    pub const fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        match (
            self.row.checked_add_signed(d_row),
            self.col.checked_add_signed(d_col),
        ) {
            (Some(row), Some(col)) => Some(Self { row, col }),
            _ => None,
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Row and column count of a grid or pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Shape {
    /// Create a shape
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of positions
    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Check if a coordinate lies inside the shape
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Row-major linear index of an in-bounds coordinate
    pub const fn index_of(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.cols + coord.col)
        } else {
            None
        }
    }

    /// Coordinate for a row-major linear index
    ///
    /// The result is only meaningful for `index < self.area()`.
    pub const fn coord_at(&self, index: usize) -> Coord {
        if self.cols == 0 {
            return Coord::new(0, 0);
        }
        Coord::new(index / self.cols, index % self.cols)
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let shape = *self;
        (0..shape.area()).map(move |index| shape.coord_at(index))
    }

    /// Convert to the `(rows, cols)` tuple used by `ndarray`
    pub const fn as_dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// A single colored position with a probability weight
///
/// Cells are immutable once created; adjusted copies are produced with
/// [`Cell::with_probability`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    color: Color,
    probability: f64,
}

impl Cell {
    /// Create a cell with zero probability weight
    pub const fn new(coord: Coord, color: Color) -> Self {
        Self {
            coord,
            color,
            probability: 0.0,
        }
    }

    /// Copy of this cell with a different probability
    #[must_use]
    pub const fn with_probability(self, probability: f64) -> Self {
        Self {
            probability,
            ..self
        }
    }

    /// Position of the cell
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Row index
    pub const fn x(&self) -> usize {
        self.coord.row
    }

    /// Column index
    pub const fn y(&self) -> usize {
        self.coord.col
    }

    /// Palette color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Probability weight
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Wrap this cell in a single-cell pattern of the given shape
    ///
    /// The pattern inherits the cell's probability.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell lies outside `shape`
    pub fn to_pattern(self, shape: Shape) -> Result<Pattern> {
        if !shape.contains(self.coord) {
            return Err(GridsplitError::CoordinateOutOfBounds {
                coord: self.coord,
                shape,
            });
        }
        Pattern::from_cells(shape, [(self.coord, self.color)])
            .map(|pattern| pattern.with_probability(self.probability))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cell(x={}, y={}, color={}, probability={})",
            self.coord.row, self.coord.col, self.color, self.probability
        )
    }
}
