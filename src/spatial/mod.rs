//! Spatial data model: cells, grids, patterns, and the editable output canvas
//!
//! This module contains:
//! - Coordinates, shapes, and immutable cells
//! - Fully-covering grids validated at construction
//! - Sparse patterns with the same dimensions as their grid
//! - The output canvas, the only surface user input may mutate

/// Editable output canvas
pub mod canvas;
/// Coordinates, shapes, and cells
pub mod cell;
/// Immutable rectangular grids
pub mod grid;
/// Sparse patterns
pub mod pattern;

pub use canvas::OutputCanvas;
pub use cell::{Cell, Color, Coord, Shape};
pub use grid::Grid;
pub use pattern::{Footprint, Pattern};
