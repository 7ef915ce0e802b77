//! Neighbor rules: cell expansions that define connectivity for segregation
//!
//! A rule maps one cell to the cells it is considered connected to. Segregation only
//! compares coordinates, so a rule fully determines what "connected" means.

use crate::spatial::{Cell, Coord, Shape};
use crate::transform::typed::{Tag, Tagged, Transform};
use crate::hierarchy::Level;

/// Offsets of the eight surrounding cells
pub const EIGHT_NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Offsets of the four orthogonal neighbors
pub const CROSS_OFFSETS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Candidate neighbor cells proposed by a rule
///
/// Unlike a pattern this has no shape; cells may lie beyond any grid and simply
/// never match during segregation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Neighborhood {
    cells: Vec<Cell>,
}

impl Neighborhood {
    /// Proposed cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Proposed coordinates
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    /// Number of proposed cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the rule proposed nothing
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl From<Vec<Cell>> for Neighborhood {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Neighborhood {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Tagged for Neighborhood {
    const TAG: Tag = Tag::Single(Level::Pattern);
}

/// A cell expansion used as a connectivity rule
pub type NeighborRule = Transform<Cell, Neighborhood>;

/// Rule proposing the cells at fixed offsets from the source cell
///
/// Proposed cells carry the source cell's color. Offsets that would produce a
/// negative coordinate are dropped.
pub fn offset_rule(description: impl Into<String>, offsets: Vec<(isize, isize)>) -> NeighborRule {
    Transform::new(description, move |cell: &Cell| {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| cell.coord().offset(d_row, d_col))
            .map(|coord| Cell::new(coord, cell.color()))
            .collect()
    })
}

/// The eight surrounding cells
pub fn eight_neighbors() -> NeighborRule {
    offset_rule(
        "Returns the nearest 8 cells to the given cell",
        EIGHT_NEIGHBOR_OFFSETS.to_vec(),
    )
}

/// The four orthogonally adjacent cells
pub fn cross_neighbors() -> NeighborRule {
    offset_rule(
        "Returns the 4 orthogonally adjacent cells",
        CROSS_OFFSETS.to_vec(),
    )
}

/// Restrict any rule to coordinates inside `shape`
pub fn bounded(rule: NeighborRule, shape: Shape) -> NeighborRule {
    let description = format!("{} (bounded to {shape})", rule.description());
    Transform::new(description, move |cell: &Cell| {
        rule.apply(cell)
            .cells()
            .iter()
            .copied()
            .filter(|neighbor| shape.contains(neighbor.coord()))
            .collect()
    })
}
