//! Level-tagged structure used to normalize data of mixed granularity

use crate::hierarchy::container::{Constellation, Group, Reduce, SuperGroup};
use crate::hierarchy::level::Level;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Cell, Footprint, Pattern, Shape};

/// Any structure in the Cell → Constellation hierarchy
#[derive(Debug, Clone, PartialEq)]
pub enum Structure {
    /// A single cell
    Cell(Cell),
    /// A sparse pattern
    Pattern(Pattern),
    /// A set of patterns
    Group(Group),
    /// A set of groups
    SuperGroup(SuperGroup),
    /// A set of supergroups
    Constellation(Constellation),
}

impl Structure {
    /// Level of the outermost structure
    pub const fn level(&self) -> Level {
        match self {
            Self::Cell(_) => Level::Cell,
            Self::Pattern(_) => Level::Pattern,
            Self::Group(_) => Level::Group,
            Self::SuperGroup(_) => Level::SuperGroup,
            Self::Constellation(_) => Level::Constellation,
        }
    }

    /// Probability weight of the outermost structure
    pub const fn probability(&self) -> f64 {
        match self {
            Self::Cell(cell) => cell.probability(),
            Self::Pattern(pattern) => pattern.probability(),
            Self::Group(group) => group.probability(),
            Self::SuperGroup(super_group) => super_group.probability(),
            Self::Constellation(constellation) => constellation.probability(),
        }
    }

    /// Collapse singleton containers to the most specific representation
    #[must_use]
    pub fn reduce(&self) -> Self {
        match self {
            Self::Cell(cell) => cell.reduce(),
            Self::Pattern(pattern) => pattern.reduce(),
            Self::Group(group) => group.reduce(),
            Self::SuperGroup(super_group) => super_group.reduce(),
            Self::Constellation(constellation) => constellation.reduce(),
        }
    }

    /// Wrap one level up; a constellation is returned unchanged
    ///
    /// `shape` is only consulted when promoting a cell, which needs the
    /// dimensions of the grid it belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if a promoted cell lies outside `shape`
    pub fn to_higher_order(self, shape: Shape) -> Result<Self> {
        Ok(match self {
            Self::Cell(cell) => Self::Pattern(cell.to_pattern(shape)?),
            Self::Pattern(pattern) => Self::Group(pattern.to_group()),
            Self::Group(group) => Self::SuperGroup(group.to_higher_order()),
            Self::SuperGroup(super_group) => Self::Constellation(super_group.to_higher_order()),
            constellation @ Self::Constellation(_) => constellation,
        })
    }

    /// Promote repeatedly until the structure sits at `target`
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is below the current level, or if a promoted
    /// cell lies outside `shape`
    pub fn promote_to(self, target: Level, shape: Shape) -> Result<Self> {
        if target < self.level() {
            return Err(invalid_parameter(
                "target",
                &target,
                &format!("cannot promote a {} downwards", self.level()),
            ));
        }
        let mut current = self;
        while current.level() < target {
            current = current.to_higher_order(shape)?;
        }
        Ok(current)
    }

    /// Every cell contained in the structure, carrying its pattern's probability
    pub fn cells(&self) -> Vec<Cell> {
        match self {
            Self::Cell(cell) => vec![*cell],
            Self::Pattern(pattern) => pattern.cells().collect(),
            Self::Group(group) => group.members().iter().flat_map(Pattern::cells).collect(),
            Self::SuperGroup(super_group) => super_group
                .members()
                .iter()
                .flat_map(Group::members)
                .flat_map(Pattern::cells)
                .collect(),
            Self::Constellation(constellation) => constellation
                .members()
                .iter()
                .flat_map(SuperGroup::members)
                .flat_map(Group::members)
                .flat_map(Pattern::cells)
                .collect(),
        }
    }

    /// Order-independent set of `(coordinate, color)` pairs covered
    pub fn footprint(&self) -> Footprint {
        self.cells()
            .into_iter()
            .map(|cell| (cell.coord(), cell.color()))
            .collect()
    }
}

impl From<Cell> for Structure {
    fn from(cell: Cell) -> Self {
        Self::Cell(cell)
    }
}

impl From<Pattern> for Structure {
    fn from(pattern: Pattern) -> Self {
        Self::Pattern(pattern)
    }
}

impl From<Group> for Structure {
    fn from(group: Group) -> Self {
        Self::Group(group)
    }
}

impl From<SuperGroup> for Structure {
    fn from(super_group: SuperGroup) -> Self {
        Self::SuperGroup(super_group)
    }
}

impl From<Constellation> for Structure {
    fn from(constellation: Constellation) -> Self {
        Self::Constellation(constellation)
    }
}
