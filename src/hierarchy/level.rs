//! Hierarchy levels and the type-level markers for container levels

use serde::Serialize;
use std::fmt;

/// Granularity of a spatial structure, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    /// A single cell
    Cell,
    /// A set of cells
    Pattern,
    /// A set of patterns
    Group,
    /// A set of groups
    SuperGroup,
    /// A set of supergroups, the top level
    Constellation,
}

impl Level {
    /// The next level up; the top level maps to itself
    pub const fn higher(self) -> Self {
        match self {
            Self::Cell => Self::Pattern,
            Self::Pattern => Self::Group,
            Self::Group => Self::SuperGroup,
            Self::SuperGroup | Self::Constellation => Self::Constellation,
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cell => "cell",
            Self::Pattern => "pattern",
            Self::Group => "group",
            Self::SuperGroup => "supergroup",
            Self::Constellation => "constellation",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type-level tag for the container levels
pub trait ContainerLevel: fmt::Debug + Clone + Copy + PartialEq + Default {
    /// The runtime level this marker stands for
    const LEVEL: Level;
}

/// Container levels that can be wrapped one level up
pub trait Promotable: ContainerLevel {
    /// Marker of the enclosing level
    type Parent: ContainerLevel;
}

/// Marker for groups of patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupLevel;

/// Marker for supergroups of groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuperGroupLevel;

/// Marker for constellations of supergroups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstellationLevel;

impl ContainerLevel for GroupLevel {
    const LEVEL: Level = Level::Group;
}

impl ContainerLevel for SuperGroupLevel {
    const LEVEL: Level = Level::SuperGroup;
}

impl ContainerLevel for ConstellationLevel {
    const LEVEL: Level = Level::Constellation;
}

impl Promotable for GroupLevel {
    type Parent = SuperGroupLevel;
}

impl Promotable for SuperGroupLevel {
    type Parent = ConstellationLevel;
}
