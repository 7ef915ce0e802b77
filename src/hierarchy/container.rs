//! Generic level-parameterised container with singleton reduction
//!
//! Groups, supergroups, and constellations share one implementation; the level is a
//! type parameter, so promotion can only ever move one level up.

use std::marker::PhantomData;

use crate::hierarchy::level::{
    ConstellationLevel, ContainerLevel, GroupLevel, Level, Promotable, SuperGroupLevel,
};
use crate::hierarchy::structure::Structure;
use crate::spatial::{Cell, Pattern};

/// Collapse to the most specific equivalent structure
pub trait Reduce {
    /// Reduce a singleton container to its only member, recursively
    fn reduce(&self) -> Structure;
}

/// A weighted collection of structures one level below `L`
#[derive(Debug, Clone, PartialEq)]
pub struct Container<L, C> {
    members: Vec<C>,
    probability: f64,
    level: PhantomData<L>,
}

/// A set of patterns
pub type Group = Container<GroupLevel, Pattern>;
/// A set of groups
pub type SuperGroup = Container<SuperGroupLevel, Group>;
/// A set of supergroups
pub type Constellation = Container<ConstellationLevel, SuperGroup>;

impl<L: ContainerLevel, C> Container<L, C> {
    /// Create a container from its members
    pub fn new(members: impl IntoIterator<Item = C>, probability: f64) -> Self {
        Self {
            members: members.into_iter().collect(),
            probability,
            level: PhantomData,
        }
    }

    /// Members in insertion order
    pub fn members(&self) -> &[C] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the container has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Probability weight
    pub const fn probability(&self) -> f64 {
        self.probability
    }

    /// Runtime level of this container
    pub const fn level(&self) -> Level {
        L::LEVEL
    }
}

impl<L: Promotable, C> Container<L, C> {
    /// Wrap this container as the only member of the next level up
    pub fn to_higher_order(self) -> Container<L::Parent, Self> {
        let probability = self.probability;
        Container::new([self], probability)
    }
}

impl<L, C> Reduce for Container<L, C>
where
    L: ContainerLevel,
    C: Reduce,
    Self: Clone + Into<Structure>,
{
    fn reduce(&self) -> Structure {
        match self.members.as_slice() {
            [only] => only.reduce(),
            _ => self.clone().into(),
        }
    }
}

impl Reduce for Pattern {
    fn reduce(&self) -> Structure {
        let mut cells = self.cells();
        match (cells.next(), cells.next()) {
            (Some(only), None) => Structure::Cell(only),
            _ => Structure::Pattern(self.clone()),
        }
    }
}

impl Reduce for Cell {
    fn reduce(&self) -> Structure {
        Structure::Cell(*self)
    }
}

impl Pattern {
    /// Wrap this pattern as the only member of a group
    pub fn to_group(self) -> Group {
        let probability = self.probability();
        Group::new([self], probability)
    }
}
