//! Typed transforms between hierarchy levels
//!
//! A single generic wrapper covers every input/output pairing. The capability of a
//! transform (expansion, contraction, transformation, extraction) is derived from
//! the level tags of its input and output types rather than declared per wrapper.

use std::fmt;

use crate::hierarchy::container::{Constellation, Group, SuperGroup};
use crate::hierarchy::level::Level;
use crate::spatial::{Cell, Grid, Pattern};

/// Where a transform input or output sits in the hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// A complete grid
    Grid,
    /// One structure at a level
    Single(Level),
    /// A collection of structures at a level
    Many(Level),
}

/// Types that can be the input or output of a transform
pub trait Tagged {
    /// Capability tag of the type
    const TAG: Tag;
}

impl Tagged for Grid {
    const TAG: Tag = Tag::Grid;
}

impl Tagged for Cell {
    const TAG: Tag = Tag::Single(Level::Cell);
}

impl Tagged for Pattern {
    const TAG: Tag = Tag::Single(Level::Pattern);
}

impl Tagged for Group {
    const TAG: Tag = Tag::Single(Level::Group);
}

impl Tagged for SuperGroup {
    const TAG: Tag = Tag::Single(Level::SuperGroup);
}

impl Tagged for Constellation {
    const TAG: Tag = Tag::Single(Level::Constellation);
}

impl<T: Tagged> Tagged for Vec<T> {
    const TAG: Tag = match T::TAG {
        Tag::Grid => Tag::Many(Level::Pattern),
        Tag::Single(level) | Tag::Many(level) => Tag::Many(level),
    };
}

/// What a transform does to the granularity of its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    /// Produces a higher-level structure (cell → pattern)
    Expansion,
    /// Produces a lower-level structure (group → pattern)
    Contraction,
    /// Keeps the level (pattern → pattern)
    Transformation,
    /// Splits a grid or structure into many parts
    Extraction,
}

impl TransformKind {
    /// Derive the kind from input and output tags
    pub fn between(input: Tag, output: Tag) -> Self {
        match (input, output) {
            (Tag::Grid, _) | (Tag::Single(_), Tag::Many(_)) => Self::Extraction,
            _ => match tag_level(input).cmp(&tag_level(output)) {
                std::cmp::Ordering::Less => Self::Expansion,
                std::cmp::Ordering::Greater => Self::Contraction,
                std::cmp::Ordering::Equal => Self::Transformation,
            },
        }
    }
}

// A collection counts as one level above its members; a grid is a full pattern
const fn tag_level(tag: Tag) -> Level {
    match tag {
        Tag::Grid => Level::Pattern,
        Tag::Single(level) => level,
        Tag::Many(level) => level.higher(),
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expansion => write!(f, "expansion"),
            Self::Contraction => write!(f, "contraction"),
            Self::Transformation => write!(f, "transformation"),
            Self::Extraction => write!(f, "extraction"),
        }
    }
}

type Method<I, O> = Box<dyn Fn(&I) -> O + Send + Sync>;

/// A described function from `I` to `O`
pub struct Transform<I, O> {
    method: Method<I, O>,
    description: String,
}

impl<I: Tagged, O: Tagged> Transform<I, O> {
    /// Wrap a function with a description
    ///
    /// Parameters are captured by the closure.
    pub fn new(
        description: impl Into<String>,
        method: impl Fn(&I) -> O + Send + Sync + 'static,
    ) -> Self {
        Self {
            method: Box::new(method),
            description: description.into(),
        }
    }

    /// Capability derived from the input and output levels
    pub fn kind(&self) -> TransformKind {
        TransformKind::between(I::TAG, O::TAG)
    }

    /// Human-readable description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Run the transform
    pub fn apply(&self, input: &I) -> O {
        (self.method)(input)
    }
}

impl<I: Tagged, O: Tagged> fmt::Debug for Transform<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("kind", &self.kind())
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
