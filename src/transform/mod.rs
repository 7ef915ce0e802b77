//! Typed transforms over the spatial hierarchy

/// Cell expansions used as connectivity rules
pub mod neighbors;
/// Level-preserving pattern transformations
pub mod trim;
/// Generic transform wrapper and capability tags
pub mod typed;

pub use neighbors::{NeighborRule, Neighborhood, bounded, cross_neighbors, eight_neighbors};
pub use trim::trim_to_bounds;
pub use typed::{Tag, Tagged, Transform, TransformKind};
