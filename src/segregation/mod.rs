//! Decomposition of grids and patterns into disjoint parts

/// Color layers and the default decomposition
pub mod chromatic;
/// Flood-fill connected components
pub mod components;

pub use chromatic::{chromatic_segregation, decompose, decompose_foreground};
pub use components::ConnectedComponentSegregator;
