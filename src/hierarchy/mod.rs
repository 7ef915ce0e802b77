//! Spatial hierarchy: Cell → Pattern → Group → SuperGroup → Constellation

/// Page hierarchy assembly from accepted decompositions
pub mod assembly;
/// Generic containers with promotion and reduction
pub mod container;
/// Hierarchy levels and level markers
pub mod level;
/// Level-tagged structure
pub mod structure;

pub use container::{Constellation, Container, Group, Reduce, SuperGroup};
pub use level::Level;
pub use structure::Structure;
