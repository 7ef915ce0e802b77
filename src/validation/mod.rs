//! Validation of candidate decompositions against a reference grid

/// Dimension, fidelity, overlap, and coverage checks
pub mod checks;
/// Failure kinds and rendered reports
pub mod report;
/// The validator and its aggregated result
pub mod validator;

pub use checks::{CellMismatch, DimensionFinding, FidelityCategory, FidelityFinding, Overlap};
pub use report::{FailureKind, FailureReport};
pub use validator::{Findings, PatternValidator, Validation};
