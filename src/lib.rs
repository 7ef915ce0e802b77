//! Decomposition of colored puzzle grids into validated, non-overlapping patterns
//!
//! Grids are split into sparse patterns, either by the built-in chromatic and
//! connected-component segregation or by an external oracle. Candidate
//! decompositions are checked for dimension fidelity, value fidelity, overlap,
//! and coverage, and rejected proposals are retried with accumulated feedback
//! until they converge or the controller gives up. Accepted decompositions are
//! assembled into a Cell → Pattern → Group → SuperGroup → Constellation hierarchy.

#![forbid(unsafe_code)]

/// Oracle-driven extraction with validation and bounded retries
pub mod extraction;
/// Spatial hierarchy containers with promotion and reduction
pub mod hierarchy;
/// Input/output operations and error handling
pub mod io;
/// Chromatic and connected-component segregation
pub mod segregation;
/// Cells, grids, patterns, and the output canvas
pub mod spatial;
/// Typed transforms and neighbor rules
pub mod transform;
/// Validation of candidate decompositions
pub mod validation;

pub use io::error::{GridsplitError, Result};
