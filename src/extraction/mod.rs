//! Oracle-driven extraction with validation and bounded retries

/// Per-page working state
pub mod context;
/// Bounded retry state machine
pub mod controller;
/// Pattern descriptions forwarded to the oracle
pub mod description;
/// Oracle contract and the built-in segregation oracle
pub mod oracle;
/// Page-level extraction and hierarchy assembly
pub mod pipeline;

pub use context::PageContext;
pub use controller::{
    Attempt, ControllerState, ExtractionConfig, ExtractionRetryController, GiveUpReason, Outcome,
};
pub use description::PatternDescription;
pub use oracle::{Oracle, OracleError, SegregationOracle};
pub use pipeline::{GridDecomposition, PageOutcome, extract_page};
