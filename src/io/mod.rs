/// Command-line interface and batch page processing
pub mod cli;
/// Extraction constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// JSON run reports
pub mod export;
/// PNG rendering
pub mod image;
/// Progress display
pub mod progress;
/// Puzzle page and description loading
pub mod puzzle;
