//! The request/response contract with the external pattern generator

use std::fmt;

use crate::extraction::description::PatternDescription;
use crate::segregation::{
    ConnectedComponentSegregator, chromatic_segregation, decompose, decompose_foreground,
};
use crate::spatial::{Color, Grid, Pattern};

/// Failure reported by an oracle instead of a proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleError {
    message: String,
}

impl OracleError {
    /// Create an oracle error with a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Message supplied by the oracle
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for OracleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oracle failed: {}", self.message)
    }
}

impl std::error::Error for OracleError {}

/// Proposes candidate decompositions for a grid
///
/// Implementations may be unreliable: they can return invalid proposals, repeat
/// themselves, or fail outright. `prior_failures` is `None` on the first request
/// and otherwise holds every failure report accumulated so far.
pub trait Oracle {
    /// Propose a decomposition of `grid` matching `description`
    ///
    /// # Errors
    ///
    /// Returns an error if no proposal could be produced
    fn propose(
        &mut self,
        grid: &Grid,
        description: &PatternDescription,
        prior_failures: Option<&str>,
    ) -> Result<Vec<Pattern>, OracleError>;
}

impl<F> Oracle for F
where
    F: FnMut(&Grid, &PatternDescription, Option<&str>) -> Result<Vec<Pattern>, OracleError>,
{
    fn propose(
        &mut self,
        grid: &Grid,
        description: &PatternDescription,
        prior_failures: Option<&str>,
    ) -> Result<Vec<Pattern>, OracleError> {
        self(grid, description, prior_failures)
    }
}

/// Deterministic oracle proposing same-color connected regions
///
/// Ignores the description and any feedback, so its first proposal is always
/// valid. Patterns are labelled `<description> #<n> (color <c>)`. With a
/// background color set, that color is not split into regions; its cells are
/// proposed as one trailing pattern labelled `<description> background`.
#[derive(Debug, Default)]
pub struct SegregationOracle {
    segregator: ConnectedComponentSegregator,
    background: Option<Color>,
}

impl SegregationOracle {
    /// Create an oracle using `segregator` for the connected-component stage
    pub const fn new(segregator: ConnectedComponentSegregator) -> Self {
        Self {
            segregator,
            background: None,
        }
    }

    /// Treat `background` as unsegmented background, or split every color when `None`
    #[must_use]
    pub const fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Background color left unsplit, if any
    pub const fn background(&self) -> Option<Color> {
        self.background
    }
}

impl Oracle for SegregationOracle {
    fn propose(
        &mut self,
        grid: &Grid,
        description: &PatternDescription,
        _prior_failures: Option<&str>,
    ) -> Result<Vec<Pattern>, OracleError> {
        let Some(background) = self.background else {
            return Ok(label_regions(decompose(grid, &self.segregator), description));
        };

        let mut patterns =
            label_regions(decompose_foreground(grid, &self.segregator, background), description);
        patterns.extend(
            chromatic_segregation(grid, Some(background))
                .into_iter()
                .filter(|layer| !layer.is_empty())
                .map(|layer| layer.with_label(format!("{} background", description.name))),
        );
        Ok(patterns)
    }
}

fn label_regions(regions: Vec<Pattern>, description: &PatternDescription) -> Vec<Pattern> {
    regions
        .into_iter()
        .enumerate()
        .map(|(index, pattern)| {
            let color = pattern
                .colors()
                .into_iter()
                .next()
                .map_or_else(String::new, |color| format!(" (color {color})"));
            pattern.with_label(format!("{} #{index}{color}", description.name))
        })
        .collect()
}
