//! Bounded retry loop between an oracle and the validator
//!
//! The controller is a small state machine. Each call to
//! [`ExtractionRetryController::step`] performs exactly one transition, so a
//! caller can stop between attempts; [`ExtractionRetryController::run`] drives it
//! to a terminal state.
//!
//! ```text
//! Requesting ──► Validating ──► Converged
//!     ▲              │
//!     └──────────────┤
//!                    └────────► GaveUp
//! ```

use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

use crate::extraction::description::PatternDescription;
use crate::extraction::oracle::Oracle;
use crate::io::configuration::DEFAULT_MAX_ATTEMPTS;
use crate::io::error::{GridsplitError, Result, invalid_parameter};
use crate::spatial::{Footprint, Grid, Pattern};
use crate::validation::{FailureReport, PatternValidator, Validation};

/// Position of the controller in its retry loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ControllerState {
    /// Waiting to ask the oracle for a proposal
    Requesting,
    /// Holding a proposal that has not been validated yet
    Validating,
    /// A proposal passed validation
    Converged,
    /// The controller stopped without a valid proposal
    GaveUp,
}

impl ControllerState {
    /// Check if no further transitions are possible
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Converged | Self::GaveUp)
    }
}

/// Why a controller stopped without converging
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GiveUpReason {
    /// The oracle returned the same invalid decomposition twice in a row
    RepeatedProposal,
    /// The attempt budget ran out
    AttemptsExhausted,
    /// The oracle reported an error
    OracleFailure(String),
}

impl fmt::Display for GiveUpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepeatedProposal => write!(f, "the oracle repeated an invalid proposal"),
            Self::AttemptsExhausted => write!(f, "the attempt budget was exhausted"),
            Self::OracleFailure(message) => write!(f, "the oracle failed: {message}"),
        }
    }
}

/// Retry loop parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Maximum number of oracle calls per decomposition
    pub max_attempts: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl ExtractionConfig {
    /// Check that the configuration allows at least one attempt
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &self.max_attempts,
                &"at least one attempt is required",
            ));
        }
        Ok(())
    }
}

/// One validated proposal
#[derive(Debug, Clone, PartialEq)]
pub struct Attempt {
    /// 1-based attempt number
    pub number: usize,
    /// The proposed decomposition
    pub patterns: Vec<Pattern>,
    /// Its validation result
    pub validation: Validation,
}

/// Terminal result of a retry loop
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A proposal passed validation
    Converged {
        /// The accepted decomposition
        patterns: Vec<Pattern>,
        /// Number of oracle calls made
        attempts: usize,
    },
    /// No proposal passed validation
    NonConverged {
        /// Why the controller stopped
        reason: GiveUpReason,
        /// Number of oracle calls made
        attempts: usize,
        /// Proposal with the fewest violations, earliest on ties
        best: Option<Attempt>,
        /// Every failure report produced, oldest first
        reports: Vec<FailureReport>,
    },
}

impl Outcome {
    /// Check if a valid decomposition was found
    pub const fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }

    /// Number of oracle calls made
    pub const fn attempts(&self) -> usize {
        match self {
            Self::Converged { attempts, .. } | Self::NonConverged { attempts, .. } => *attempts,
        }
    }

    /// Accepted decomposition, or the best-known one on non-convergence
    pub fn patterns(&self) -> Option<&[Pattern]> {
        match self {
            Self::Converged { patterns, .. } => Some(patterns),
            Self::NonConverged { best, .. } => best.as_ref().map(|attempt| attempt.patterns.as_slice()),
        }
    }

    /// Accepted decomposition
    ///
    /// # Errors
    ///
    /// Returns a non-convergence error if no proposal passed validation
    pub fn into_result(self) -> Result<Vec<Pattern>> {
        match self {
            Self::Converged { patterns, .. } => Ok(patterns),
            Self::NonConverged {
                reason, attempts, ..
            } => Err(GridsplitError::NonConvergence { reason, attempts }),
        }
    }
}

/// Drives one decomposition through request, validation, and retry
pub struct ExtractionRetryController<'a, O: Oracle + ?Sized> {
    grid: &'a Grid,
    description: &'a PatternDescription,
    oracle: &'a mut O,
    config: ExtractionConfig,
    state: ControllerState,
    attempts: usize,
    pending: Option<Vec<Pattern>>,
    previous: Option<Vec<Footprint>>,
    reports: Vec<FailureReport>,
    context: String,
    best: Option<Attempt>,
    accepted: Option<Vec<Pattern>>,
    reason: Option<GiveUpReason>,
}

impl<'a, O: Oracle + ?Sized> ExtractionRetryController<'a, O> {
    /// Create a controller in the `Requesting` state
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(
        grid: &'a Grid,
        description: &'a PatternDescription,
        oracle: &'a mut O,
        config: ExtractionConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid,
            description,
            oracle,
            config,
            state: ControllerState::Requesting,
            attempts: 0,
            pending: None,
            previous: None,
            reports: Vec::new(),
            context: String::new(),
            best: None,
            accepted: None,
            reason: None,
        })
    }

    /// Current state
    pub const fn state(&self) -> ControllerState {
        self.state
    }

    /// Number of oracle calls made so far
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Every failure report accumulated so far, oldest first
    pub fn reports(&self) -> &[FailureReport] {
        &self.reports
    }

    /// Perform one transition and return the new state
    ///
    /// Terminal states are left unchanged.
    pub fn step(&mut self) -> ControllerState {
        self.state = match self.state {
            ControllerState::Requesting => self.request(),
            ControllerState::Validating => self.validate_pending(),
            terminal @ (ControllerState::Converged | ControllerState::GaveUp) => terminal,
        };
        self.state
    }

    /// Step until a terminal state is reached
    pub fn run(mut self) -> Outcome {
        while !self.state.is_terminal() {
            self.step();
        }
        self.into_outcome()
    }

    /// Terminal result, or `None` while the loop is still running
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.is_terminal().then(|| self.clone_outcome())
    }

    fn request(&mut self) -> ControllerState {
        if self.attempts >= self.config.max_attempts {
            return self.give_up(GiveUpReason::AttemptsExhausted);
        }
        self.attempts += 1;
        let prior = (!self.context.is_empty()).then_some(self.context.as_str());

        debug!(
            description = %self.description.name,
            attempt = self.attempts,
            with_feedback = prior.is_some(),
            "requesting proposal"
        );
        match self.oracle.propose(self.grid, self.description, prior) {
            Ok(patterns) => {
                self.pending = Some(patterns);
                ControllerState::Validating
            }
            Err(error) => self.give_up(GiveUpReason::OracleFailure(error.message().to_string())),
        }
    }

    fn validate_pending(&mut self) -> ControllerState {
        let Some(patterns) = self.pending.take() else {
            return ControllerState::Requesting;
        };
        let validation = PatternValidator::new(self.grid).validate(&patterns);

        if validation.is_pass() {
            info!(
                description = %self.description.name,
                attempt = self.attempts,
                patterns = patterns.len(),
                "decomposition converged"
            );
            self.accepted = Some(patterns);
            return ControllerState::Converged;
        }

        let footprints = sorted_footprints(&patterns);
        let repeated = self.previous.as_ref() == Some(&footprints);
        self.previous = Some(footprints);

        for report in &validation.reports {
            self.context.push_str(&format!(
                "Attempt {}, {}:\n{}\n\n",
                self.attempts, report.kind, report.text
            ));
        }
        self.reports.extend(validation.reports.iter().cloned());

        debug!(
            description = %self.description.name,
            attempt = self.attempts,
            violations = validation.violation_count(),
            failed_checks = validation.reports.len(),
            repeated,
            "proposal rejected"
        );

        let attempt = Attempt {
            number: self.attempts,
            patterns,
            validation,
        };
        let improves = self.best.as_ref().is_none_or(|best| {
            attempt.validation.violation_count() < best.validation.violation_count()
        });
        if improves {
            self.best = Some(attempt);
        }

        if repeated {
            self.give_up(GiveUpReason::RepeatedProposal)
        } else if self.attempts >= self.config.max_attempts {
            self.give_up(GiveUpReason::AttemptsExhausted)
        } else {
            ControllerState::Requesting
        }
    }

    fn give_up(&mut self, reason: GiveUpReason) -> ControllerState {
        warn!(
            description = %self.description.name,
            attempts = self.attempts,
            best_violations = self.best.as_ref().map(|best| best.validation.violation_count()),
            "giving up: {reason}"
        );
        self.reason = Some(reason);
        ControllerState::GaveUp
    }

    fn clone_outcome(&self) -> Outcome {
        match &self.accepted {
            Some(patterns) => Outcome::Converged {
                patterns: patterns.clone(),
                attempts: self.attempts,
            },
            None => Outcome::NonConverged {
                reason: self
                    .reason
                    .clone()
                    .unwrap_or(GiveUpReason::AttemptsExhausted),
                attempts: self.attempts,
                best: self.best.clone(),
                reports: self.reports.clone(),
            },
        }
    }

    fn into_outcome(self) -> Outcome {
        match self.accepted {
            Some(patterns) => Outcome::Converged {
                patterns,
                attempts: self.attempts,
            },
            None => Outcome::NonConverged {
                reason: self.reason.unwrap_or(GiveUpReason::AttemptsExhausted),
                attempts: self.attempts,
                best: self.best,
                reports: self.reports,
            },
        }
    }
}

impl<O: Oracle + ?Sized> fmt::Debug for ExtractionRetryController<'_, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionRetryController")
            .field("description", &self.description.name)
            .field("state", &self.state)
            .field("attempts", &self.attempts)
            .field("max_attempts", &self.config.max_attempts)
            .finish_non_exhaustive()
    }
}

// Order-independent identity of a whole decomposition
fn sorted_footprints(patterns: &[Pattern]) -> Vec<Footprint> {
    let mut footprints: Vec<Footprint> = patterns.iter().map(Pattern::footprint).collect();
    footprints.sort();
    footprints
}
