//! Submission lifecycle shared by both forms

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Identifies one submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttemptId(Uuid);

impl AttemptId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AttemptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of the current submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight(AttemptId),
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight(_))
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Why a submit trigger did not start a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("form has validation errors")]
    Invalid,
    #[error("a submission is already in flight")]
    InFlight,
}

/// Owns the state machine for one form instance
#[derive(Debug, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Start a new attempt. Refused while another attempt is in flight.
    pub fn begin(&mut self) -> Result<AttemptId, SubmitBlocked> {
        if let SubmissionState::InFlight(current) = self.state {
            tracing::debug!("Ignoring submit while attempt {current} is in flight");
            return Err(SubmitBlocked::InFlight);
        }
        let attempt = AttemptId::new();
        self.state = SubmissionState::InFlight(attempt);
        Ok(attempt)
    }

    /// Settle the in-flight attempt as succeeded. Returns false for stale attempts.
    pub fn succeed(&mut self, attempt: AttemptId) -> bool {
        if !self.owns(attempt) {
            return false;
        }
        self.state = SubmissionState::Succeeded;
        true
    }

    /// Settle the in-flight attempt as failed. Returns false for stale attempts.
    pub fn fail(&mut self, attempt: AttemptId, reason: impl Into<String>) -> bool {
        if !self.owns(attempt) {
            return false;
        }
        self.state = SubmissionState::Failed(reason.into());
        true
    }

    fn owns(&self, attempt: AttemptId) -> bool {
        match self.state {
            SubmissionState::InFlight(current) if current == attempt => true,
            _ => {
                tracing::debug!("Discarding outcome of stale attempt {attempt}");
                false
            }
        }
    }
}
