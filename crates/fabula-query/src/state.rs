//! Query State Machine
//!
//! ```text
//! Idle
//!   | submit
//! Submitting
//!   | response ok          | response err
//! Succeeded                Failed
//!   | submit                 | submit
//! Submitting               Submitting
//! ```
//!
//! A local precondition failure (no session yet) moves any non-busy state
//! straight to Failed without issuing a request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryState {
    /// No submission has happened yet
    Idle,
    /// A request is in flight; further submissions are rejected
    Submitting,
    /// The last submission produced a story
    Succeeded,
    /// The last submission failed; the message is displayed
    Failed,
}

impl QueryState {
    /// Check if transition to another state is valid
    pub fn can_transition_to(&self, target: QueryState) -> bool {
        match (self, target) {
            // A new submission is allowed from any settled state
            (QueryState::Idle, QueryState::Submitting) => true,
            (QueryState::Succeeded, QueryState::Submitting) => true,
            (QueryState::Failed, QueryState::Submitting) => true,
            // The in-flight request resolves exactly once
            (QueryState::Submitting, QueryState::Succeeded) => true,
            (QueryState::Submitting, QueryState::Failed) => true,
            // Local rejection (session missing) fails without submitting
            (QueryState::Idle, QueryState::Failed) => true,
            (QueryState::Succeeded, QueryState::Failed) => true,
            // Same state is always valid (no-op)
            (a, b) if *a == b => true,
            // All other transitions are invalid
            _ => false,
        }
    }

    /// Returns true while a request is outstanding
    pub fn is_busy(&self) -> bool {
        matches!(self, QueryState::Submitting)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryState::Idle => "idle",
            QueryState::Submitting => "submitting",
            QueryState::Succeeded => "succeeded",
            QueryState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for QueryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
