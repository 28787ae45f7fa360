//! Query error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    /// Submission attempted before the session identifier was resolved.
    /// Recoverable: the input is kept and the user may retry once ready.
    #[error("session not initialized")]
    SessionNotInitialized,

    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Protocol(#[from] serde_json::Error),
}
