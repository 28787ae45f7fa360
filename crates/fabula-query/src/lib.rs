//! Fabula Query Lifecycle
//!
//! Owns the request/response/error state machine behind the ask-a-question
//! UI:
//! - `QueryState`: idle -> submitting -> succeeded | failed
//! - `StoryClient`: one HTTP POST per submission to the story endpoint
//! - `QueryController`: input text, busy guard, and the displayed
//!   story/error pair

mod client;
mod controller;
mod error;
mod state;
mod types;

pub use client::StoryClient;
pub use controller::QueryController;
pub use error::QueryError;
pub use state::QueryState;
pub use types::{QueryRequest, QueryView, StoryResponse};

pub type Result<T> = std::result::Result<T, QueryError>;
