//! Wire types and the presentation snapshot

use serde::{Deserialize, Serialize};

use crate::state::QueryState;

/// Request body sent to the story endpoint.
///
/// Constructed transiently per submission; requires a resolved session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

/// Expected success payload. Anything else is a protocol failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryResponse {
    pub story: String,
}

/// Read-only snapshot of the controller for the presentation layer.
///
/// `story` and `error` are independent: a failed resubmission leaves the
/// previous story visible beside the fresh error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryView {
    pub state: QueryState,
    pub input: String,
    pub story: Option<String>,
    pub error: Option<String>,
}
