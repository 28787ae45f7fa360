//! HTTP client for the story endpoint

use std::time::Duration;

use url::Url;

use crate::error::QueryError;
use crate::types::{QueryRequest, StoryResponse};
use crate::Result;

/// Thin wrapper around one configured endpoint.
///
/// Issues a single JSON POST per query and resolves exactly once with
/// either the story text or a classified failure.
#[derive(Debug, Clone)]
pub struct StoryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl StoryClient {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    /// POST the query and parse the `{"story": ...}` payload.
    ///
    /// Non-2xx statuses and malformed payloads are failures; no retry.
    pub async fn post_query(&self, request: &QueryRequest) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, "Sending query");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: StoryResponse = serde_json::from_slice(&body)?;

        Ok(parsed.story)
    }
}
