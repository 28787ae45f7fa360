//! Query controller
//!
//! Drives the submission lifecycle: holds the input text, enforces the
//! busy guard (one request in flight), and records the displayed
//! story/error pair. The session identifier is injected read-only by the
//! coordination layer; this controller never creates or mutates it.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::client::StoryClient;
use crate::error::QueryError;
use crate::state::QueryState;
use crate::types::{QueryRequest, QueryView};
use crate::Result;

struct ViewState {
    state: QueryState,
    input: String,
    story: Option<String>,
    error: Option<String>,
}

impl ViewState {
    /// Attempt to transition to a new state
    fn transition_to(&mut self, target: QueryState) -> Result<()> {
        if !self.state.can_transition_to(target) {
            return Err(QueryError::InvalidTransition {
                from: self.state.to_string(),
                to: target.to_string(),
            });
        }

        tracing::debug!(
            from = %self.state,
            to = %target,
            "Query state transition"
        );

        self.state = target;

        Ok(())
    }

    fn snapshot(&self) -> QueryView {
        QueryView {
            state: self.state,
            input: self.input.clone(),
            story: self.story.clone(),
            error: self.error.clone(),
        }
    }
}

pub struct QueryController {
    inner: Arc<RwLock<ViewState>>,
    /// Session identifier, written once by the coordination layer
    session_id: Arc<RwLock<Option<String>>>,
    client: StoryClient,
}

impl QueryController {
    pub fn new(client: StoryClient) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ViewState {
                state: QueryState::Idle,
                input: String::new(),
                story: None,
                error: None,
            })),
            session_id: Arc::new(RwLock::new(None)),
            client,
        }
    }

    /// Inject the resolved session identifier. Submissions are rejected
    /// until this has been called.
    pub fn attach_session(&self, session_id: String) {
        tracing::debug!(session_id = %session_id, "Attached session to controller");
        *self.session_id.write() = Some(session_id);
    }

    /// True once a session identifier is available
    pub fn is_ready(&self) -> bool {
        self.session_id.read().is_some()
    }

    pub fn input(&self) -> String {
        self.inner.read().input.clone()
    }

    pub fn set_input(&self, text: impl Into<String>) {
        self.inner.write().input = text.into();
    }

    pub fn state(&self) -> QueryState {
        self.inner.read().state
    }

    pub fn view(&self) -> QueryView {
        self.inner.read().snapshot()
    }

    /// Submit the current input.
    ///
    /// Entering `Submitting` clears the input (the user can type the next
    /// question while waiting) and the previous error; the previous story
    /// stays visible until the response replaces it or a new error lands
    /// beside it. While a request is in flight further submissions are
    /// no-ops. The lock is never held across the await point.
    pub async fn submit(&self) -> Result<QueryView> {
        let session_id = self.session_id.read().clone();

        let request = {
            let mut inner = self.inner.write();

            if inner.state.is_busy() {
                tracing::debug!("Submission ignored: a request is already in flight");
                return Ok(inner.snapshot());
            }

            let Some(session_id) = session_id else {
                // Rejected locally: no request, input kept for retry
                inner.transition_to(QueryState::Failed)?;
                inner.error = Some(QueryError::SessionNotInitialized.to_string());
                return Err(QueryError::SessionNotInitialized);
            };

            let text = inner.input.trim().to_string();
            if text.is_empty() {
                return Err(QueryError::EmptyQuery);
            }

            inner.transition_to(QueryState::Submitting)?;
            inner.input.clear();
            inner.error = None;

            QueryRequest {
                query: text,
                session_id,
            }
        };

        tracing::info!(session_id = %request.session_id, "Submitting query");

        match self.client.post_query(&request).await {
            Ok(story) => {
                let mut inner = self.inner.write();
                inner.transition_to(QueryState::Succeeded)?;
                inner.story = Some(story);
                inner.error = None;
                Ok(inner.snapshot())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Query failed");
                let mut inner = self.inner.write();
                inner.transition_to(QueryState::Failed)?;
                inner.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

impl Clone for QueryController {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            session_id: Arc::clone(&self.session_id),
            client: self.client.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn controller_for(uri: &str) -> QueryController {
        let endpoint = Url::parse(&format!("{}/story", uri)).unwrap();
        let client = StoryClient::new(endpoint, Some(Duration::from_secs(5))).unwrap();
        QueryController::new(client)
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "query": "Who was Augustus?",
                "sessionId": "session-1",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "story": "Augustus founded the Principate."
            })))
            .mount(&server)
            .await;

        let controller = controller_for(&server.uri());
        controller.attach_session("session-1".to_string());
        controller.set_input("Who was Augustus?");

        let view = controller.submit().await.unwrap();
        assert_eq!(view.state, QueryState::Succeeded);
        assert_eq!(view.story.as_deref(), Some("Augustus founded the Principate."));
        assert_eq!(view.error, None);
        assert!(view.input.is_empty());
    }

    #[tokio::test]
    async fn test_server_error_embeds_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let controller = controller_for(&server.uri());
        controller.attach_session("session-1".to_string());
        controller.set_input("any query");

        let err = controller.submit().await.unwrap_err();
        assert!(err.to_string().contains("500"));

        let view = controller.view();
        assert_eq!(view.state, QueryState::Failed);
        assert!(view.error.unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_transport_failure_embeds_cause() {
        // Nothing listens here; the connection is refused
        let controller = controller_for("http://127.0.0.1:9");
        controller.attach_session("session-1".to_string());
        controller.set_input("any query");

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, QueryError::Transport(_)));

        let view = controller.view();
        assert_eq!(view.state, QueryState::Failed);
        assert!(view.error.unwrap().contains("Network error"));
    }

    #[tokio::test]
    async fn test_malformed_payload_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tale": "wrong"})))
            .mount(&server)
            .await;

        let controller = controller_for(&server.uri());
        controller.attach_session("session-1".to_string());
        controller.set_input("any query");

        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, QueryError::Protocol(_)));
        assert_eq!(controller.state(), QueryState::Failed);
    }

    #[tokio::test]
    async fn test_submit_without_session_keeps_input() {
        let controller = controller_for("http://127.0.0.1:9");
        assert!(!controller.is_ready());

        controller.set_input("Who was Augustus?");
        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, QueryError::SessionNotInitialized));

        let view = controller.view();
        assert_eq!(view.state, QueryState::Failed);
        assert_eq!(view.error.as_deref(), Some("session not initialized"));
        // Input is preserved so the user can retry once ready
        assert_eq!(view.input, "Who was Augustus?");
    }

    #[test]
    fn test_state_writes_are_guarded() {
        let mut view = ViewState {
            state: QueryState::Idle,
            input: String::new(),
            story: None,
            error: None,
        };

        // Success only comes out of an in-flight request
        let err = view.transition_to(QueryState::Succeeded).unwrap_err();
        assert!(matches!(err, QueryError::InvalidTransition { .. }));
        assert_eq!(view.state, QueryState::Idle);

        view.transition_to(QueryState::Submitting).unwrap();
        view.transition_to(QueryState::Succeeded).unwrap();
        assert_eq!(view.state, QueryState::Succeeded);
    }

    #[tokio::test]
    async fn test_blank_input_without_session_reports_missing_session() {
        let controller = controller_for("http://127.0.0.1:9");

        controller.set_input("   ");
        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, QueryError::SessionNotInitialized));

        let view = controller.view();
        assert_eq!(view.state, QueryState::Failed);
        assert_eq!(view.error.as_deref(), Some("session not initialized"));
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected_without_transition() {
        let controller = controller_for("http://127.0.0.1:9");
        controller.attach_session("session-1".to_string());

        controller.set_input("   ");
        let err = controller.submit().await.unwrap_err();
        assert!(matches!(err, QueryError::EmptyQuery));
        assert_eq!(controller.state(), QueryState::Idle);
    }

    #[tokio::test]
    async fn test_submit_while_submitting_is_a_noop() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"story": "A slow story."}))
                    .set_delay(Duration::from_millis(250)),
            )
            .mount(&server)
            .await;

        let controller = controller_for(&server.uri());
        controller.attach_session("session-1".to_string());
        controller.set_input("first question");

        let in_flight = controller.clone();
        let handle = tokio::spawn(async move { in_flight.submit().await });

        // Wait until the first submission is in flight
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(controller.state(), QueryState::Submitting);

        // Second submission is ignored: state and typed input are untouched
        controller.set_input("next question");
        let view = controller.submit().await.unwrap();
        assert_eq!(view.state, QueryState::Submitting);
        assert_eq!(controller.input(), "next question");

        let view = handle.await.unwrap().unwrap();
        assert_eq!(view.state, QueryState::Succeeded);
        assert_eq!(view.story.as_deref(), Some("A slow story."));
    }

    #[tokio::test]
    async fn test_stale_story_remains_beside_fresh_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "story": "Augustus founded the Principate."
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let controller = controller_for(&server.uri());
        controller.attach_session("session-1".to_string());

        controller.set_input("Who was Augustus?");
        controller.submit().await.unwrap();

        controller.set_input("another question");
        controller.submit().await.unwrap_err();

        // The last successful story stays visible next to the new error
        let view = controller.view();
        assert_eq!(view.state, QueryState::Failed);
        assert_eq!(view.story.as_deref(), Some("Augustus founded the Principate."));
        assert!(view.error.unwrap().contains("500"));
    }

    #[tokio::test]
    async fn test_resubmission_clears_previous_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/story"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "story": "The Senate endured."
            })))
            .mount(&server)
            .await;

        let controller = controller_for(&server.uri());
        controller.attach_session("session-1".to_string());

        controller.set_input("first");
        controller.submit().await.unwrap_err();
        assert!(controller.view().error.is_some());

        controller.set_input("second");
        let view = controller.submit().await.unwrap();
        assert_eq!(view.state, QueryState::Succeeded);
        assert_eq!(view.error, None);
        assert_eq!(view.story.as_deref(), Some("The Senate endured."));
    }
}
