//! Main application state container
//!
//! Rust owns all state; the presentation shell is a stateless renderer
//! over `QueryView` snapshots.

use fabula_query::{QueryController, QueryView, StoryClient};
use fabula_session::{Session, SessionManager};
use fabula_storage::Database;

use crate::config::Config;
use crate::Result;

/// Main client instance
///
/// Wires the durable session identity into the query controller. The
/// session manager is the only writer of the identifier; the controller
/// receives it read-only during `initialize`.
pub struct App {
    config: Config,
    session_manager: SessionManager,
    controller: QueryController,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;

        let session_manager = SessionManager::new(db);
        let client = StoryClient::new(config.endpoint.clone(), config.request_timeout())?;
        let controller = QueryController::new(client);

        Ok(Self {
            config,
            session_manager,
            controller,
        })
    }

    /// Resolve the session identity and hand it to the controller.
    ///
    /// Until this succeeds the app is not ready and submissions are
    /// rejected with "session not initialized".
    pub fn initialize(&self) -> Result<Session> {
        let session = self.session_manager.get_or_create()?;
        self.controller.attach_session(session.id.clone());

        tracing::info!(
            session_id = %session.id,
            endpoint = %self.config.endpoint,
            "Initialized app"
        );

        Ok(session)
    }

    /// True once the session identifier is available
    pub fn is_ready(&self) -> bool {
        self.controller.is_ready()
    }

    /// Submit a query and wait for it to resolve
    pub async fn submit(&self, text: impl Into<String>) -> Result<QueryView> {
        self.controller.set_input(text);
        Ok(self.controller.submit().await?)
    }

    pub fn view(&self) -> QueryView {
        self.controller.view()
    }
}

impl Clone for App {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            session_manager: self.session_manager.clone(),
            controller: self.controller.clone(),
        }
    }
}
