//! Fabula Core
//!
//! Central coordination layer for the Fabula client: wires storage, the
//! durable session identity, and the query lifecycle together behind one
//! `App` handle for the presentation shell.

mod app;
mod config;
mod error;

pub use app::App;
pub use config::{Config, DEFAULT_ENDPOINT};
pub use error::CoreError;

// Re-export core components
pub use fabula_query::{QueryController, QueryError, QueryRequest, QueryState, QueryView, StoryClient};
pub use fabula_session::{Session, SessionError, SessionManager};
pub use fabula_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
