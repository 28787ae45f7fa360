//! Fabula Session Management
//!
//! A session is a durable, per-installation identity:
//! - Created exactly once, on first run, and persisted to storage
//! - Loaded unchanged on every subsequent run
//! - Read-only to every component except the manager
//!
//! The identifier travels with each query so the remote service can
//! associate requests with the same client.

mod error;
mod manager;
mod session;

pub use error::SessionError;
pub use manager::SessionManager;
pub use session::Session;

pub type Result<T> = std::result::Result<T, SessionError>;
