//! Fabula Storage Layer
//!
//! SQLite-based persistence for client state. The app stores very little:
//! a versioned schema and a `settings` key-value table that holds the
//! durable session identifier.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
