//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] fabula_storage::StorageError),

    #[error("Session error: {0}")]
    Session(#[from] fabula_session::SessionError),

    #[error("Query error: {0}")]
    Query(#[from] fabula_query::QueryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
