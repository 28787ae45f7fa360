//! Session Manager
//!
//! Owns the durable session identifier. The identifier is written to
//! storage exactly once, on first-ever run; every later run (and every
//! later call within a run) returns the same value.

use parking_lot::RwLock;
use std::sync::Arc;

use fabula_storage::Database;

use crate::session::Session;
use crate::Result;

/// Storage key under which the session identifier is persisted.
pub const SESSION_KEY: &str = "fabula.session_id";

pub struct SessionManager {
    /// In-memory cache of the resolved session
    current: Arc<RwLock<Option<Session>>>,
    /// Database for persistence
    db: Database,
}

impl SessionManager {
    pub fn new(db: Database) -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            db,
        }
    }

    /// Load the session identifier from storage, creating and persisting
    /// one if this is the first run. Idempotent: repeated calls return the
    /// same value for the lifetime of the storage entry.
    pub fn get_or_create(&self) -> Result<Session> {
        if let Some(session) = self.current.read().clone() {
            return Ok(session);
        }

        let session = match self.db.get_setting(SESSION_KEY)? {
            Some(id) => {
                let session = Session::from_id(id);
                tracing::debug!(session_id = %session.id, "Loaded existing session");
                session
            }
            None => {
                let session = Session::generate();
                self.db.set_setting(SESSION_KEY, &session.id)?;
                tracing::info!(session_id = %session.id, "Created new session");
                session
            }
        };

        *self.current.write() = Some(session.clone());

        Ok(session)
    }

    /// The cached session, if one has been resolved yet
    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }
}

impl Clone for SessionManager {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            db: self.db.clone(),
        }
    }
}
