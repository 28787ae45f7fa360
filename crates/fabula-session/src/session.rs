//! Session data structure

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique identifier, opaque to consumers
    pub id: String,
}

impl Session {
    /// Generate a fresh session with a random identifier
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }

    /// Wrap an identifier loaded from storage
    pub fn from_id(id: String) -> Self {
        Self { id }
    }
}
