//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Endpoint used when none is configured; matches the default local
/// story backend.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5001/story";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Story service endpoint (single fixed URL, POSTed to per query)
    pub endpoint: Url,
    /// Per-request timeout in seconds; None waits indefinitely
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    pub fn new(data_dir: PathBuf, endpoint: Url) -> Self {
        Self {
            database_path: data_dir.join("fabula.db"),
            endpoint,
            request_timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Fabula"))
            .unwrap_or_else(|| PathBuf::from(".fabula"))
    }
}

impl Default for Config {
    fn default() -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL");
        Self::new(Self::data_dir(), endpoint)
    }
}

// Simple dirs implementation for the platform data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
