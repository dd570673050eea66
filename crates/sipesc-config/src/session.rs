//! Session store configuration.
//!
//! The session (`token` + `user`) lives in a key-value store. The server keeps
//! it in memory by default; the CLI persists it to a JSON file so it survives
//! between invocations, the way a browser keeps it in local storage.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Which key-value backend holds sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionBackend {
    Memory,
    File,
}

impl SessionBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(Self::Memory),
            "file" => Some(Self::File),
            _ => None,
        }
    }
}

/// # Environment Variables
///
/// - `SESSION_BACKEND`: `memory` or `file` (default: `memory`)
/// - `SESSION_FILE`: path of the JSON store (default: `storage/session.json`)
/// - `SESSION_NAMESPACE`: key prefix of the single-user session (default: `sipesc`)
/// - `SESSION_SWEEP_INTERVAL`: seconds between purges of expired sessions (default: 300)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub backend: SessionBackend,
    pub file_path: PathBuf,
    pub namespace: String,
    pub sweep_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            backend: SessionBackend::Memory,
            file_path: PathBuf::from("storage/session.json"),
            namespace: "sipesc".to_string(),
            sweep_interval: Duration::from_secs(300),
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend: env::var("SESSION_BACKEND")
                .ok()
                .and_then(|v| SessionBackend::parse(&v))
                .unwrap_or(defaults.backend),
            file_path: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.file_path),
            namespace: env::var("SESSION_NAMESPACE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.namespace),
            sweep_interval: env::var("SESSION_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.sweep_interval),
        }
    }

    /// Same configuration forced onto the file backend.
    #[must_use]
    pub fn with_file_backend(mut self) -> Self {
        self.backend = SessionBackend::File;
        self
    }
}
