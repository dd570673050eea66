//! # SIPESC Store
//!
//! Key-value storage for persisted sessions.
//!
//! This crate provides:
//! - The [`KeyValueStore`] trait with in-memory and JSON-file backends
//! - Key naming for session namespaces
//! - [`SessionStore`], the read/write API over one session namespace
//!
//! # Example
//!
//! ```ignore
//! use sipesc_config::SessionConfig;
//! use sipesc_store::{SessionStore, build_store};
//!
//! let config = SessionConfig::from_env();
//! let store = build_store(&config);
//! let sessions = SessionStore::new(store, config.namespace.clone());
//!
//! match sessions.get_session().await? {
//!     Some(session) => println!("logged in as {}", session.user.email),
//!     None => println!("not logged in"),
//! }
//! ```

pub mod error;
pub mod file;
pub mod keys;
pub mod memory;
pub mod session;
pub mod store;

use std::sync::Arc;

use sipesc_config::{SessionBackend, SessionConfig};
use tracing::info;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use session::{SessionStore, purge_sessions, sessions_of_user};
pub use store::KeyValueStore;

/// Builds the backend selected by `config`.
pub fn build_store(config: &SessionConfig) -> Arc<dyn KeyValueStore> {
    match config.backend {
        SessionBackend::Memory => {
            info!("Initializing in-memory session store");
            Arc::new(MemoryStore::new())
        }
        SessionBackend::File => {
            info!(path = %config.file_path.display(), "Initializing file session store");
            Arc::new(FileStore::new(config.file_path.clone()))
        }
    }
}
