//! # SIPESC Config
//!
//! Configuration types for the SIPESC API, loaded from environment variables:
//!
//! - [`jwt`]: Session token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`session`]: Session key-value store configuration
//! - [`routes`]: Navigation targets used by the guards
//! - [`server`]: Listener address
//!
//! # Example
//!
//! ```ignore
//! use sipesc_config::{JwtConfig, SessionConfig, RoutesConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let session_config = SessionConfig::from_env();
//! let routes = RoutesConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod routes;
pub mod server;
pub mod session;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use routes::RoutesConfig;
pub use server::ServerConfig;
pub use session::{SessionBackend, SessionConfig};
