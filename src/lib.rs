//! # SIPESC API
//!
//! An HTTP API built with Rust and Axum over the SIPESC access model: a
//! school protection network in which schools, teachers, guardianship
//! councils, prosecutors and administrators see different slices of the
//! same records.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── directory.rs      # Demo accounts, mutable module grants
//! ├── middleware/       # Auth extractor and route guards
//! ├── modules/          # Feature modules
//! │   ├── auth/         # Login, logout, current session
//! │   ├── dashboard/    # Landing summary
//! │   ├── schools/      # Schools in scope
//! │   ├── councils/     # Councils and regions
//! │   ├── students/     # Students in scope
//! │   ├── incidents/    # Incident log
//! │   ├── referrals/    # Protection network referrals
//! │   ├── alerts/       # Early-warning alerts
//! │   ├── bi/           # Aggregated indicators
//! │   └── admin/        # Module administration
//! └── ...
//! ```
//!
//! Each feature module has a `controller.rs` (handlers), `service.rs`
//! (business logic) and `router.rs`, plus a `model.rs` where it owns types
//! that do not belong in `sipesc-models`.
//!
//! ## Access model
//!
//! | Role | Scope |
//! |------|-------|
//! | `admin` | Everything; manages module grants |
//! | `prosecutor` | Everything |
//! | `school` | Its own school |
//! | `teacher` | Its own school |
//! | `councilor` | Its council, region and scoped schools |
//!
//! Decisions come from [`sipesc_auth::access`]; guards wrap routers through
//! [`middleware::guard`].
//!
//! ## Sessions
//!
//! A login stores the bearer token and the principal under
//! `session:{sid}` in the configured [`sipesc_store::KeyValueStore`]. Logging
//! out removes both keys, so the token stops working before it expires.
//!
//! ## API Documentation
//!
//! When the server is running, Scalar is served at `http://localhost:3000/scalar`.

pub mod directory;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use sipesc_auth;
pub use sipesc_config;
pub use sipesc_core;
pub use sipesc_models;
pub use sipesc_store;
