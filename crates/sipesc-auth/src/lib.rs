//! # SIPESC Auth
//!
//! Authentication and authorization building blocks for the SIPESC API.
//!
//! - [`claims`]: Session token claim structure
//! - [`jwt`]: Token creation and verification
//! - [`access`]: The access evaluator, pure functions over an optional principal
//! - [`guard`]: Guard policies and the per-mount decision state machine
//!
//! # Example
//!
//! ```ignore
//! use sipesc_auth::access;
//! use sipesc_models::{Module, SchoolId};
//!
//! let principal = session.as_ref().map(|s| &s.user);
//! if access::can_access_school(principal, &SchoolId::new("esc-001")) {
//!     // show the school
//! }
//! if !access::is_module_enabled(principal, Module::BiPanel) {
//!     // hide the BI menu entry
//! }
//! ```

pub mod access;
pub mod claims;
pub mod guard;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use guard::{GuardCycle, GuardPolicy, GuardState, Render, SessionView};
pub use jwt::{
    create_session_token, is_session_live, issue_session, new_session_id, verify_token,
};
