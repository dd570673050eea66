//! # SIPESC Core
//!
//! Core types, errors, and utilities shared by every SIPESC crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`permissions`]: Permission string constants in `module:action` form
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use sipesc_core::errors::AppError;
//! use sipesc_core::permissions;
//!
//! let error = AppError::forbidden("Access denied");
//! let perm = permissions::permission("incidents", "create");
//! assert_eq!(perm, permissions::INCIDENTS_CREATE);
//! ```

pub mod errors;
pub mod permissions;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
