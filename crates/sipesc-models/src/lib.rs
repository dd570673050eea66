//! # SIPESC Models
//!
//! Domain models and DTOs for the SIPESC API.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed opaque string identifiers
//! - [`roles`]: The closed set of principal roles
//! - [`modules`]: The closed set of application modules
//! - [`users`]: The principal and its scoping
//! - [`auth`]: Login DTOs and the persisted session record
//! - [`schools`], [`students`], [`incidents`], [`referrals`]: Domain entities
//! - [`directory`]: Demo accounts accepted at login
//! - [`mock`]: Static records served by the API
//!
//! # Example
//!
//! ```ignore
//! use sipesc_models::{Module, Role, directory};
//!
//! let principal = directory::find_by_email("conselho@sipesc.gov.br").unwrap();
//! assert_eq!(principal.role, Role::Councilor);
//! assert!(principal.enabled_modules.contains(&Module::Referrals));
//! ```

pub mod auth;
pub mod directory;
pub mod ids;
pub mod incidents;
pub mod mock;
pub mod modules;
pub mod referrals;
pub mod roles;
pub mod schools;
pub mod students;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{
    AccessSnapshot, LoginRequest, LoginResponse, MessageResponse, Session, UpdateModulesDto,
};
pub use ids::{CouncilId, IncidentId, ReferralId, RegionId, SchoolId, StudentId, UserId};
pub use incidents::{CreateIncidentDto, Incident, IncidentSeverity};
pub use modules::Module;
pub use referrals::{Referral, ReferralStatus};
pub use roles::Role;
pub use schools::{Council, Region, RegionOverview, School};
pub use students::{Student, StudentFilterParams};
pub use users::{Principal, Scoping};
