//! Strongly-typed ID newtypes for domain entities.
//!
//! Identifiers in SIPESC are opaque strings (`"esc-001"`, `"ct-001"`,
//! `"reg-norte"`). Wrapping each kind in its own newtype prevents passing a
//! `CouncilId` where a `SchoolId` is expected, while the JSON shape stays a
//! plain string.
//!
//! # Example
//!
//! ```ignore
//! use sipesc_models::ids::{SchoolId, CouncilId};
//!
//! fn get_school(id: &SchoolId) { /* ... */ }
//!
//! let school_id = SchoolId::new("esc-001");
//! get_school(&school_id);                    // OK
//! // get_school(&CouncilId::new("ct-001"));  // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Scoping value that stands for "every id".
pub const WILDCARD: &str = "all";

/// Macro to define a strongly-typed string ID newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
        #[serde(transparent)]
        #[schema(value_type = String)]
        pub struct $name(pub String);

        impl $name {
            /// Create an ID from any string-like value.
            #[inline]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The wildcard ID used in scoping sets.
            #[inline]
            pub fn wildcard() -> Self {
                Self(WILDCARD.to_string())
            }

            /// Borrow the inner string.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this ID is the `"all"` wildcard.
            #[inline]
            pub fn is_wildcard(&self) -> bool {
                self.0 == WILDCARD
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Principal (user account) identifier.
    UserId
);

define_id!(
    /// School identifier.
    SchoolId
);

define_id!(
    /// Guardianship council identifier.
    CouncilId
);

define_id!(
    /// Region identifier.
    RegionId
);

define_id!(
    /// Student identifier.
    StudentId
);

define_id!(
    /// Incident identifier.
    IncidentId
);

define_id!(
    /// Referral identifier.
    ReferralId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SchoolId::new("esc-001");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""esc-001""#);
        let back: SchoolId = serde_json::from_str(r#""esc-001""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_wildcard() {
        assert!(SchoolId::wildcard().is_wildcard());
        assert!(CouncilId::new("all").is_wildcard());
        assert!(!RegionId::new("reg-norte").is_wildcard());
    }

    #[test]
    fn test_debug_includes_type_name() {
        let id = CouncilId::new("ct-001");
        assert_eq!(format!("{:?}", id), "CouncilId(ct-001)");
        assert_eq!(id.to_string(), "ct-001");
    }
}
