//! Principal roles.
//!
//! Exactly one role per principal. Roles are mutually exclusive and are not
//! composed; every access rule matches on [`Role`] exhaustively so adding a
//! variant forces each rule to be revisited.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// School staff
    School,
    /// Guardianship-council staff
    Councilor,
    /// Public-prosecutor office staff
    Prosecutor,
    /// Administrator
    Admin,
    /// Teacher at a single school
    Teacher,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::School,
        Role::Councilor,
        Role::Prosecutor,
        Role::Admin,
        Role::Teacher,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::School => "school",
            Role::Councilor => "councilor",
            Role::Prosecutor => "prosecutor",
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "school" => Ok(Role::School),
            "councilor" => Ok(Role::Councilor),
            "prosecutor" => Ok(Role::Prosecutor),
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
