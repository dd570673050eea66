//! Principal (authenticated user) model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::{CouncilId, RegionId, SchoolId, UserId};
use crate::modules::{Module, deserialize_known_modules};
use crate::roles::Role;

/// Sets of ids a principal may see beyond its own single-valued associations.
///
/// An absent or empty set grants nothing. The `"all"` wildcard grants every id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Scoping {
    #[serde(default)]
    pub schools: Vec<SchoolId>,
    #[serde(default)]
    pub regions: Vec<RegionId>,
    #[serde(default)]
    pub councils: Vec<CouncilId>,
}

impl Scoping {
    /// Scoping that covers every school, region and council.
    pub fn global() -> Self {
        Self {
            schools: vec![SchoolId::wildcard()],
            regions: vec![RegionId::wildcard()],
            councils: vec![CouncilId::wildcard()],
        }
    }

    pub fn includes_school(&self, id: &SchoolId) -> bool {
        self.schools.iter().any(|s| s.is_wildcard() || s == id)
    }
}

/// The authenticated actor for whom access decisions are made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Principal {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Own school for `school` and `teacher` principals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_id: Option<SchoolId>,
    /// Own council for `councilor` principals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub council_id: Option<CouncilId>,
    /// Own region for `councilor` principals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<RegionId>,
    #[serde(default)]
    pub scoping: Scoping,
    /// Ignored for `admin` and `prosecutor`
    #[serde(default, deserialize_with = "deserialize_known_modules")]
    pub enabled_modules: Vec<Module>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Principal {
    /// Copy of this principal with its module list replaced.
    pub fn with_modules(&self, modules: Vec<Module>) -> Self {
        let mut modules = modules;
        modules.sort();
        modules.dedup();
        Self {
            enabled_modules: modules,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_principal_deserializes_with_empty_grants() {
        let json = r#"{"id":"u-1","name":"Ana","email":"ana@x.br","role":"school"}"#;
        let principal: Principal = serde_json::from_str(json).unwrap();
        assert_eq!(principal.role, Role::School);
        assert!(principal.enabled_modules.is_empty());
        assert!(principal.permissions.is_empty());
        assert_eq!(principal.scoping, Scoping::default());
        assert!(principal.school_id.is_none());
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let json = r#"{"id":"u-1","name":"Ana","email":"ana@x.br","role":"root"}"#;
        assert!(serde_json::from_str::<Principal>(json).is_err());
    }

    #[test]
    fn test_scoping_wildcard() {
        let scoping = Scoping::global();
        assert!(scoping.includes_school(&SchoolId::new("esc-999")));
        assert!(scoping.regions.iter().all(RegionId::is_wildcard));
        assert!(scoping.councils.iter().all(CouncilId::is_wildcard));
    }

    #[test]
    fn test_scoping_membership() {
        let scoping = Scoping {
            schools: vec![SchoolId::new("esc-001")],
            ..Scoping::default()
        };
        assert!(scoping.includes_school(&SchoolId::new("esc-001")));
        assert!(!scoping.includes_school(&SchoolId::new("esc-002")));
        assert!(scoping.regions.is_empty());
    }

    #[test]
    fn test_with_modules_replaces_and_dedups() {
        let json = r#"{"id":"u-1","name":"Ana","email":"ana@x.br","role":"teacher","enabled_modules":["students"]}"#;
        let principal: Principal = serde_json::from_str(json).unwrap();
        let updated =
            principal.with_modules(vec![Module::Alerts, Module::Dashboard, Module::Alerts]);
        assert_eq!(updated.enabled_modules, vec![Module::Dashboard, Module::Alerts]);
        assert_eq!(principal.enabled_modules, vec![Module::Students]);
        assert_eq!(updated.id, principal.id);
    }
}
