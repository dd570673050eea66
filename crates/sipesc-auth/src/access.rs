//! The access evaluator.
//!
//! Every function here is pure and total over an optional principal: no
//! principal means denial, and nothing panics or allocates state. `admin` and
//! `prosecutor` short-circuit every check before module lists, permission
//! lists or scoping are consulted. For everyone else an empty or missing
//! collection grants nothing.
//!
//! # Example
//!
//! ```ignore
//! use sipesc_auth::access;
//!
//! let principal = session.as_ref().map(|s| &s.user);
//! let visible: Vec<_> = schools
//!     .into_iter()
//!     .filter(|s| access::can_access_school(principal, &s.id))
//!     .collect();
//! ```

use std::collections::BTreeMap;

use sipesc_models::{AccessSnapshot, CouncilId, Module, Principal, RegionId, Role, SchoolId};

/// Whether `role` bypasses every module, permission and scoping check.
pub fn role_has_full_access(role: Role) -> bool {
    match role {
        Role::Admin | Role::Prosecutor => true,
        Role::School | Role::Councilor | Role::Teacher => false,
    }
}

pub fn has_full_access(principal: Option<&Principal>) -> bool {
    principal.is_some_and(|p| role_has_full_access(p.role))
}

pub fn is_admin(principal: Option<&Principal>) -> bool {
    principal.is_some_and(|p| p.role == Role::Admin)
}

pub fn is_module_enabled(principal: Option<&Principal>, module: Module) -> bool {
    let Some(p) = principal else {
        return false;
    };
    if role_has_full_access(p.role) {
        return true;
    }
    p.enabled_modules.contains(&module)
}

/// [`is_module_enabled`] for a module name; names outside the vocabulary are denied.
pub fn is_module_name_enabled(principal: Option<&Principal>, module: &str) -> bool {
    module
        .parse::<Module>()
        .is_ok_and(|m| is_module_enabled(principal, m))
}

pub fn has_permission(principal: Option<&Principal>, permission: &str) -> bool {
    let Some(p) = principal else {
        return false;
    };
    if role_has_full_access(p.role) {
        return true;
    }
    p.permissions.iter().any(|granted| granted == permission)
}

pub fn can_access_school(principal: Option<&Principal>, school_id: &SchoolId) -> bool {
    let Some(p) = principal else {
        return false;
    };
    match p.role {
        Role::Admin | Role::Prosecutor => true,
        Role::School | Role::Teacher => p.school_id.as_ref() == Some(school_id),
        Role::Councilor => p.scoping.includes_school(school_id),
    }
}

pub fn can_access_region(principal: Option<&Principal>, region_id: &RegionId) -> bool {
    let Some(p) = principal else {
        return false;
    };
    match p.role {
        Role::Admin | Role::Prosecutor => true,
        Role::Councilor => p.region_id.as_ref() == Some(region_id),
        Role::School | Role::Teacher => false,
    }
}

pub fn can_access_council(principal: Option<&Principal>, council_id: &CouncilId) -> bool {
    let Some(p) = principal else {
        return false;
    };
    match p.role {
        Role::Admin | Role::Prosecutor => true,
        Role::Councilor => p.council_id.as_ref() == Some(council_id),
        Role::School | Role::Teacher => false,
    }
}

pub fn can_access_bi(principal: Option<&Principal>) -> bool {
    has_full_access(principal) || is_module_enabled(principal, Module::BiPanel)
}

/// Every module decision plus the role-level flags for one principal.
pub fn snapshot(principal: &Principal) -> AccessSnapshot {
    let p = Some(principal);
    let modules: BTreeMap<String, bool> = Module::ALL
        .into_iter()
        .map(|m| (m.as_str().to_string(), is_module_enabled(p, m)))
        .collect();

    AccessSnapshot {
        role: principal.role,
        full_access: has_full_access(p),
        is_admin: is_admin(p),
        can_access_bi: can_access_bi(p),
        modules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sipesc_models::{Scoping, UserId};

    fn principal(role: Role) -> Principal {
        Principal {
            id: UserId::new("u-1"),
            name: "Test".to_string(),
            email: "test@sipesc.gov.br".to_string(),
            role,
            school_id: None,
            council_id: None,
            region_id: None,
            scoping: Scoping::default(),
            enabled_modules: Vec::new(),
            permissions: Vec::new(),
        }
    }

    #[test]
    fn test_full_access_roles_with_empty_grants() {
        for role in [Role::Admin, Role::Prosecutor] {
            let p = principal(role);
            let p = Some(&p);
            assert!(has_full_access(p));
            assert!(is_module_enabled(p, Module::Medications));
            assert!(has_permission(p, "reports:export"));
            assert!(can_access_school(p, &SchoolId::new("esc-999")));
            assert!(can_access_region(p, &RegionId::new("reg-x")));
            assert!(can_access_council(p, &CouncilId::new("ct-9")));
            assert!(can_access_bi(p));
        }
    }

    #[test]
    fn test_is_admin_only_for_admin() {
        assert!(is_admin(Some(&principal(Role::Admin))));
        assert!(!is_admin(Some(&principal(Role::Prosecutor))));
        assert!(!is_admin(None));
    }

    #[test]
    fn test_no_principal_denies_everything() {
        assert!(!has_full_access(None));
        assert!(!is_module_enabled(None, Module::Dashboard));
        assert!(!is_module_name_enabled(None, "dashboard"));
        assert!(!has_permission(None, "students:read"));
        assert!(!can_access_school(None, &SchoolId::new("esc-001")));
        assert!(!can_access_region(None, &RegionId::new("reg-norte")));
        assert!(!can_access_council(None, &CouncilId::new("ct-001")));
        assert!(!can_access_bi(None));
    }

    #[test]
    fn test_school_and_teacher_see_only_own_school() {
        for role in [Role::School, Role::Teacher] {
            let mut p = principal(role);
            p.school_id = Some(SchoolId::new("esc-001"));
            p.scoping.schools = vec![SchoolId::new("esc-002")];
            let p = Some(&p);
            assert!(can_access_school(p, &SchoolId::new("esc-001")));
            assert!(!can_access_school(p, &SchoolId::new("esc-002")));
            assert!(!can_access_region(p, &RegionId::new("reg-norte")));
            assert!(!can_access_council(p, &CouncilId::new("ct-001")));
        }
    }

    #[test]
    fn test_school_without_school_id_sees_nothing() {
        let p = principal(Role::School);
        assert!(!can_access_school(Some(&p), &SchoolId::new("esc-001")));
    }

    #[test]
    fn test_councilor_scoping() {
        let mut p = principal(Role::Councilor);
        p.council_id = Some(CouncilId::new("ct-001"));
        p.region_id = Some(RegionId::new("reg-norte"));
        p.scoping.schools = vec![SchoolId::new("esc-001"), SchoolId::new("esc-002")];
        let p = Some(&p);

        assert!(can_access_school(p, &SchoolId::new("esc-002")));
        assert!(!can_access_school(p, &SchoolId::new("esc-003")));
        assert!(can_access_region(p, &RegionId::new("reg-norte")));
        assert!(!can_access_region(p, &RegionId::new("reg-sul")));
        assert!(can_access_council(p, &CouncilId::new("ct-001")));
        assert!(!can_access_council(p, &CouncilId::new("ct-002")));
    }

    #[test]
    fn test_councilor_wildcard_school_scoping() {
        let mut p = principal(Role::Councilor);
        p.scoping.schools = vec![SchoolId::wildcard()];
        assert!(can_access_school(Some(&p), &SchoolId::new("esc-003")));
    }

    #[test]
    fn test_modules_and_permissions_require_explicit_grant() {
        let mut p = principal(Role::Teacher);
        assert!(!is_module_enabled(Some(&p), Module::Students));
        assert!(!has_permission(Some(&p), "students:read"));

        p.enabled_modules = vec![Module::Students];
        p.permissions = vec!["students:read".to_string()];
        assert!(is_module_enabled(Some(&p), Module::Students));
        assert!(!is_module_enabled(Some(&p), Module::Incidents));
        assert!(has_permission(Some(&p), "students:read"));
        assert!(!has_permission(Some(&p), "students:update"));
    }

    #[test]
    fn test_unknown_module_name_is_denied() {
        let admin = principal(Role::Admin);
        assert!(!is_module_name_enabled(Some(&admin), "payroll"));
        assert!(is_module_name_enabled(Some(&admin), "painel_bi"));
    }

    #[test]
    fn test_bi_follows_module_for_non_privileged() {
        let mut p = principal(Role::Councilor);
        assert!(!can_access_bi(Some(&p)));
        p.enabled_modules = vec![Module::BiPanel];
        assert!(can_access_bi(Some(&p)));
    }

    #[test]
    fn test_snapshot() {
        let mut p = principal(Role::School);
        p.enabled_modules = vec![Module::Dashboard, Module::Alerts];
        let snap = snapshot(&p);
        assert_eq!(snap.role, Role::School);
        assert!(!snap.full_access);
        assert!(!snap.can_access_bi);
        assert_eq!(snap.modules.len(), Module::ALL.len());
        assert_eq!(snap.modules.get("alerts"), Some(&true));
        assert_eq!(snap.modules.get("students"), Some(&false));

        let admin = snapshot(&principal(Role::Admin));
        assert!(admin.modules.values().all(|enabled| *enabled));
    }
}
