//! Fixed directory of demo accounts.
//!
//! Login matches the email against this list (case-insensitively) and accepts
//! any non-empty password.

use crate::ids::{CouncilId, RegionId, SchoolId, UserId};
use crate::modules::Module;
use crate::roles::Role;
use crate::users::{Principal, Scoping};
use sipesc_core::permissions;

pub const SCHOOL_EMAIL: &str = "escola@sipesc.gov.br";
pub const TEACHER_EMAIL: &str = "professor@sipesc.gov.br";
pub const COUNCILOR_EMAIL: &str = "conselho@sipesc.gov.br";
pub const PROSECUTOR_EMAIL: &str = "mp@sipesc.gov.br";
pub const ADMIN_EMAIL: &str = "admin@sipesc.gov.br";

fn perms(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

pub fn demo_accounts() -> Vec<Principal> {
    vec![
        Principal {
            id: UserId::new("u-escola-001"),
            name: "Escola Municipal Esperança".to_string(),
            email: SCHOOL_EMAIL.to_string(),
            role: Role::School,
            school_id: Some(SchoolId::new("esc-001")),
            council_id: None,
            region_id: Some(RegionId::new("reg-norte")),
            scoping: Scoping {
                schools: vec![SchoolId::new("esc-001")],
                ..Scoping::default()
            },
            enabled_modules: vec![
                Module::Dashboard,
                Module::Students,
                Module::StudentsAtRisk,
                Module::Incidents,
                Module::Attendance,
                Module::Referrals,
                Module::Messages,
                Module::Alerts,
                Module::Medications,
            ],
            permissions: perms(&[
                permissions::STUDENTS_READ,
                permissions::STUDENTS_CREATE,
                permissions::INCIDENTS_READ,
                permissions::INCIDENTS_CREATE,
                permissions::ATTENDANCE_READ,
                permissions::ATTENDANCE_UPDATE,
                permissions::REFERRALS_CREATE,
                permissions::MEDICATIONS_READ,
                permissions::MESSAGES_SEND,
            ]),
        },
        Principal {
            id: UserId::new("u-professor-001"),
            name: "Maria Souza".to_string(),
            email: TEACHER_EMAIL.to_string(),
            role: Role::Teacher,
            school_id: Some(SchoolId::new("esc-001")),
            council_id: None,
            region_id: Some(RegionId::new("reg-norte")),
            scoping: Scoping::default(),
            enabled_modules: vec![
                Module::Dashboard,
                Module::Students,
                Module::Incidents,
                Module::Attendance,
            ],
            permissions: perms(&[
                permissions::STUDENTS_READ,
                permissions::ATTENDANCE_READ,
                permissions::ATTENDANCE_UPDATE,
                permissions::INCIDENTS_CREATE,
            ]),
        },
        Principal {
            id: UserId::new("u-conselho-001"),
            name: "Conselho Tutelar Região Norte".to_string(),
            email: COUNCILOR_EMAIL.to_string(),
            role: Role::Councilor,
            school_id: None,
            council_id: Some(CouncilId::new("ct-001")),
            region_id: Some(RegionId::new("reg-norte")),
            scoping: Scoping {
                schools: vec![SchoolId::new("esc-001"), SchoolId::new("esc-002")],
                regions: vec![RegionId::new("reg-norte")],
                councils: vec![CouncilId::new("ct-001")],
            },
            enabled_modules: vec![
                Module::Dashboard,
                Module::Students,
                Module::StudentsAtRisk,
                Module::Incidents,
                Module::Referrals,
                Module::SchoolsLinked,
                Module::Messages,
                Module::Alerts,
                Module::Reports,
            ],
            permissions: perms(&[
                permissions::STUDENTS_READ,
                permissions::INCIDENTS_READ,
                permissions::REFERRALS_READ,
                permissions::REPORTS_VIEW,
                permissions::MESSAGES_SEND,
            ]),
        },
        Principal {
            id: UserId::new("u-mp-001"),
            name: "Ministério Público".to_string(),
            email: PROSECUTOR_EMAIL.to_string(),
            role: Role::Prosecutor,
            school_id: None,
            council_id: None,
            region_id: None,
            scoping: Scoping::global(),
            enabled_modules: Vec::new(),
            permissions: Vec::new(),
        },
        Principal {
            id: UserId::new("u-admin-001"),
            name: "Administrador SIPESC".to_string(),
            email: ADMIN_EMAIL.to_string(),
            role: Role::Admin,
            school_id: None,
            council_id: None,
            region_id: None,
            scoping: Scoping::global(),
            enabled_modules: Vec::new(),
            permissions: Vec::new(),
        },
    ]
}

/// Looks up a demo account by email, ignoring case and surrounding whitespace.
pub fn find_by_email(email: &str) -> Option<Principal> {
    let needle = email.trim().to_lowercase();
    demo_accounts().into_iter().find(|p| p.email == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_demo_account() {
        let accounts = demo_accounts();
        for role in Role::ALL {
            assert!(accounts.iter().any(|p| p.role == role), "missing {role}");
        }
    }

    #[test]
    fn test_find_by_email_ignores_case() {
        let found = find_by_email("  Conselho@SIPESC.gov.br ").unwrap();
        assert_eq!(found.role, Role::Councilor);
        assert!(find_by_email("nobody@sipesc.gov.br").is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let accounts = demo_accounts();
        let mut ids: Vec<_> = accounts.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), accounts.len());
    }
}
