//! Accounts accepted at login.
//!
//! Seeded from the demo accounts; admins can change a user's enabled modules
//! at runtime, which affects later logins as well as live sessions.

use dashmap::DashMap;
use sipesc_models::{Module, Principal, UserId, directory};

#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: DashMap<UserId, Principal>,
}

impl AccountDirectory {
    pub fn from_demo_accounts() -> Self {
        let accounts = DashMap::new();
        for account in directory::demo_accounts() {
            accounts.insert(account.id.clone(), account);
        }
        Self { accounts }
    }

    pub fn find_by_email(&self, email: &str) -> Option<Principal> {
        let needle = email.trim().to_lowercase();
        self.accounts
            .iter()
            .find(|entry| entry.value().email == needle)
            .map(|entry| entry.value().clone())
    }

    pub fn get(&self, id: &UserId) -> Option<Principal> {
        self.accounts.get(id).map(|entry| entry.value().clone())
    }

    /// Every account, ordered by id.
    pub fn list(&self) -> Vec<Principal> {
        let mut accounts: Vec<Principal> = self
            .accounts
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        accounts
    }

    /// Replaces the enabled modules of `id`, returning the updated account.
    pub fn set_modules(&self, id: &UserId, modules: Vec<Module>) -> Option<Principal> {
        let mut entry = self.accounts.get_mut(id)?;
        let updated = entry.value().with_modules(modules);
        *entry.value_mut() = updated.clone();
        Some(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_email() {
        let dir = AccountDirectory::from_demo_accounts();
        let found = dir.find_by_email(" ESCOLA@sipesc.gov.br").unwrap();
        assert_eq!(found.email, directory::SCHOOL_EMAIL);
        assert!(dir.find_by_email("ghost@sipesc.gov.br").is_none());
    }

    #[test]
    fn test_set_modules() {
        let dir = AccountDirectory::from_demo_accounts();
        let id = UserId::new("u-professor-001");

        let updated = dir
            .set_modules(&id, vec![Module::Students, Module::Dashboard, Module::Students])
            .unwrap();
        assert_eq!(updated.enabled_modules, vec![Module::Dashboard, Module::Students]);
        assert_eq!(dir.get(&id).unwrap(), updated);

        assert!(dir.set_modules(&UserId::new("nobody"), vec![]).is_none());
    }

    #[test]
    fn test_list_is_ordered() {
        let ids: Vec<String> = AccountDirectory::from_demo_accounts()
            .list()
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 5);
    }
}
