//! In-memory store backed by a concurrent map.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::{KeyValueStore, StoreError};

/// Single reads go straight to the map. Writes take `writes` so that a
/// conditional write never interleaves with a multi-key removal.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
    writes: Arc<Mutex<()>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.writes.lock().await;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.writes.lock().await;
        self.entries.remove(key);
        Ok(())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect())
    }

    async fn set_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        let _guard = self.writes.lock().await;
        for (key, value) in entries {
            self.entries.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        let _guard = self.writes.lock().await;
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }

    async fn set_many_if_present(
        &self,
        required: &[String],
        entries: &[(String, String)],
    ) -> Result<bool, StoreError> {
        let _guard = self.writes.lock().await;
        if !required.iter().all(|key| self.entries.contains_key(key)) {
            return Ok(false);
        }
        for (key, value) in entries {
            self.entries.insert(key.clone(), value.clone());
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").await.unwrap(), None);

        store.set("a", "1").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));

        store.set("a", "2").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("2"));

        store.remove("a").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_keys_by_prefix() {
        let store = MemoryStore::new();
        store.set("session:1:user", "{}").await.unwrap();
        store.set("session:2:user", "{}").await.unwrap();
        store.set("sipesc:user", "{}").await.unwrap();

        let mut keys = store.keys("session:").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["session:1:user", "session:2:user"]);
    }

    #[tokio::test]
    async fn test_set_many_if_present() {
        let store = MemoryStore::new();
        let required = vec!["a".to_string(), "b".to_string()];
        let update = [("b".to_string(), "new".to_string())];

        store.set("a", "1").await.unwrap();
        assert!(!store.set_many_if_present(&required, &update).await.unwrap());
        assert_eq!(store.get("b").await.unwrap(), None);

        store.set("b", "old").await.unwrap();
        assert!(store.set_many_if_present(&required, &update).await.unwrap());
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("new"));
    }
}
