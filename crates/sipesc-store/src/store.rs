//! The key-value store abstraction sessions are persisted in.

use async_trait::async_trait;

use crate::StoreError;

/// String-to-string store with prefix scanning.
///
/// Values are opaque strings; callers own the encoding. Multi-key writes go
/// through [`KeyValueStore::set_many`] / [`KeyValueStore::remove_many`] so
/// backends that can apply them as one write do so.
#[async_trait]
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// All keys starting with `prefix`, in no particular order.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    async fn set_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }

    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }

    /// Writes `entries` only while every key in `required` is present.
    ///
    /// The check and the write happen under the same lock as `set_many` and
    /// `remove_many`, so a concurrent removal either lands first (nothing is
    /// written) or after the write. Returns whether the entries were written.
    async fn set_many_if_present(
        &self,
        required: &[String],
        entries: &[(String, String)],
    ) -> Result<bool, StoreError>;
}
