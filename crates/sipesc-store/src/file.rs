//! JSON-file store.
//!
//! The whole map is one JSON object on disk. Every write goes to a uniquely
//! named temporary file in the same directory and is then renamed over the
//! target, so readers see either the old map or the new one. A file that is
//! not UTF-8 or not a JSON object is treated as empty and replaced by the
//! next write.
//!
//! Every handle on the same path within a process shares one lock, so their
//! read-modify-write cycles are ordered. Two processes sharing a file never
//! see a torn file, but their cycles are not ordered: the last rename wins. The CLI keeps one session per file, so the losing
//! write is always a whole, stale session rather than a mix of two.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use crate::{KeyValueStore, StoreError};

type Entries = BTreeMap<String, String>;

static PATH_LOCKS: LazyLock<DashMap<PathBuf, Arc<Mutex<()>>>> = LazyLock::new(DashMap::new);

fn lock_for(path: &Path) -> Arc<Mutex<()>> {
    let key = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    Arc::clone(PATH_LOCKS.entry(key).or_default().value())
}

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            lock: lock_for(&path),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> Result<Entries, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e.into()),
        };

        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is not valid UTF-8, treating as empty");
                return Ok(Entries::new());
            }
        };

        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file is not a JSON object, treating as empty");
                Ok(Entries::new())
            }
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&path, &json)).await??;

        debug!(path = %self.path.display(), entries = entries.len(), "Session file written");
        Ok(())
    }

    async fn update<F>(&self, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Entries) + Send,
    {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        apply(&mut entries);
        self.write_entries(&entries).await
    }
}

/// Writes `contents` to a fresh temp file next to `target`, then renames it over `target`.
fn replace_file(target: &Path, contents: &[u8]) -> std::io::Result<()> {
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)?;
    temp.write_all(contents)?;
    temp.persist(target)?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .await
    }

    #[instrument(skip(self))]
    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.update(|entries| {
            entries.remove(key);
        })
        .await
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self
            .read_entries()
            .await?
            .into_keys()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }

    #[instrument(skip_all, fields(count = entries.len()))]
    async fn set_many(&self, entries: &[(String, String)]) -> Result<(), StoreError> {
        self.update(|map| {
            for (key, value) in entries {
                map.insert(key.clone(), value.clone());
            }
        })
        .await
    }

    #[instrument(skip_all, fields(count = keys.len()))]
    async fn remove_many(&self, keys: &[String]) -> Result<(), StoreError> {
        self.update(|map| {
            for key in keys {
                map.remove(key);
            }
        })
        .await
    }

    #[instrument(skip_all, fields(count = entries.len()))]
    async fn set_many_if_present(
        &self,
        required: &[String],
        entries: &[(String, String)],
    ) -> Result<bool, StoreError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_entries().await?;
        if !required.iter().all(|key| map.contains_key(key)) {
            return Ok(false);
        }
        for (key, value) in entries {
            map.insert(key.clone(), value.clone());
        }
        self.write_entries(&map).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        assert_eq!(store.get("sipesc:token").await.unwrap(), None);
        assert!(store.keys("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_values_survive_a_new_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileStore::new(&path);
        store
            .set_many(&[
                ("sipesc:token".to_string(), "t".to_string()),
                ("sipesc:user".to_string(), "{}".to_string()),
            ])
            .await
            .unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("sipesc:token").await.unwrap().as_deref(), Some("t"));

        reopened
            .remove_many(&["sipesc:token".to_string(), "sipesc:user".to_string()])
            .await
            .unwrap();
        assert!(store.keys("sipesc:").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("a").await.unwrap(), None);

        store.set("a", "1").await.unwrap();
        assert_eq!(store.get("a").await.unwrap().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_non_utf8_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.get("sipesc:token").await.unwrap(), None);
        assert!(store.keys("").await.unwrap().is_empty());

        store
            .remove_many(&["sipesc:token".to_string(), "sipesc:user".to_string()])
            .await
            .unwrap();
        store.set("sipesc:token", "t").await.unwrap();
        assert_eq!(store.get("sipesc:token").await.unwrap().as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_writes_leave_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let first = FileStore::new(&path);
        let second = FileStore::new(&path);
        first.set("a", "1").await.unwrap();
        second.set("b", "2").await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);
        assert_eq!(first.get("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_set_many_if_present_skips_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("session.json"));
        let required = vec!["sipesc:token".to_string(), "sipesc:user".to_string()];
        let update = [("sipesc:user".to_string(), "{}".to_string())];

        assert!(!store.set_many_if_present(&required, &update).await.unwrap());
        assert!(store.keys("").await.unwrap().is_empty());

        store
            .set_many(&[
                ("sipesc:token".to_string(), "t".to_string()),
                ("sipesc:user".to_string(), "old".to_string()),
            ])
            .await
            .unwrap();
        assert!(store.set_many_if_present(&required, &update).await.unwrap());
        assert_eq!(store.get("sipesc:user").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_handles_on_one_path_do_not_lose_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let tasks: Vec<_> = (0..16)
            .map(|i| {
                let store = FileStore::new(&path);
                tokio::spawn(async move { store.set(&format!("k{i}"), "v").await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let keys = FileStore::new(&path).keys("k").await.unwrap();
        assert_eq!(keys.len(), 16);
    }
}
