//! File-backed key-value storage.
//!
//! Stores the dashboard state as a pretty-printed JSON object in a single
//! state file, `$XDG_DATA_HOME/churchafrica-dashboard/state.json` by
//! default. The file is read once at open; every `set`/`remove` rewrites
//! it in full (the map holds a handful of short strings).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::backend::{StorageBackend, StorageError};
use crate::config::xdg;

/// Key-value storage persisted to a JSON file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    /// Opens storage at `path`, loading existing entries.
    ///
    /// A missing file starts an empty map. A file that exists but does not
    /// parse as a JSON string map also starts an empty map, with a warning
    /// log; the corrupt content is overwritten on the next write. Only
    /// genuine I/O failures (permissions, unreadable path) are errors, and
    /// the caller is expected to degrade to in-memory storage.
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<HashMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(
                        "state file {} is corrupt, starting empty: {}",
                        path.display(),
                        e
                    );
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(StorageError::Io { path, source: e });
            }
        };
        Ok(Self { path, entries })
    }

    /// Opens storage at the default XDG data location.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::open(xdg::state_path())
    }

    /// Path of the backing state file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the full entry map back to disk.
    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            xdg::ensure_dir(parent).map_err(|e| StorageError::Io {
                path: self.path.clone(),
                source: e,
            })?;
        }
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| StorageError::Serialize {
                message: e.to_string(),
            })?;
        fs::write(&self.path, content).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_starts_empty() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let storage =
            FileStorage::open(tmp.path().join("state.json")).expect("open should succeed");
        assert_eq!(storage.get("anything").expect("get"), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let mut storage =
            FileStorage::open(tmp.path().join("state.json")).expect("open should succeed");
        storage.set("key", "value").expect("set should succeed");
        assert_eq!(storage.get("key").expect("get"), Some("value".to_string()));
    }

    #[test]
    fn entries_survive_reopen() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("state.json");
        {
            let mut storage = FileStorage::open(path.clone()).expect("open should succeed");
            storage.set("a", "1").expect("set");
            storage.set("b", "2").expect("set");
        }
        let storage = FileStorage::open(path).expect("reopen should succeed");
        assert_eq!(storage.get("a").expect("get"), Some("1".to_string()));
        assert_eq!(storage.get("b").expect("get"), Some("2".to_string()));
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("state.json");
        fs::write(&path, "{not valid json").expect("write corrupt file");
        let storage = FileStorage::open(path).expect("open should still succeed");
        assert_eq!(storage.get("key").expect("get"), None);
    }

    #[test]
    fn set_creates_parent_directories() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("nested/dir/state.json");
        let mut storage = FileStorage::open(path.clone()).expect("open should succeed");
        storage.set("key", "value").expect("set should succeed");
        assert!(path.exists());
    }

    #[test]
    fn remove_deletes_entry() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let path = tmp.path().join("state.json");
        let mut storage = FileStorage::open(path.clone()).expect("open");
        storage.set("key", "value").expect("set");
        storage.remove("key").expect("remove");
        assert_eq!(storage.get("key").expect("get"), None);

        let reopened = FileStorage::open(path).expect("reopen");
        assert_eq!(reopened.get("key").expect("get"), None);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let mut storage =
            FileStorage::open(tmp.path().join("state.json")).expect("open should succeed");
        storage.remove("missing").expect("remove of missing key is a no-op");
    }

    #[test]
    fn open_directory_path_is_io_error() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let err = FileStorage::open(tmp.path().to_path_buf())
            .expect_err("opening a directory should fail");
        matches!(err, StorageError::Io { .. });
    }
}
