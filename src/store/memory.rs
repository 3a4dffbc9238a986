//! In-memory key-value storage.
//!
//! Used when the file backend cannot be opened (read-only home, missing
//! data dir) and throughout the test suite. Nothing survives the process;
//! the dashboard still works, it just forgets its layout on exit.

use std::collections::HashMap;

use super::backend::{StorageBackend, StorageError};

/// Volatile key-value storage over a plain `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
