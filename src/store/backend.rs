//! Durable key-value storage abstraction.
//!
//! The dashboard persists its state into a small string-to-string map,
//! the terminal analogue of browser-local storage. Backends only need
//! `get`/`set`/`remove`; everything above them (JSON encoding of the
//! config, fallback semantics) lives in [`super::ConfigStore`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by storage backends.
///
/// None of these are fatal to the dashboard: read failures fall back to
/// the starter layout and write failures leave the in-memory state
/// authoritative (soft-degrade).
#[derive(Debug, Error)]
pub enum StorageError {
    /// Durable storage cannot be used in this environment.
    #[error("durable storage is unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of why storage is unusable.
        reason: String,
    },

    /// An I/O error while reading or writing the state file.
    #[error("failed to access state file: {path}")]
    Io {
        /// Path to the state file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The key-value map could not be serialized.
    #[error("failed to serialize stored state: {message}")]
    Serialize {
        /// Description of the serialization failure.
        message: String,
    },
}

/// A durable string-to-string key-value store.
///
/// Implementations are write-through: a successful `set` means the value
/// survives a process restart (for backends that persist at all; the
/// in-memory backend deliberately does not).
pub trait StorageBackend: Send {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, overwriting unconditionally.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes the value stored under `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
