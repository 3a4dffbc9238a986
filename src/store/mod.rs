//! Configuration store for the dashboard layout.
//!
//! [`ConfigStore`] exclusively owns the in-memory [`DashboardConfig`] and
//! is its only mutation surface: consumers read snapshots via
//! [`ConfigStore::config`] and request changes via
//! [`ConfigStore::update`], which writes through to durable storage on
//! every change (no batching or debounce, last-writer-wins).
//!
//! # Failure semantics
//!
//! No storage condition is fatal:
//!
//! - missing entry at load time: starter layout, debug log
//! - corrupt entry at load time: starter layout, warning log
//! - write failure: state stays authoritative in memory, debug log
//!
//! The persisted copy is the source of truth at load time; the in-memory
//! copy is authoritative thereafter until the next load.

use crate::DashboardConfig;

mod backend;
mod file;
mod memory;

pub use backend::{StorageBackend, StorageError};
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Storage key holding the JSON-serialized [`DashboardConfig`].
pub const CONFIG_KEY: &str = "churchafrica-dashboard-config";

/// Storage key holding the tour-dismissed sentinel (`"true"` when seen).
pub const TOUR_SEEN_KEY: &str = "churchafrica-dashboard-tour-seen";

/// Owner of the dashboard configuration, backed by durable storage.
pub struct ConfigStore {
    backend: Box<dyn StorageBackend>,
    starter: DashboardConfig,
    config: DashboardConfig,
}

impl std::fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigStore")
            .field("config", &self.config)
            .field("starter", &self.starter)
            .finish()
    }
}

impl ConfigStore {
    /// Creates a store over `backend` and performs the initial load.
    ///
    /// `starter` is the fallback configuration returned whenever storage
    /// has no usable entry.
    pub fn open(backend: Box<dyn StorageBackend>, starter: DashboardConfig) -> Self {
        let mut store = Self {
            backend,
            config: starter.clone(),
            starter,
        };
        store.load();
        store
    }

    /// Reloads the configuration from durable storage.
    ///
    /// Never fails: a missing or corrupt entry yields the starter layout,
    /// logged but not surfaced. The loaded value replaces the in-memory
    /// copy and is returned as a snapshot.
    pub fn load(&mut self) -> DashboardConfig {
        self.config = match self.backend.get(CONFIG_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<DashboardConfig>(&raw) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("stored dashboard config is corrupt, using starter layout: {e}");
                    self.starter.clone()
                }
            },
            Ok(None) => {
                tracing::debug!("no stored dashboard config, using starter layout");
                self.starter.clone()
            }
            Err(e) => {
                tracing::warn!("could not read stored dashboard config: {e}");
                self.starter.clone()
            }
        };
        self.config.clone()
    }

    /// Read-only snapshot of the current configuration.
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Replaces the in-memory configuration and writes it through.
    pub fn update(&mut self, new_config: DashboardConfig) {
        self.config = new_config;
        self.save();
    }

    /// Serializes the current configuration into durable storage.
    ///
    /// Overwrites any prior persisted value unconditionally. Failures are
    /// logged and swallowed; the in-memory copy remains authoritative.
    pub fn save(&mut self) {
        let raw = match serde_json::to_string(&self.config) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("could not serialize dashboard config: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.set(CONFIG_KEY, &raw) {
            tracing::debug!("dashboard config not persisted (kept in memory): {e}");
        }
    }

    /// Returns `true` once the first-run tour has been dismissed.
    pub fn tour_seen(&self) -> bool {
        match self.backend.get(TOUR_SEEN_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(_) => false,
        }
    }

    /// Records that the first-run tour has been dismissed.
    pub fn mark_tour_seen(&mut self) {
        if let Err(e) = self.backend.set(TOUR_SEEN_KEY, "true") {
            tracing::debug!("tour sentinel not persisted: {e}");
        }
    }

    /// Drops the persisted configuration entry and reverts to the starter
    /// layout. Used by `cad layout reset`.
    pub fn reset(&mut self) {
        if let Err(e) = self.backend.remove(CONFIG_KEY) {
            tracing::debug!("could not remove stored dashboard config: {e}");
        }
        self.config = self.starter.clone();
    }
}
