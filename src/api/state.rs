//! Application state for the Pay Package Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{AppConfig, ConfigLoader, ServiceConfig};
use crate::notify::Notifier;
use crate::storage::{MemoryStore, Storage};

/// Shared application state.
///
/// Holds the loaded configuration, the storage backend and the notifier.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AppConfig>,
    storage: Arc<dyn Storage>,
    notifier: Notifier,
}

impl AppState {
    /// Creates state backed by a fresh in-memory store, seeded with the
    /// demonstration packages when the service configuration asks for it.
    pub fn new(config: ConfigLoader) -> Self {
        let config = config.into_config();
        let store = if config.service.seed_sample_data {
            MemoryStore::with_sample_data()
        } else {
            MemoryStore::new()
        };
        Self::with_storage(config, Arc::new(store))
    }

    /// Creates state over an existing storage backend.
    pub fn with_storage(config: AppConfig, storage: Arc<dyn Storage>) -> Self {
        let notifier = Notifier::from_config(Arc::clone(&storage), &config);
        Self {
            config: Arc::new(config),
            storage,
            notifier,
        }
    }

    /// Replaces the notifier, e.g. to plug in different transports.
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = notifier;
        self
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the service settings.
    pub fn service(&self) -> &ServiceConfig {
        &self.config.service
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Returns a shared handle to the storage backend.
    pub fn storage_handle(&self) -> Arc<dyn Storage> {
        Arc::clone(&self.storage)
    }

    /// Returns the notifier.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
