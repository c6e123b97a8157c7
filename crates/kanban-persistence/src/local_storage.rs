//! Typed, fail-soft access to a [`KeyValueStorage`].
//!
//! Reads never fail: a missing or corrupt value yields the caller's default
//! and a log line. Writes never fail either: errors are logged and the
//! caller keeps running on its in-memory state. A detached instance has no
//! backend at all; every read returns the default and every write is
//! dropped.

use crate::traits::KeyValueStorage;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct LocalStorage {
    backend: Option<Arc<dyn KeyValueStorage>>,
}

impl LocalStorage {
    pub fn new(backend: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// Storage with no backend: state lives in memory only.
    pub fn detached() -> Self {
        Self { backend: None }
    }

    pub fn is_attached(&self) -> bool {
        self.backend.is_some()
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(backend) = &self.backend else {
            return default;
        };

        let raw = match backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::error!("Error reading '{}' from storage: {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Ignoring corrupt value stored under '{}': {}", key, e);
                default
            }
        }
    }

    /// Serialize and store `value`. Returns whether the backend accepted it.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let Some(backend) = &self.backend else {
            return false;
        };

        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Error serializing '{}': {}", key, e);
                return false;
            }
        };

        match backend.set_item(key, &json) {
            Ok(()) => {
                tracing::debug!("Stored {} bytes under '{}'", json.len(), key);
                true
            }
            Err(e) => {
                tracing::error!("Error writing '{}' to storage: {}", key, e);
                false
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Some(backend) = &self.backend {
            if let Err(e) = backend.remove_item(key) {
                tracing::error!("Error removing '{}' from storage: {}", key, e);
            }
        }
    }
}
