use std::{future::Future, sync::Arc};

use dashmap::DashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("key-value storage is not available")]
    Unavailable,
    #[error("couldn't read {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("couldn't write {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Durable string key-value storage.
///
/// Both operations are asynchronous so a slow backend never blocks the event loop.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>>;
    fn set_item(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>>;
}

/// In-process storage. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
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

impl KeyValueStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The window's `localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        leptos::prelude::window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                reason: format!("{e:?}"),
            })
    }
}

#[cfg(feature = "hydrate")]
pub type PlatformStorage = BrowserStorage;

// Server renders have no durable storage: every read misses and the defaults render.
#[cfg(not(feature = "hydrate"))]
pub type PlatformStorage = MemoryStore;

pub fn platform_storage() -> PlatformStorage {
    PlatformStorage::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_get_set() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_item("theme").await, Ok(None));

        store.set_item("theme", "light").await.unwrap();
        assert_eq!(store.get_item("theme").await, Ok(Some("light".to_string())));

        // Overwrites keep a single entry
        store.set_item("theme", "dark").await.unwrap();
        assert_eq!(store.get_item("theme").await, Ok(Some("dark".to_string())));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        other.set_item("fontSize", "18").await.unwrap();
        assert_eq!(store.get_item("fontSize").await, Ok(Some("18".to_string())));
    }
}
