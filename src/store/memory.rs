//! In-memory key-value store for tests and session-only use.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::KeyValueStore;
use crate::errors::AppError;

/// Key-value store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Storage("Memory store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Storage("Memory store lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let store = MemoryKvStore::new();
        assert_eq!(store.get("reservations").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let store = MemoryKvStore::new();
        store.set("k", "1").await.unwrap();
        store.set("k", "2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_clones_share_entries() {
        let store = MemoryKvStore::new();
        let other = store.clone();
        store.set("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap(), Some("v".to_string()));
    }
}
