//! In-memory key-value store implementation

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::kv_store::{KvStore, StoredValue};
use crate::domain::DomainError;

/// Thread-safe in-memory key-value store
///
/// Useful for testing and development. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    values: RwLock<HashMap<String, StoredValue>>,
}

impl InMemoryKvStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single value
    ///
    /// Accepts either text or an already-structured value, so callers can
    /// reproduce whatever representation a legacy writer left behind.
    pub fn with_value(name: impl Into<String>, value: impl Into<StoredValue>) -> Self {
        let store = Self::new();
        {
            let mut values = store
                .values
                .write()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            values.insert(name.into(), value.into());
        }
        store
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn get(&self, name: &str) -> Result<Option<StoredValue>, DomainError> {
        let values = self.values.read().map_err(|e| {
            DomainError::store_read(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(values.get(name).cloned())
    }

    async fn set(&self, name: &str, value: String) -> Result<(), DomainError> {
        let mut values = self.values.write().map_err(|e| {
            DomainError::store_write(format!("Failed to acquire write lock: {}", e))
        })?;

        values.insert(name.to_string(), StoredValue::Text(value));
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemoryKvStore::new();
        assert_eq!(store.get("current_key").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let store = InMemoryKvStore::new();

        store
            .set("current_key", "first".to_string())
            .await
            .unwrap();

        let value = store.get("current_key").await.unwrap();
        assert_eq!(value, Some(StoredValue::Text("first".to_string())));
    }

    #[tokio::test]
    async fn test_set_replaces() {
        let store = InMemoryKvStore::new();

        store.set("current_key", "first".to_string()).await.unwrap();
        store
            .set("current_key", "second".to_string())
            .await
            .unwrap();

        let value = store.get("current_key").await.unwrap();
        assert_eq!(value, Some(StoredValue::Text("second".to_string())));
    }

    #[tokio::test]
    async fn test_with_structured_value() {
        let store = InMemoryKvStore::with_value("current_key", json!({"key": "A"}));

        let value = store.get("current_key").await.unwrap();
        assert_eq!(value, Some(StoredValue::Structured(json!({"key": "A"}))));
    }

    #[tokio::test]
    async fn test_ping() {
        assert!(InMemoryKvStore::new().ping().await.is_ok());
    }
}
