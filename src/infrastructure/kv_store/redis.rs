//! Redis key-value store implementation

use std::fmt;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::domain::kv_store::{KvStore, StoredValue};
use crate::domain::DomainError;

/// Configuration for the Redis store
#[derive(Debug, Clone)]
pub struct RedisKvStoreConfig {
    /// Redis connection URL (e.g., "redis://127.0.0.1:6379")
    pub url: String,
    /// Key prefix for namespacing
    pub key_prefix: Option<String>,
}

impl Default for RedisKvStoreConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            key_prefix: None,
        }
    }
}

impl RedisKvStoreConfig {
    /// Creates a new configuration with the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    fn prefix_key(&self, name: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, name),
            None => name.to_string(),
        }
    }
}

/// Redis-backed key-value store
///
/// Values are plain Redis strings with no expiry of their own; the key
/// record carries its own expiry. Reconnection is handled by
/// `ConnectionManager`.
#[derive(Clone)]
pub struct RedisKvStore {
    connection: ConnectionManager,
    config: RedisKvStoreConfig,
}

impl fmt::Debug for RedisKvStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisKvStore")
            .field("config", &self.config)
            .field("connection", &"<ConnectionManager>")
            .finish()
    }
}

impl RedisKvStore {
    /// Connects to Redis
    pub async fn new(config: RedisKvStoreConfig) -> Result<Self, DomainError> {
        let client = Client::open(config.url.as_str()).map_err(|e| {
            DomainError::configuration(format!("Failed to create Redis client: {}", e))
        })?;

        let connection = ConnectionManager::new(client).await.map_err(|e| {
            DomainError::configuration(format!("Failed to connect to Redis: {}", e))
        })?;

        Ok(Self { connection, config })
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn get(&self, name: &str) -> Result<Option<StoredValue>, DomainError> {
        let prefixed_key = self.config.prefix_key(name);
        let mut conn = self.connection.clone();

        let result: Option<String> = conn.get(&prefixed_key).await.map_err(|e| {
            DomainError::store_read(format!("Failed to get key '{}': {}", name, e))
        })?;

        Ok(result.map(StoredValue::Text))
    }

    async fn set(&self, name: &str, value: String) -> Result<(), DomainError> {
        let prefixed_key = self.config.prefix_key(name);
        let mut conn = self.connection.clone();

        let _: () = conn.set(&prefixed_key, value).await.map_err(|e| {
            DomainError::store_write(format!("Failed to set key '{}': {}", name, e))
        })?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        let mut conn = self.connection.clone();

        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| DomainError::store_read(format!("Failed to ping Redis: {}", e)))?;

        Ok(())
    }
}
