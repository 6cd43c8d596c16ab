//! Key-value store factory for runtime selection

use std::sync::Arc;

use crate::domain::kv_store::KvStore;
use crate::domain::DomainError;

use super::in_memory::InMemoryKvStore;
use super::redis::{RedisKvStore, RedisKvStoreConfig};

/// Supported backend types
#[derive(Debug, Clone, Default, PartialEq)]
pub enum KvStoreType {
    /// Process-local store, lost on restart
    #[default]
    InMemory,
    /// Redis store
    Redis,
}

impl std::fmt::Display for KvStoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KvStoreType::InMemory => write!(f, "in_memory"),
            KvStoreType::Redis => write!(f, "redis"),
        }
    }
}

impl std::str::FromStr for KvStoreType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(KvStoreType::InMemory),
            "redis" => Ok(KvStoreType::Redis),
            _ => Err(DomainError::configuration(format!(
                "Unknown store backend: {}. Valid backends: in_memory, redis",
                s
            ))),
        }
    }
}

/// Configuration for the store factory
#[derive(Debug, Clone, Default)]
pub struct KvStoreConfig {
    /// Type of backend to create
    pub store_type: KvStoreType,
    /// Redis URL (required for Redis type)
    pub redis_url: Option<String>,
    /// Key prefix for namespacing
    pub key_prefix: Option<String>,
}

impl KvStoreConfig {
    /// Creates a configuration for the in-memory store
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Creates a configuration for the Redis store
    pub fn redis(url: impl Into<String>) -> Self {
        Self {
            store_type: KvStoreType::Redis,
            redis_url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Sets the key prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }
}

/// Factory for creating store instances
#[derive(Debug, Default)]
pub struct KvStoreFactory;

impl KvStoreFactory {
    pub fn new() -> Self {
        Self
    }

    /// Creates a store based on configuration
    pub async fn create(&self, config: &KvStoreConfig) -> Result<Arc<dyn KvStore>, DomainError> {
        match config.store_type {
            KvStoreType::InMemory => Ok(Arc::new(InMemoryKvStore::new())),
            KvStoreType::Redis => {
                let url = config.redis_url.clone().ok_or_else(|| {
                    DomainError::configuration("Redis URL is required for the Redis backend")
                })?;

                let mut redis_config = RedisKvStoreConfig::new(url);

                if let Some(prefix) = &config.key_prefix {
                    redis_config = redis_config.with_key_prefix(prefix.clone());
                }

                let store = RedisKvStore::new(redis_config).await?;
                Ok(Arc::new(store))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_type_from_str() {
        assert_eq!("in_memory".parse::<KvStoreType>().unwrap(), KvStoreType::InMemory);
        assert_eq!("inmemory".parse::<KvStoreType>().unwrap(), KvStoreType::InMemory);
        assert_eq!("memory".parse::<KvStoreType>().unwrap(), KvStoreType::InMemory);
        assert_eq!("redis".parse::<KvStoreType>().unwrap(), KvStoreType::Redis);
        assert_eq!("REDIS".parse::<KvStoreType>().unwrap(), KvStoreType::Redis);
    }

    #[test]
    fn test_store_type_from_str_invalid() {
        let result = "postgres".parse::<KvStoreType>();
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_store_type_display() {
        assert_eq!(KvStoreType::InMemory.to_string(), "in_memory");
        assert_eq!(KvStoreType::Redis.to_string(), "redis");
    }

    #[test]
    fn test_store_config_redis() {
        let config = KvStoreConfig::redis("redis://localhost:6379").with_key_prefix("keygate");

        assert_eq!(config.store_type, KvStoreType::Redis);
        assert_eq!(config.redis_url, Some("redis://localhost:6379".to_string()));
        assert_eq!(config.key_prefix, Some("keygate".to_string()));
    }

    #[tokio::test]
    async fn test_factory_create_in_memory() {
        let store = KvStoreFactory::new()
            .create(&KvStoreConfig::in_memory())
            .await
            .unwrap();

        store.set("current_key", "value".to_string()).await.unwrap();
        assert!(store.get("current_key").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_factory_create_redis_missing_url() {
        let config = KvStoreConfig {
            store_type: KvStoreType::Redis,
            redis_url: None,
            key_prefix: None,
        };

        let result = KvStoreFactory::new().create(&config).await;
        assert!(result.is_err());
    }
}
