//! Rotating Key Gateway
//!
//! Issues, persists and verifies a single rotating access key with a fixed
//! 24-hour lifetime:
//! - One current key, fully replaced on every generation
//! - Pluggable key-value backend (in-memory or Redis)
//! - HTTP endpoints to generate, read, rotate and verify the key

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::access_key::AccessKeyService;
use infrastructure::kv_store::{KvStoreConfig, KvStoreFactory, KvStoreType};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// The backend is constructed here and handed to the service; nothing in the
/// crate holds a process-wide store client.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let store_type: KvStoreType = config.store.backend.parse()?;
    info!("Key store backend: {}", store_type);

    let store_config = KvStoreConfig {
        store_type,
        redis_url: config.store.redis_url.clone(),
        key_prefix: config.store.key_prefix.clone(),
    };

    let store = KvStoreFactory::new().create(&store_config).await?;
    let service = AccessKeyService::with_key_name(store, config.store.key_name.clone());

    info!("Storing current key under '{}'", config.store.key_name);

    Ok(AppState::new(Arc::new(service), config.verify.clone()))
}
