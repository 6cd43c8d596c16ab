//! Key-value store infrastructure - Backend implementations

mod factory;
mod in_memory;
mod redis;

pub use factory::{KvStoreConfig, KvStoreFactory, KvStoreType};
pub use in_memory::InMemoryKvStore;
pub use self::redis::{RedisKvStore, RedisKvStoreConfig};
