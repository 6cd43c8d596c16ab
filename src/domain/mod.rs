//! Domain layer - Core business logic and entities

pub mod access_key;
pub mod error;
pub mod kv_store;

pub use access_key::{Clock, KeyRecord, KeyStatus, SystemClock, VerificationOutcome};
pub use error::DomainError;
pub use kv_store::{KvStore, StoredValue};
