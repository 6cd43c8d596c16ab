//! Key-value store trait definition

use std::fmt::Debug;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::DomainError;

use super::value::StoredValue;

/// Name read by the default health check
const PING_NAME: &str = "__ping__";

/// Persistent key-value backend holding named values
///
/// Implementations round-trip to the backend on every call. Writes follow
/// last-write-wins semantics; there is no conditional or versioned write.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait KvStore: Send + Sync + Debug {
    /// Reads the value stored under `name`
    async fn get(&self, name: &str) -> Result<Option<StoredValue>, DomainError>;

    /// Writes `value` under `name`, replacing whatever was there
    async fn set(&self, name: &str, value: String) -> Result<(), DomainError>;

    /// Verifies the backend is reachable
    async fn ping(&self) -> Result<(), DomainError> {
        self.get(PING_NAME).await.map(|_| ())
    }
}
