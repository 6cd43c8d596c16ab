//! Access key service
//!
//! Owns the lifecycle of the single current key: generation, lookup,
//! rotation on expiry, and verification of presented keys.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::access_key::{
    Clock, KeyRecord, KeyStatus, SystemClock, VerificationOutcome, DEFAULT_KEY_NAME,
};
use crate::domain::kv_store::KvStore;
use crate::domain::DomainError;
use crate::infrastructure::observability::{
    record_key_generated, record_store_failure, record_verification, StoreOperation,
};

use super::generator::KeyGenerator;
use super::record_store::KeyRecordStore;

/// Lifecycle manager for the current access key
///
/// Holds no key state of its own; every call reads the backend, so any
/// number of instances may share one backend.
#[derive(Debug)]
pub struct AccessKeyService {
    store: KeyRecordStore,
    generator: KeyGenerator,
    clock: Arc<dyn Clock>,
}

impl AccessKeyService {
    /// Create a service storing the key under the default name
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self::with_key_name(store, DEFAULT_KEY_NAME)
    }

    /// Create a service storing the key under `key_name`
    pub fn with_key_name(store: Arc<dyn KvStore>, key_name: impl Into<String>) -> Self {
        Self {
            store: KeyRecordStore::new(store, key_name),
            generator: KeyGenerator::new(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Create with a custom clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Current time according to the service clock
    pub fn now(&self) -> i64 {
        self.clock.now()
    }

    /// Generate a new key and make it the current one
    ///
    /// If the write fails the previously stored record is left as it was.
    pub async fn generate(&self) -> Result<KeyRecord, DomainError> {
        let record = KeyRecord::issued_at(self.generator.generate(), self.now());

        if let Err(e) = self.store.put(&record).await {
            error!("Failed to store generated key under '{}': {}", self.store.name(), e);
            record_store_failure(StoreOperation::Write);
            return Err(DomainError::generation("Failed to generate key"));
        }

        info!("Generated new key expiring at {}", record.expired());
        record_key_generated();

        Ok(record)
    }

    /// Read the stored key without checking expiry
    ///
    /// Backend failures are logged and reported as no key.
    pub async fn get_stored(&self) -> Option<KeyRecord> {
        match self.store.fetch().await {
            Ok(record) => record,
            Err(e) => {
                warn!("Failed to read key from '{}': {}", self.store.name(), e);
                record_store_failure(StoreOperation::Read);
                None
            }
        }
    }

    /// Return the stored key, generating a new one if it is missing or expired
    ///
    /// This is a read followed by a conditional write with no lock between
    /// them. Concurrent callers that both see a missing or expired key will
    /// both generate, and the backend keeps whichever write lands last.
    pub async fn get_current(&self) -> Result<KeyRecord, DomainError> {
        match self.get_stored().await {
            Some(record) if !record.is_expired_at(self.now()) => Ok(record),
            Some(_) => {
                debug!("Stored key has expired, rotating");
                self.generate().await
            }
            None => {
                debug!("No stored key, generating");
                self.generate().await
            }
        }
    }

    /// Check a presented key against the stored one
    pub async fn verify(&self, candidate: &str) -> VerificationOutcome {
        let stored = self.get_stored().await;
        let outcome = VerificationOutcome::evaluate(stored.as_ref(), candidate, self.now());

        debug!("Key verification outcome: {}", outcome);
        record_verification(outcome);

        outcome
    }

    /// Expiry status of `record` at the current time
    pub fn status_of(&self, record: &KeyRecord) -> KeyStatus {
        record.status_at(self.now())
    }

    /// Check that the backend is reachable
    pub async fn health_check(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }
}
