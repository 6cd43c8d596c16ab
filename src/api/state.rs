//! Application state for shared services

use std::sync::Arc;

use crate::config::VerifyConfig;
use crate::domain::{DomainError, KeyRecord, KeyStatus, VerificationOutcome};
use crate::infrastructure::access_key::AccessKeyService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub access_key_service: Arc<dyn AccessKeyServiceTrait>,
    pub verify: VerifyConfig,
}

impl AppState {
    pub fn new(access_key_service: Arc<dyn AccessKeyServiceTrait>, verify: VerifyConfig) -> Self {
        Self {
            access_key_service,
            verify,
        }
    }
}

/// Trait for access key service operations
#[async_trait::async_trait]
pub trait AccessKeyServiceTrait: Send + Sync {
    async fn generate(&self) -> Result<KeyRecord, DomainError>;
    async fn get_stored(&self) -> Option<KeyRecord>;
    async fn get_current(&self) -> Result<KeyRecord, DomainError>;
    async fn verify(&self, candidate: &str) -> VerificationOutcome;
    fn status_of(&self, record: &KeyRecord) -> KeyStatus;
    async fn health_check(&self) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl AccessKeyServiceTrait for AccessKeyService {
    async fn generate(&self) -> Result<KeyRecord, DomainError> {
        AccessKeyService::generate(self).await
    }

    async fn get_stored(&self) -> Option<KeyRecord> {
        AccessKeyService::get_stored(self).await
    }

    async fn get_current(&self) -> Result<KeyRecord, DomainError> {
        AccessKeyService::get_current(self).await
    }

    async fn verify(&self, candidate: &str) -> VerificationOutcome {
        AccessKeyService::verify(self, candidate).await
    }

    fn status_of(&self, record: &KeyRecord) -> KeyStatus {
        AccessKeyService::status_of(self, record)
    }

    async fn health_check(&self) -> Result<(), DomainError> {
        AccessKeyService::health_check(self).await
    }
}
