//! Key endpoint payloads

use serde::{Deserialize, Serialize};

use crate::domain::{KeyRecord, KeyStatus, VerificationOutcome};

/// Query string of `GET /verify`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyQuery {
    pub key: Option<String>,
}

/// Response of `GET /get-key`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetKeyResponse {
    pub key: String,
    pub expire_time: i64,
    pub status: KeyStatus,
}

impl GetKeyResponse {
    pub fn new(record: &KeyRecord, status: KeyStatus) -> Self {
        Self {
            key: record.key().to_string(),
            expire_time: record.expired(),
            status,
        }
    }
}

/// Response of `GET /verify`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub status: VerificationOutcome,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl VerificationResponse {
    /// Builds the body for `outcome`; only expired keys carry a redirect
    pub fn new(outcome: VerificationOutcome, redirect_url: &str) -> Self {
        let redirect = match outcome {
            VerificationOutcome::Expired => Some(redirect_url.to_string()),
            VerificationOutcome::Valid | VerificationOutcome::Invalid => None,
        };

        Self {
            status: outcome,
            message: outcome.message().to_string(),
            redirect,
        }
    }
}
