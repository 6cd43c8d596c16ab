//! Store adapter for the key record
//!
//! Owns the single backend name the current key lives under and resolves
//! whatever representation the backend returns into a `KeyRecord`.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::access_key::KeyRecord;
use crate::domain::kv_store::{KvStore, StoredValue};
use crate::domain::DomainError;

/// Reasons a stored value could not be turned into a key record
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordDecodeError {
    #[error("stored text is not valid JSON")]
    NotJson,

    #[error("stored value has the wrong shape: {0}")]
    Malformed(String),

    #[error("stored key is not a well-formed key")]
    Corrupt,
}

/// Reads and writes the current key record through a `KvStore`
#[derive(Debug, Clone)]
pub struct KeyRecordStore {
    store: Arc<dyn KvStore>,
    name: String,
}

impl KeyRecordStore {
    pub fn new(store: Arc<dyn KvStore>, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes `record` as the current record, replacing any previous one
    pub async fn put(&self, record: &KeyRecord) -> Result<(), DomainError> {
        let data = serde_json::to_string(record).map_err(|e| {
            DomainError::store_write(format!("Failed to serialize key record: {}", e))
        })?;

        self.store.set(&self.name, data).await.map_err(|e| match e {
            DomainError::StoreWrite { .. } => e,
            other => DomainError::store_write(other.to_string()),
        })
    }

    /// Verifies the backend is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }

    /// Reads the current record
    ///
    /// Backend failures are returned as `StoreRead`. A value that cannot be
    /// decoded is reported as absent.
    pub async fn fetch(&self) -> Result<Option<KeyRecord>, DomainError> {
        let stored = self.store.get(&self.name).await.map_err(|e| match e {
            DomainError::StoreRead { .. } => e,
            other => DomainError::store_read(other.to_string()),
        })?;

        let Some(stored) = stored else {
            debug!("No key record stored under '{}'", self.name);
            return Ok(None);
        };

        match decode_record(stored) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("Ignoring unreadable key record under '{}': {}", self.name, e);
                Ok(None)
            }
        }
    }
}

/// Resolves a raw backend value into a key record
///
/// Accepts the record as JSON text, as an already-structured value, as JSON
/// text that was itself encoded as a JSON string, and wrapped in a
/// `{"ok": true, "value": ...}` envelope.
pub fn decode_record(stored: StoredValue) -> Result<KeyRecord, RecordDecodeError> {
    let json = stored.into_json().ok_or(RecordDecodeError::NotJson)?;
    let json = unwrap_envelope(unquote(json)?)?;
    let json = unquote(json)?;

    let record: KeyRecord = serde_json::from_value(json)
        .map_err(|e| RecordDecodeError::Malformed(e.to_string()))?;

    if !record.is_well_formed() {
        return Err(RecordDecodeError::Corrupt);
    }

    Ok(record)
}

fn unquote(json: Value) -> Result<Value, RecordDecodeError> {
    match json {
        Value::String(text) => serde_json::from_str(&text).map_err(|_| RecordDecodeError::NotJson),
        other => Ok(other),
    }
}

fn unwrap_envelope(json: Value) -> Result<Value, RecordDecodeError> {
    let Value::Object(mut map) = json else {
        return Ok(json);
    };

    if !map.contains_key("ok") {
        return Ok(Value::Object(map));
    }

    let ok = matches!(map.get("ok"), Some(Value::Bool(true)));

    match (ok, map.remove("value")) {
        (true, Some(value)) => Ok(value),
        _ => Err(RecordDecodeError::Malformed(
            "envelope is not ok or has no value".to_string(),
        )),
    }
}
