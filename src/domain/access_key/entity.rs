//! Key record entity and verification outcomes

use std::fmt;

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

/// Number of characters in a generated key
pub const KEY_LENGTH: usize = 16;

/// Symbols a key is drawn from
pub const KEY_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Lifetime of a key, fixed at 24 hours from generation
pub const KEY_TTL_SECS: i64 = 24 * 60 * 60;

/// Backend name the current key is stored under
pub const DEFAULT_KEY_NAME: &str = "current_key";

/// The single persisted key record
///
/// Serializes as `{"key": "...", "expired": <unix seconds>}`, which is also
/// the shape returned by the key endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRecord {
    key: String,
    #[serde(deserialize_with = "deserialize_unix_seconds")]
    expired: i64,
}

impl KeyRecord {
    pub fn new(key: impl Into<String>, expired: i64) -> Self {
        Self {
            key: key.into(),
            expired,
        }
    }

    /// Creates a record for a key issued at `now`
    pub fn issued_at(key: impl Into<String>, now: i64) -> Self {
        Self::new(key, now + KEY_TTL_SECS)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Absolute UNIX timestamp after which the key is no longer valid
    pub fn expired(&self) -> i64 {
        self.expired
    }

    /// A key is still valid during the second it expires at
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expired
    }

    pub fn status_at(&self, now: i64) -> KeyStatus {
        if self.is_expired_at(now) {
            KeyStatus::Expired
        } else {
            KeyStatus::Valid
        }
    }

    /// Checks that the key has the generated length and alphabet
    pub fn is_well_formed(&self) -> bool {
        self.key.len() == KEY_LENGTH && self.key.bytes().all(|b| KEY_ALPHABET.contains(&b))
    }
}

/// Reads a UNIX timestamp written either as an integer or as a JSON float
///
/// Floats are floored. With whole-second clocks `now > floor(t)` holds
/// exactly when `now > t`, so expiry is unchanged.
fn deserialize_unix_seconds<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct UnixSecondsVisitor;

    impl Visitor<'_> for UnixSecondsVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a UNIX timestamp in seconds")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            let floored = v.floor();

            if floored.is_finite() && floored >= i64::MIN as f64 && floored < i64::MAX as f64 {
                Ok(floored as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(UnixSecondsVisitor)
}

/// Expiry status reported alongside a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStatus {
    Valid,
    Expired,
}

/// Result of checking a presented key against the stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationOutcome {
    Valid,
    Invalid,
    Expired,
}

impl VerificationOutcome {
    /// Compares `candidate` to the stored record at time `now`
    ///
    /// Comparison is exact: no trimming and case-sensitive. A matching key past
    /// its expiry is `Expired`, never `Invalid`.
    pub fn evaluate(stored: Option<&KeyRecord>, candidate: &str, now: i64) -> Self {
        match stored {
            Some(record) if record.key() == candidate => {
                if record.is_expired_at(now) {
                    Self::Expired
                } else {
                    Self::Valid
                }
            }
            _ => Self::Invalid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Expired => "expired",
        }
    }

    /// User-facing message for the outcome
    pub fn message(&self) -> &'static str {
        match self {
            Self::Valid => "Key valid",
            Self::Invalid => "Invalid key",
            Self::Expired => "Key expired",
        }
    }
}

impl std::fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
