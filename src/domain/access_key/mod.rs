//! Access key domain
//!
//! This module provides the key record, its expiry rules, verification
//! outcomes and the clock the lifecycle is measured against.

mod clock;
mod entity;
mod validation;

pub use clock::{Clock, SystemClock};
#[cfg(test)]
pub use clock::ManualClock;
pub use entity::{
    KeyRecord, KeyStatus, VerificationOutcome, DEFAULT_KEY_NAME, KEY_ALPHABET, KEY_LENGTH,
    KEY_TTL_SECS,
};
pub use validation::validate_candidate;
