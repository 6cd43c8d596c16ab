//! Access key infrastructure implementations
//!
//! Key generation, the store adapter for the key record, and the lifecycle
//! service built on top of them.

mod generator;
mod record_store;
mod service;

pub use generator::KeyGenerator;
pub use record_store::{decode_record, KeyRecordStore, RecordDecodeError};
pub use service::AccessKeyService;
