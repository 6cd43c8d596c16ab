//! Infrastructure layer - External service implementations

pub mod access_key;
pub mod kv_store;
pub mod logging;
pub mod observability;
