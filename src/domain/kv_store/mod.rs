//! Key-value store domain - Abstraction over the persistent backend

mod repository;
mod value;

pub use repository::KvStore;
pub use value::StoredValue;

#[cfg(test)]
pub use repository::MockKvStore;
