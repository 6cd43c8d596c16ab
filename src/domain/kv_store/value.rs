//! Raw values as handed back by a backend

use serde_json::Value;

/// A value read from the backend before it is decoded into a domain type
///
/// Byte-oriented backends return `Text`. Backends whose client library
/// deserializes values on read return `Structured`.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Text(String),
    Structured(Value),
}

impl StoredValue {
    /// Resolves the value into JSON, or `None` when the text is not valid JSON
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Text(text) => serde_json::from_str(&text).ok(),
            Self::Structured(value) => Some(value),
        }
    }
}

impl From<String> for StoredValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for StoredValue {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}
