use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Store read error: {message}")]
    StoreRead { message: String },

    #[error("Store write error: {message}")]
    StoreWrite { message: String },

    #[error("Key generation error: {message}")]
    Generation { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn store_read(message: impl Into<String>) -> Self {
        Self::StoreRead {
            message: message.into(),
        }
    }

    pub fn store_write(message: impl Into<String>) -> Self {
        Self::StoreWrite {
            message: message.into(),
        }
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let error = DomainError::configuration("Failed to connect to Redis");
        assert_eq!(
            error.to_string(),
            "Configuration error: Failed to connect to Redis"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Key parameter is required");
        assert_eq!(
            error.to_string(),
            "Validation error: Key parameter is required"
        );
    }

    #[test]
    fn test_store_errors() {
        let read = DomainError::store_read("connection reset");
        let write = DomainError::store_write("connection reset");

        assert_eq!(read.to_string(), "Store read error: connection reset");
        assert_eq!(write.to_string(), "Store write error: connection reset");
    }

    #[test]
    fn test_generation_error() {
        let error = DomainError::generation("Failed to persist key");
        assert_eq!(
            error.to_string(),
            "Key generation error: Failed to persist key"
        );
    }
}
