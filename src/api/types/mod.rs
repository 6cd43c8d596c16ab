//! Request and response types for the key endpoints

pub mod error;
pub mod keys;

pub use error::{ApiError, ApiErrorResponse};
pub use keys::{GetKeyResponse, VerificationResponse, VerifyQuery};
