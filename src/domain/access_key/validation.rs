//! Verification input validation

use crate::domain::DomainError;

/// Validates the key presented for verification
///
/// A missing or empty key is rejected. Anything else is passed through
/// untouched and left for the comparison to decide.
pub fn validate_candidate(candidate: Option<&str>) -> Result<&str, DomainError> {
    match candidate {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(DomainError::validation("Key parameter is required")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candidate() {
        assert_eq!(validate_candidate(Some("ABC")).unwrap(), "ABC");
    }

    #[test]
    fn test_untrimmed_candidate_passes() {
        assert_eq!(validate_candidate(Some(" ")).unwrap(), " ");
    }

    #[test]
    fn test_missing_candidate() {
        let result = validate_candidate(None);
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_empty_candidate() {
        let result = validate_candidate(Some(""));
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }
}
