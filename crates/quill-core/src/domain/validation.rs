use crate::error::DomainError;

/// Presence check: blank (empty or whitespace-only) values are rejected.
pub fn require_present(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_rejected() {
        assert!(require_present("title", "").is_err());
        assert!(require_present("title", "   \t").is_err());
        assert!(require_present("title", "x").is_ok());
    }

    #[test]
    fn test_error_names_the_field() {
        let err = require_present("email", "").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: email can't be blank");
    }
}
