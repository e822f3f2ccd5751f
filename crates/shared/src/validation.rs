//! Common validation utilities.

use validator::ValidationError;

/// Validates that a string is not blank (empty or whitespace-only).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that an HTML template body is non-empty.
pub fn validate_html_body(html: &str) -> Result<(), ValidationError> {
    if html.trim().is_empty() {
        let mut err = ValidationError::new("html_body");
        err.message = Some("Template HTML must not be empty".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_blank_accepts_text() {
        assert!(validate_not_blank("Spring Sale").is_ok());
    }

    #[test]
    fn test_not_blank_rejects_empty() {
        assert!(validate_not_blank("").is_err());
    }

    #[test]
    fn test_not_blank_rejects_whitespace() {
        assert!(validate_not_blank("   \t ").is_err());
    }

    #[test]
    fn test_html_body_rejects_empty() {
        assert!(validate_html_body("").is_err());
        assert!(validate_html_body("<p>hi</p>").is_ok());
    }
}
