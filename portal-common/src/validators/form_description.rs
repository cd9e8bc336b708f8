//! Form description validation

/// Maximum length for form descriptions in characters
pub const MAX_FORM_DESCRIPTION_LENGTH: usize = 2048;

/// Validation error for form descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormDescriptionError {
    /// Description exceeds maximum length
    TooLong,
    /// Description contains control characters other than newline or tab
    InvalidCharacters,
}

impl std::fmt::Display for FormDescriptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormDescriptionError::TooLong => write!(f, "exceeds {MAX_FORM_DESCRIPTION_LENGTH} characters"),
            FormDescriptionError::InvalidCharacters => write!(f, "contains control characters"),
        }
    }
}

/// Validate a form description
///
/// Empty descriptions are allowed. Newlines and tabs are allowed; other
/// control characters are not.
///
/// # Errors
///
/// Returns a `FormDescriptionError` variant describing the validation failure.
pub fn validate_form_description(description: &str) -> Result<(), FormDescriptionError> {
    if description.chars().count() > MAX_FORM_DESCRIPTION_LENGTH {
        return Err(FormDescriptionError::TooLong);
    }
    if description
        .chars()
        .any(|ch| ch.is_control() && ch != '\n' && ch != '\t')
    {
        return Err(FormDescriptionError::InvalidCharacters);
    }
    Ok(())
}
