//! Form name validation

/// Maximum length for form names in characters
pub const MAX_FORM_NAME_LENGTH: usize = 128;

/// Validation error for form names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormNameError {
    /// Name is empty or whitespace only
    Empty,
    /// Name exceeds maximum length
    TooLong,
    /// Name contains control characters
    InvalidCharacters,
}

impl std::fmt::Display for FormNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormNameError::Empty => write!(f, "is empty"),
            FormNameError::TooLong => write!(f, "exceeds {MAX_FORM_NAME_LENGTH} characters"),
            FormNameError::InvalidCharacters => write!(f, "contains control characters"),
        }
    }
}

/// Validate a form name
///
/// Checks:
/// - Not empty after trimming whitespace
/// - Does not exceed maximum length (128 characters)
/// - Contains no control characters (newlines included)
///
/// # Errors
///
/// Returns a `FormNameError` variant describing the validation failure.
pub fn validate_form_name(name: &str) -> Result<(), FormNameError> {
    if name.trim().is_empty() {
        return Err(FormNameError::Empty);
    }
    if name.chars().count() > MAX_FORM_NAME_LENGTH {
        return Err(FormNameError::TooLong);
    }
    if name.chars().any(char::is_control) {
        return Err(FormNameError::InvalidCharacters);
    }
    Ok(())
}
