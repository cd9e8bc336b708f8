//! Short label validation
//!
//! Used for the period and type labels of a form definition.

/// Maximum length for labels in characters
pub const MAX_LABEL_LENGTH: usize = 64;

/// Validation error for labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// Label is empty or whitespace only
    Empty,
    /// Label exceeds maximum length
    TooLong,
    /// Label contains control characters
    InvalidCharacters,
}

impl std::fmt::Display for LabelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelError::Empty => write!(f, "is empty"),
            LabelError::TooLong => write!(f, "exceeds {MAX_LABEL_LENGTH} characters"),
            LabelError::InvalidCharacters => write!(f, "contains control characters"),
        }
    }
}

/// Validate a short label
///
/// # Errors
///
/// Returns a `LabelError` variant describing the validation failure.
pub fn validate_label(label: &str) -> Result<(), LabelError> {
    if label.trim().is_empty() {
        return Err(LabelError::Empty);
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(LabelError::TooLong);
    }
    if label.chars().any(char::is_control) {
        return Err(LabelError::InvalidCharacters);
    }
    Ok(())
}
