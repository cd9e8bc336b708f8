//! Form definitions
//!
//! A form definition is a reusable template (name, responsible role, fields,
//! lifecycle period, type) that is later instantiated as a report or a
//! request. Only the number of fields matters here; each field entry is kept
//! as an opaque JSON value so it round-trips untouched.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::validators::{
    FormDescriptionError, FormNameError, LabelError, validate_form_description,
    validate_form_name, validate_label,
};

/// Stable identifier of a form definition within its repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(pub u64);

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a form definition is instantiated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormCategory {
    /// Periodic report filed by staff
    Report,
    /// Application (request) submitted by a user
    Request,
}

/// A persisted form template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    /// Assigned by the repository on insert; `None` only for a new draft
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<FormId>,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Role responsible for processing instances of the form
    pub responsible: Role,

    /// Field specs (schema is owned by the editor)
    #[serde(default)]
    pub fields: Vec<serde_json::Value>,

    /// Lifecycle period label (e.g. "Ежемесячно")
    pub period: String,

    /// Type or category label
    #[serde(rename = "type")]
    pub form_type: String,
}

/// Validation error for a whole form definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Name(FormNameError),
    Description(FormDescriptionError),
    Period(LabelError),
    Type(LabelError),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::Name(e) => write!(f, "name: {e}"),
            FormError::Description(e) => write!(f, "description: {e}"),
            FormError::Period(e) => write!(f, "period: {e}"),
            FormError::Type(e) => write!(f, "type: {e}"),
        }
    }
}

impl std::error::Error for FormError {}

impl FormDefinition {
    /// Number of fields in the template
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Validate the user-editable fields
    ///
    /// # Errors
    ///
    /// Returns the first failing field as a `FormError`.
    pub fn validate(&self) -> Result<(), FormError> {
        validate_form_name(&self.name).map_err(FormError::Name)?;
        validate_form_description(&self.description).map_err(FormError::Description)?;
        validate_label(&self.period).map_err(FormError::Period)?;
        validate_label(&self.form_type).map_err(FormError::Type)?;
        Ok(())
    }
}
