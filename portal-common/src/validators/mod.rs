//! Input validation functions
//!
//! Validators for form-definition fields. The editor collaborator can use them
//! for pre-validation; the form repository uses them for enforcement.

mod form_description;
mod form_name;
mod label;

pub use form_description::{
    FormDescriptionError, MAX_FORM_DESCRIPTION_LENGTH, validate_form_description,
};
pub use form_name::{FormNameError, MAX_FORM_NAME_LENGTH, validate_form_name};
pub use label::{LabelError, MAX_LABEL_LENGTH, validate_label};
