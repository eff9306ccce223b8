//! Helpers for turning [`validator::ValidationErrors`] into the per-field
//! message map used by the 422 envelope.

use std::collections::BTreeMap;

use validator::{ValidationError, ValidationErrors};

/// Groups human-readable messages per invalid field, in stable field order.
/// Falls back to a generic message for rules declared without one.
pub fn collect_field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("El campo {} no es válido", field))
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// The error appended when the email uniqueness pre-check fails.
pub fn duplicate_email_error() -> ValidationError {
    let mut error = ValidationError::new("unique");
    error.message = Some("El campo email ya está registrado".into());
    error
}
