//! Validation Utilities

use validator::{Validate, ValidationErrors};

use super::error::HarnessError;

/// Convert validation errors to HarnessError
pub fn validation_error(errors: ValidationErrors) -> HarnessError {
    let mut field_errors: Vec<(String, String)> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                (
                    field.to_string(),
                    e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                )
            })
        })
        .collect();
    field_errors.sort();

    let message = field_errors
        .first()
        .map(|(field, message)| format!("{}: {}", field, message))
        .unwrap_or_else(|| "Validation failed".into());

    HarnessError::Validation(message)
}

/// Validate a request payload before it goes on the wire
pub fn validate_request<T: Validate>(request: &T) -> Result<(), HarnessError> {
    request.validate().map_err(validation_error)
}
