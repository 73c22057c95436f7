//! Field-level validation rules for response elements.
//!
//! Each rule is a pure function. Rules return the accepted value on
//! success so setters can validate and store in one step.

use crate::response::error::ValidationError;

/// Validates that a required text field is not empty.
///
/// Only the empty string is rejected; whitespace is left to the platform.
///
/// # Errors
///
/// Returns `ValidationError::EmptyField` naming `component` and `field`
/// when `value` is empty.
///
/// # Examples
///
/// ```
/// use palaver::response::validation::require_text;
///
/// assert!(require_text("basic card", "title", "Weather").is_ok());
/// assert!(require_text("basic card", "title", "").is_err());
/// ```
pub fn require_text(
    component: &'static str,
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let text = value.into();
    if text.is_empty() {
        return Err(ValidationError::empty_field(component, field));
    }
    Ok(text)
}
