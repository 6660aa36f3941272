//! Input validation for request parameters and bodies.
//!
//! Handlers call these before touching the echo transform or the
//! database, so a rejected request never reaches either.

use miette::Diagnostic;
use thiserror::Error;

/// A request input failed a precondition.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field}: must not be null")]
    #[diagnostic(code(echo_notes::api::validation::missing))]
    Missing { field: &'static str },

    #[error("{field}: must not be blank")]
    #[diagnostic(code(echo_notes::api::validation::blank))]
    Blank { field: &'static str },

    #[error("Malformed request: {reason}")]
    #[diagnostic(code(echo_notes::api::validation::malformed))]
    Malformed { reason: String },
}

/// True if `value` is empty or contains only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Require `value` to be present and not blank.
///
/// Returns the value untouched; trimming is only used for the check.
pub fn require_non_blank<'a>(
    field: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(v) if is_blank(v) => Err(ValidationError::Blank { field }),
        Some(v) => Ok(v),
    }
}
