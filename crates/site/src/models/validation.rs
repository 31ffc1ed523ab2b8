//! Input validation helpers.
//!
//! Validation runs at the boundary, before anything touches storage: every
//! mutating route parses its body into a typed input struct and calls
//! `validate()`, which returns either the cleaned input or a
//! [`ValidationError`]. Invalid input never reaches a repository.

use logiflow_core::EmailError;
use thiserror::Error;

/// A client-supplied field failed validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("{0} is required")]
    Required(&'static str),

    /// An email field was not a valid address.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Require a non-blank string field, returning it trimmed.
///
/// # Errors
///
/// Returns `ValidationError::Required` if the value is empty after trimming.
pub fn require(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_owned())
}

/// Like [`require`], for a field that may be absent in a partial update.
///
/// Absent stays absent; a supplied value must still be non-blank.
///
/// # Errors
///
/// Returns `ValidationError::Required` if a supplied value is blank.
pub fn require_if_present(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| require(field, v)).transpose()
}

/// Normalize an optional field: blank collapses to `None`.
#[must_use]
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
