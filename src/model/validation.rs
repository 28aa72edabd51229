use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{Field, FieldValues};

/// Per-field validation errors shown inline under each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    EmailFormat,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
}

/// Field-name → error mapping; absence of a key means the field is valid.
pub type FieldErrors = BTreeMap<Field, FieldError>;

// Deliberately looser than RFC 5322: one "@", a "." somewhere after it,
// no whitespace anywhere. Tests are keyed to this exact pattern.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Validates the name field: must be non-empty after trimming.
pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        Err(FieldError::NameRequired)
    } else {
        Ok(())
    }
}

/// Validates the email field.
///
/// The required check runs first: a trimmed-empty value reports
/// [`FieldError::EmailRequired`], never a format error. Otherwise the raw
/// (untrimmed) value must match the email pattern.
pub fn validate_email(email: &str) -> Result<(), FieldError> {
    if email.trim().is_empty() {
        Err(FieldError::EmailRequired)
    } else if !EMAIL_RE.is_match(email) {
        Err(FieldError::EmailFormat)
    } else {
        Ok(())
    }
}

/// Validates the subject field: must be non-empty after trimming.
pub fn validate_subject(subject: &str) -> Result<(), FieldError> {
    if subject.trim().is_empty() {
        Err(FieldError::SubjectRequired)
    } else {
        Ok(())
    }
}

/// Validates the message field: must be non-empty after trimming.
pub fn validate_message(message: &str) -> Result<(), FieldError> {
    if message.trim().is_empty() {
        Err(FieldError::MessageRequired)
    } else {
        Ok(())
    }
}

/// Validates all fields independently and returns the full error mapping.
///
/// Pure: no side effects, and an empty map means every field is valid. The
/// result is recomputed wholesale on each call, never merged with previous
/// results.
pub fn validate(values: &FieldValues) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if let Err(e) = validate_name(&values.name) {
        errors.insert(Field::Name, e);
    }
    if let Err(e) = validate_email(&values.email) {
        errors.insert(Field::Email, e);
    }
    if let Err(e) = validate_subject(&values.subject) {
        errors.insert(Field::Subject, e);
    }
    if let Err(e) = validate_message(&values.message) {
        errors.insert(Field::Message, e);
    }
    errors
}
