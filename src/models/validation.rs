// Field-level checks shared by the create/update payloads.

use thiserror::Error;

/// First constraint a payload violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is not a valid email address")]
    InvalidEmail { field: &'static str },
}

pub fn required(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    max_len(field, value, max)
}

pub fn optional(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ValidationError> {
    match value {
        Some(v) => max_len(field, v, max),
        None => Ok(()),
    }
}

pub fn max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

// Only the shape is checked: one '@' with something on both sides and a dot in the domain.
pub fn email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let valid: bool = match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail { field })
    }
}

/// Trims a string and turns an empty result into `None`.
pub fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
