//! # Error Types
//!
//! Validation errors for the product form and the auth screens.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  superstore-core errors (this file)                                    │
//! │  └── ValidationError  - Input validation failures, per field           │
//! │                                                                         │
//! │  superstore-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  App errors (apps/desktop)                                             │
//! │  └── AppError         - What the screens surface to the user           │
//! │                                                                         │
//! │  Flow: ValidationError → AppError → user-visible message               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant carries the offending field name
//! 3. A validation failure means no store access was attempted

use thiserror::Error;

/// Input validation errors.
///
/// A rejected field stops the whole operation: first failure wins and no
/// later field is inspected. Blank numeric and date fields surface as the
/// parse error for that field, matching how an empty string fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value does not parse as a whole number.
    #[error("{field} must be a valid integer")]
    InvalidInteger { field: String },

    /// Field value does not parse as a calendar date in any accepted format.
    #[error("{field} must be a valid date (e.g. YYYY-MM-DD)")]
    InvalidDate { field: String },

    /// Value is not in the allowed set (e.g. an unknown role).
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed {
        field: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Creates an InvalidInteger error for the given field.
    pub fn invalid_integer(field: impl Into<String>) -> Self {
        ValidationError::InvalidInteger {
            field: field.into(),
        }
    }

    /// Creates an InvalidDate error for the given field.
    pub fn invalid_date(field: impl Into<String>) -> Self {
        ValidationError::InvalidDate {
            field: field.into(),
        }
    }

    /// The field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidInteger { field }
            | ValidationError::InvalidDate { field }
            | ValidationError::NotAllowed { field, .. } => field,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::invalid_integer("price");
        assert_eq!(err.to_string(), "price must be a valid integer");

        let err = ValidationError::invalid_date("mfgdate");
        assert_eq!(err.to_string(), "mfgdate must be a valid date (e.g. YYYY-MM-DD)");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(ValidationError::required("username").field(), "username");
        assert_eq!(ValidationError::invalid_date("expdate").field(), "expdate");
    }
}
