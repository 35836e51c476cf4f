//! # Application Error Type
//!
//! Unified error type surfaced by screen operations.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Screen Operation Outcomes                           │
//! │                                                                         │
//! │  Errors (this type):                                                   │
//! │  ├── Validation         blank/unparsable input; no store access made   │
//! │  ├── PasswordMismatch   sign-up confirmation differs                   │
//! │  ├── SelectionRequired  Update/Delete without a selected row           │
//! │  ├── InsertFailed       insert affected zero rows (no store error)     │
//! │  └── Store              connectivity/query failure, reported verbatim  │
//! │                                                                         │
//! │  NOT errors (expressed in result enums instead):                       │
//! │  ├── Mutation::NothingChanged   update/delete hit zero rows            │
//! │  └── Deletion::Cancelled        user declined the confirmation         │
//! │                                                                         │
//! │  Every store failure is terminal for that one operation; the user      │
//! │  retries by re-issuing the action. No retry logic exists anywhere.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use superstore_core::ValidationError;
use superstore_db::DbError;

/// Errors surfaced by screen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input validation failed; no store access was attempted.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Sign-up password and confirmation differ.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Update/Delete requires a selected row.
    #[error("Please select a product from the table first")]
    SelectionRequired,

    /// An insert affected zero rows without a store error.
    #[error("Failed to write the new row")]
    InsertFailed,

    /// The store failed; the operation was aborted with no partial effect.
    #[error("Database error: {0}")]
    Store(#[from] DbError),
}

/// Result type for screen operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_convert() {
        let err: AppError = ValidationError::required("name").into();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(err.to_string(), "name is required");
    }

    #[test]
    fn test_store_errors_convert() {
        let err: AppError = DbError::PoolExhausted.into();
        assert!(matches!(err, AppError::Store(_)));
    }
}
