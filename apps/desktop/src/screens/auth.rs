//! # Auth Operations
//!
//! Sign-in and sign-up, the operations behind the two auth screens.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sign-in(username, password)                                            │
//! │       │                                                                 │
//! │       ├── either blank after trim? ──► Validation error, no store hit  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  verify_credentials (argon2 against every stored hash for the name)    │
//! │       │                                                                 │
//! │       ├── match ───► Granted (Session navigates to Inventory)          │
//! │       └── none ────► Denied                                            │
//! │                                                                         │
//! │  Sign-up(username, password, confirm, role)                            │
//! │       │                                                                 │
//! │       ├── any field blank / role unknown? ──► Validation error         │
//! │       ├── password ≠ confirm? ─────────────► PasswordMismatch          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  users.create (password hashed inside the repository)                  │
//! │       └── zero rows written ──► InsertFailed                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No identity is carried forward after a successful sign-in; "logged in"
//! is simply which screen the session shows.

use serde::Serialize;
use tracing::info;

use superstore_core::{Role, ValidationError};
use superstore_db::Database;

use crate::error::AppResult;
use crate::AppError;

/// Result of a sign-in attempt that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignInOutcome {
    /// Credentials matched a stored user.
    Granted,
    /// No stored user matched. Not an error; the screen stays put.
    Denied,
}

/// Checks a username/password pair against the store.
///
/// Both fields must be non-blank after trimming, otherwise a validation
/// error is returned without touching the store.
pub async fn sign_in(db: &Database, username: &str, password: &str) -> AppResult<SignInOutcome> {
    let username = username.trim();
    let password = password.trim();

    if username.is_empty() {
        return Err(ValidationError::required("username").into());
    }
    if password.is_empty() {
        return Err(ValidationError::required("password").into());
    }

    if db.users().verify_credentials(username, password).await? {
        info!(username = %username, "Sign-in granted");
        Ok(SignInOutcome::Granted)
    } else {
        info!(username = %username, "Sign-in denied");
        Ok(SignInOutcome::Denied)
    }
}

/// Registers a new user.
///
/// All four fields are required; the role must come from the closed set.
/// The password is hashed by the user repository before it is stored.
pub async fn sign_up(
    db: &Database,
    username: &str,
    password: &str,
    confirm_password: &str,
    role: &str,
) -> AppResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::required("username").into());
    }
    if password.trim().is_empty() {
        return Err(ValidationError::required("password").into());
    }
    if confirm_password.trim().is_empty() {
        return Err(ValidationError::required("confirm password").into());
    }
    let role = Role::parse(role).map_err(AppError::Validation)?;

    // Exact comparison, before any store access
    if password != confirm_password {
        return Err(AppError::PasswordMismatch);
    }

    let rows = db.users().create(username, password.trim(), role).await?;
    if rows == 0 {
        return Err(AppError::InsertFailed);
    }

    info!(username = %username, role = %role, "User registered");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
