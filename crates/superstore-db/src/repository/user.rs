//! # User Repository
//!
//! Registration and credential verification against the users table.
//!
//! ## Password Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Credential Verification Flow                          │
//! │                                                                         │
//! │  Sign-up: password ──► argon2 + random salt ──► PHC string ──► INSERT  │
//! │                                                                         │
//! │  Sign-in: SELECT password_hash WHERE name = ?                          │
//! │              │ (names are not unique; every candidate is checked)      │
//! │              ▼                                                          │
//! │          argon2 verify against each stored hash                        │
//! │              │                                                          │
//! │              ├── any match ──► credentials accepted                    │
//! │              └── none ───────► rejected                                │
//! │                                                                         │
//! │  Clear-text passwords never touch the store and never come back out.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The legacy application stored and compared passwords verbatim with a
//! `COUNT(*)` query. That was a defect, corrected here; the observable
//! outcomes (match / no match) are unchanged.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use superstore_core::Role;

/// Repository for user database operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Registers a new user, hashing the password before it is stored.
    ///
    /// Duplicate names are not prevented; the table carries no unique
    /// constraint, matching the legacy schema.
    ///
    /// ## Returns
    /// Rows affected (0 means the insert took no effect, which callers
    /// report as a failure).
    pub async fn create(&self, name: &str, password: &str, role: Role) -> DbResult<u64> {
        debug!(name = %name, role = %role, "Registering user");

        let password_hash = hash_password(password)?;

        let result = sqlx::query("INSERT INTO users (name, password_hash, role) VALUES (?1, ?2, ?3)")
            .bind(name)
            .bind(password_hash)
            .bind(role.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Checks a name/password pair against the stored credentials.
    ///
    /// Because names are not unique, every stored hash for the name is
    /// tried; any match grants access. Returns `false` for an unknown name.
    pub async fn verify_credentials(&self, name: &str, password: &str) -> DbResult<bool> {
        let hashes: Vec<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE name = ?1")
                .bind(name)
                .fetch_all(&self.pool)
                .await?;

        debug!(name = %name, candidates = hashes.len(), "Verifying credentials");

        Ok(hashes.iter().any(|hash| verify_password(password, hash)))
    }

    /// Counts users with the given name (for diagnostics and tests).
    pub async fn count_by_name(&self, name: &str) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE name = ?1")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Hashes a password for storage as an argon2 PHC string.
fn hash_password(password: &str) -> DbResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DbError::Internal(format!("Failed to hash password: {}", e)))?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string.
///
/// An unparsable stored hash counts as a non-match rather than an error.
fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

// =============================================================================
// Unit Tests
// =============================================================================
