//! # Domain Types
//!
//! Core domain types for the SuperStore inventory application.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  ProductDraft   │   │      Role       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  pid (i64, PK)  │   │  product_name   │   │  Admin          │       │
//! │  │  product_name   │   │  price          │   │  Manager        │       │
//! │  │  price?         │   │  mfg_date       │   │  Cashier        │       │
//! │  │  mfg_date?      │   │  expiry_date    │   └─────────────────┘       │
//! │  │  expiry_date?   │   │  quantity       │                             │
//! │  │  quantity?      │   │  packing        │                             │
//! │  │  packing?       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  Product      = a row as stored (legacy NULL cells representable)      │
//! │  ProductDraft = validated form output (all six fields concrete)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `pid` is assigned by the store on insert and immutable afterwards.
//! Every column except the key and the name is nullable at the store level;
//! the application always writes full rows, but reads tolerate NULL cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Product
// =============================================================================

/// A product row as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier. Immutable once created.
    pub pid: i64,

    /// Display name. The only column the application requires non-empty.
    pub product_name: String,

    /// Unit price as a whole number. The legacy schema enforced no sign
    /// constraint, and neither do we.
    pub price: Option<i64>,

    /// Manufacturing date.
    pub mfg_date: Option<NaiveDate>,

    /// Expiry date. Not checked against `mfg_date`.
    pub expiry_date: Option<NaiveDate>,

    /// Units on hand.
    pub quantity: Option<i64>,

    /// Packaging description, free text.
    pub packing: Option<String>,
}

// =============================================================================
// Product Draft
// =============================================================================

/// Validated form output, ready to be written to the store.
///
/// Produced only by [`crate::form::ProductForm::read`], which guarantees the
/// validation pipeline ran. `packing` may be the empty string; everything
/// else is concrete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub product_name: String,
    pub price: i64,
    pub mfg_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub quantity: i64,
    pub packing: String,
}

// =============================================================================
// Role
// =============================================================================

/// User role, a fixed closed set.
///
/// The legacy store data carries a misspelled "Maneger" value; parsing
/// accepts it and canonicalizes to [`Role::Manager`], so old rows keep
/// working while new rows are written with the correct spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    Cashier,
}

impl Role {
    /// All roles, in the order the sign-up screen offers them.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Cashier];

    /// Canonical stored form of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Cashier => "Cashier",
        }
    }

    /// Parses a role, case-insensitively, accepting the legacy misspelling.
    pub fn parse(text: &str) -> Result<Role, ValidationError> {
        match text.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            // "maneger" appears in data written by the legacy application
            "manager" | "maneger" => Ok(Role::Manager),
            "cashier" => Ok(Role::Cashier),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: Role::ALL.iter().map(|r| r.as_str().to_string()).collect(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::parse(role.as_str()).unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
        assert_eq!(Role::parse("CASHIER").unwrap(), Role::Cashier);
        assert_eq!(Role::parse("  Manager ").unwrap(), Role::Manager);
    }

    #[test]
    fn test_role_parse_accepts_legacy_misspelling() {
        // Rows written by the legacy application store "Maneger"
        assert_eq!(Role::parse("Maneger").unwrap(), Role::Manager);
        assert_eq!(Role::Manager.as_str(), "Manager");
    }

    #[test]
    fn test_role_parse_rejects_unknown() {
        let err = Role::parse("Janitor").unwrap_err();
        assert_eq!(err.field(), "role");
    }
}
