//! # superstore-db: Database Layer for SuperStore Inventory
//!
//! All SQLite access for the application lives here, behind repositories.
//!
//! ## Modules
//!
//! - [`pool`] - Connection pool configuration and the [`Database`] handle
//! - [`migrations`] - Embedded schema migrations
//! - [`repository`] - Product and user repositories
//! - [`error`] - Database error types
//!
//! ## Usage
//! ```rust,ignore
//! let db = Database::new(DbConfig::in_memory()).await?;
//! let rows = db.products().list_all().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
