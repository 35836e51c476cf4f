//! # Repository Module
//!
//! Database repository implementations for SuperStore Inventory.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen operation                                                       │
//! │       │                                                                 │
//! │       │  db.products().search_by_name("milk")                          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── search_by_name(&self, fragment)                                   │
//! │  ├── insert(&self, draft)                                              │
//! │  ├── update(&self, pid, draft)                                         │
//! │  └── delete(&self, pid)                                                │
//! │       │                                                                 │
//! │       │  Parameterized SQL                                              │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                        │
//! │  • Mutations report rows-affected so callers can distinguish           │
//! │    "nothing changed" from success and from failure                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Product CRUD and substring search
//! - [`user::UserRepository`] - Registration and credential verification

pub mod product;
pub mod user;
