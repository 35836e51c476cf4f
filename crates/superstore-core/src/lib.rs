//! # superstore-core: Pure Business Logic for SuperStore Inventory
//!
//! This crate is the heart of the inventory application. It contains the
//! validation pipeline, the input-state helper, and the domain types as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   SuperStore Inventory Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Screens (apps/desktop)                         │   │
//! │  │    Sign-In ──► Sign-Up ──► Inventory grid + six inputs          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ superstore-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   input   │  │   form    │  │   dates   │  │   │
//! │  │   │  Product  │  │FieldInput │  │ProductForm│  │  parsing  │  │   │
//! │  │   │   Role    │  │ touched   │  │ pipeline  │  │  formats  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                superstore-db (Database Layer)                   │   │
//! │  │            SQLite queries, migrations, repositories             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, Role)
//! - [`input`] - Per-field input state with explicit touched tracking
//! - [`form`] - The six-field product form and its validation pipeline
//! - [`dates`] - Locale-flexible calendar date parsing
//! - [`error`] - Validation error types

pub mod dates;
pub mod error;
pub mod form;
pub mod input;
pub mod types;

pub use error::ValidationError;
pub use form::ProductForm;
pub use input::FieldInput;
pub use types::{Product, ProductDraft, Role};
