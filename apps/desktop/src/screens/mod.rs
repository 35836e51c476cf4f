//! # Screens Module
//!
//! View-models for the application's screens.
//!
//! Each screen owns its state and exposes the operations its buttons would
//! trigger; rendering is left entirely to the shell. Operations take
//! `&mut self`, so a second submission cannot start while one is in flight.
//!
//! - [`auth`] - Sign-in and sign-up operations
//! - [`inventory`] - The product grid, the six-field form, and selection

pub mod auth;
pub mod inventory;

pub use auth::SignInOutcome;
pub use inventory::{Confirmation, Deletion, InventoryScreen, Mutation};
