//! # Session (Navigation Controller)
//!
//! Owns "which screen is current" and performs the transitions between
//! them. Exactly one screen exists at a time; moving on constructs the next
//! screen and discards the previous one (the legacy app kept hidden windows
//! alive behind the visible one).
//!
//! ## Navigation Graph
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │     ┌──────────┐  to_sign_up / to_sign_in   ┌──────────┐               │
//! │     │ Sign-In  │ ◄────────────────────────► │ Sign-Up  │               │
//! │     └────┬─────┘                            └────┬─────┘               │
//! │          │ sign_in ──► Granted                   │ sign_up ──► Ok      │
//! │          ▼                                       │ (back to Sign-In)   │
//! │     ┌───────────┐         logout                 │                     │
//! │     │ Inventory │ ────────────────► Sign-In ◄────┘                     │
//! │     └───────────┘                                                      │
//! │                                                                         │
//! │  No identity is carried into the inventory screen; "logged in" just    │
//! │  means the inventory screen is the current one.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use superstore_db::Database;

use crate::error::AppResult;
use crate::screens::auth;
use crate::screens::{InventoryScreen, SignInOutcome};

/// The current screen.
pub enum Screen {
    SignIn,
    SignUp,
    Inventory(InventoryScreen),
}

impl Screen {
    /// Short name for prompts and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::SignIn => "sign-in",
            Screen::SignUp => "sign-up",
            Screen::Inventory(_) => "inventory",
        }
    }
}

/// The application session: a database handle and the current screen.
pub struct Session {
    db: Database,
    screen: Screen,
}

impl Session {
    /// Starts a session at the sign-in screen.
    pub fn new(db: Database) -> Self {
        Session {
            db,
            screen: Screen::SignIn,
        }
    }

    /// The current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Mutable access to the inventory screen, if it is current.
    pub fn inventory_mut(&mut self) -> Option<&mut InventoryScreen> {
        match &mut self.screen {
            Screen::Inventory(screen) => Some(screen),
            _ => None,
        }
    }

    /// Attempts sign-in; on success constructs the inventory screen (with
    /// its initial load) and makes it current.
    pub async fn sign_in(&mut self, username: &str, password: &str) -> AppResult<SignInOutcome> {
        let outcome = auth::sign_in(&self.db, username, password).await?;

        if outcome == SignInOutcome::Granted {
            let screen = InventoryScreen::open(self.db.clone()).await?;
            self.screen = Screen::Inventory(screen);
            info!("Navigated to inventory");
        }

        Ok(outcome)
    }

    /// Registers a new user; on success returns to the sign-in screen.
    pub async fn sign_up(
        &mut self,
        username: &str,
        password: &str,
        confirm_password: &str,
        role: &str,
    ) -> AppResult<()> {
        auth::sign_up(&self.db, username, password, confirm_password, role).await?;
        self.screen = Screen::SignIn;
        Ok(())
    }

    /// Switches from sign-in to the sign-up screen.
    pub fn to_sign_up(&mut self) {
        self.screen = Screen::SignUp;
    }

    /// Switches back to the sign-in screen without registering.
    pub fn to_sign_in(&mut self) {
        self.screen = Screen::SignIn;
    }

    /// Leaves the inventory screen, discarding it, and returns to sign-in.
    pub fn logout(&mut self) {
        info!("Logged out");
        self.screen = Screen::SignIn;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
