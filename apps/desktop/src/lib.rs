//! # SuperStore Desktop Library
//!
//! Application layer for the SuperStore inventory app: screen view-models,
//! navigation, and startup plumbing. The binary in `main.rs` is a thin
//! line-driven shell over this library; every behavior lives here and is
//! exercised by the tests, not by the shell.
//!
//! ## Module Organization
//! ```text
//! superstore_desktop/
//! ├── lib.rs          ◄─── You are here (startup & config plumbing)
//! ├── session.rs      ◄─── Navigation controller (current screen)
//! ├── screens/
//! │   ├── mod.rs      ◄─── Screen exports
//! │   ├── auth.rs     ◄─── Sign-in / sign-up operations
//! │   └── inventory.rs◄─── Grid, form, selection, CRUD operations
//! └── error.rs        ◄─── AppError for screen operations
//! ```

pub mod error;
pub mod screens;
pub mod session;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use error::{AppError, AppResult};
pub use session::{Screen, Session};
use superstore_db::{Database, DbConfig};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=superstore=trace` - Trace for superstore crates only
/// - Default: INFO level, sqlx at WARN
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,superstore=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path.
///
/// The path is the application's single externally supplied configuration
/// value (the legacy app scattered a hardcoded connection string in one
/// screen and a named configuration entry in the others).
///
/// ## Resolution Order
/// 1. `SUPERSTORE_DB_PATH` environment variable
/// 2. Platform data directory:
///    - **macOS**: `~/Library/Application Support/com.superstore.inventory/`
///    - **Windows**: `%APPDATA%\superstore\inventory\`
///    - **Linux**: `~/.local/share/superstore-inventory/`
pub fn database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Ok(path) = std::env::var("SUPERSTORE_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = directories::ProjectDirs::from("com", "superstore", "inventory")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("superstore.db"))
}

/// Connects to the database and starts a session at the sign-in screen.
///
/// ## Startup Sequence
/// 1. Resolve the database path
/// 2. Connect (SQLite, WAL mode) and run pending migrations
/// 3. Hand back a session showing the sign-in screen
pub async fn start() -> Result<Session, Box<dyn std::error::Error>> {
    let db_path = database_path()?;
    info!(path = %db_path.display(), "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and migrations applied");

    Ok(Session::new(db))
}
