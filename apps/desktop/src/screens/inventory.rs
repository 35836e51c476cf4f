//! # Inventory Screen
//!
//! The view-model behind the single-table CRUD screen: a result grid, the
//! six-field product form, and the current selection.
//!
//! ## Selection State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────────┐   select_row(i) with valid pid   ┌──────────────┐   │
//! │   │ NoSelection  │ ───────────────────────────────► │ RowSelected  │   │
//! │   │ (None)       │                                  │ (Some(pid))  │   │
//! │   └──────────────┘ ◄─────────────────────────────── └──────┬───────┘   │
//! │          ▲           successful Add/Update/Delete,         │           │
//! │          │           or explicit reset                     │           │
//! │          └─────────────────────────────────────────────────┘           │
//! │                                                                         │
//! │   RowSelected ──► RowSelected on clicking a different row              │
//! │   (replaces the selection without leaving the state)                   │
//! │                                                                         │
//! │   At most one product is selected at a time.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation takes `&mut self`: a second submission cannot start
//! while one is in flight, which is how rapid double-clicks are serialized.
//! Each store call is synchronous from the screen's point of view and is
//! its own auto-committed statement.

use serde::Serialize;
use tracing::{debug, info};

use superstore_core::{Product, ProductForm, ValidationError};
use superstore_db::Database;

use crate::error::{AppError, AppResult};

/// Outcome of an update or delete that reached the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mutation {
    /// The row was written.
    Applied,
    /// Zero rows were affected: nothing to change or the row is gone.
    /// Informational, distinct from both success and failure.
    NothingChanged,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Deletion {
    Deleted,
    /// The row was already absent.
    NothingChanged,
    /// The user declined the confirmation prompt. A silent no-op.
    Cancelled,
}

/// The user's answer to the delete confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// The inventory screen's state.
pub struct InventoryScreen {
    db: Database,

    /// The six inputs, with placeholder semantics per field.
    pub form: ProductForm,

    /// The displayed result set, replaced wholesale by load and search.
    rows: Vec<Product>,

    /// The selected product's pid, if any. Owned here and mutated only
    /// through the transitions in the module docs.
    selection: Option<i64>,
}

impl InventoryScreen {
    /// Creates the screen and performs the initial load.
    pub async fn open(db: Database) -> AppResult<Self> {
        let mut screen = InventoryScreen {
            db,
            form: ProductForm::new(),
            rows: Vec::new(),
            selection: None,
        };
        screen.load().await?;
        Ok(screen)
    }

    /// The displayed rows.
    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    /// The selected product's pid, if a row is selected.
    pub fn selection(&self) -> Option<i64> {
        self.selection
    }

    /// Fetches all products and replaces the displayed result set.
    ///
    /// Row order is whatever the store returns; nothing downstream may
    /// rely on it.
    pub async fn load(&mut self) -> AppResult<()> {
        self.rows = self.db.products().list_all().await?;
        Ok(())
    }

    /// Searches by the name input's effective value.
    ///
    /// The fragment comes from the product-name field, as on the legacy
    /// screen; a field still in placeholder state contributes nothing and
    /// is rejected. An empty match set is a valid outcome (empty grid).
    pub async fn search(&mut self) -> AppResult<()> {
        let fragment = self
            .form
            .product_name
            .value()
            .ok_or_else(|| ValidationError::required("name"))?
            .to_string();

        self.rows = self.db.products().search_by_name(&fragment).await?;
        debug!(fragment = %fragment, hits = self.rows.len(), "Search complete");
        Ok(())
    }

    /// Validates the form and inserts a new product.
    ///
    /// On success the full list is reloaded and the form and selection are
    /// reset. An insert that affects zero rows is reported as a failure
    /// even though no store error occurred.
    pub async fn add(&mut self) -> AppResult<()> {
        let draft = self.form.read()?;

        let rows = self.db.products().insert(&draft).await?;
        if rows == 0 {
            return Err(AppError::InsertFailed);
        }

        info!(name = %draft.product_name, "Product added");
        self.reload_and_reset().await
    }

    /// Validates the form and replaces all six fields of the selected row.
    ///
    /// Requires a selection, checked before any field validation. Zero
    /// rows affected is the informational [`Mutation::NothingChanged`],
    /// which leaves the screen untouched.
    pub async fn update(&mut self) -> AppResult<Mutation> {
        let pid = self.selection.ok_or(AppError::SelectionRequired)?;
        let draft = self.form.read()?;

        let rows = self.db.products().update(pid, &draft).await?;
        if rows == 0 {
            info!(pid = %pid, "Update matched no row");
            return Ok(Mutation::NothingChanged);
        }

        info!(pid = %pid, "Product updated");
        self.reload_and_reset().await?;
        Ok(Mutation::Applied)
    }

    /// Deletes the selected row, after explicit confirmation.
    ///
    /// Declining the prompt is a normal, silent no-op. Deleting an
    /// already-absent row is informational, not an error.
    pub async fn delete(&mut self, confirmation: Confirmation) -> AppResult<Deletion> {
        let pid = self.selection.ok_or(AppError::SelectionRequired)?;

        if confirmation == Confirmation::Declined {
            return Ok(Deletion::Cancelled);
        }

        let rows = self.db.products().delete(pid).await?;
        if rows == 0 {
            info!(pid = %pid, "Delete matched no row");
            return Ok(Deletion::NothingChanged);
        }

        info!(pid = %pid, "Product deleted");
        self.reload_and_reset().await?;
        Ok(Deletion::Deleted)
    }

    /// Selects the displayed row at `index` and copies its cells into the
    /// form. A NULL cell resets that one input back to its placeholder.
    ///
    /// Returns the newly selected pid, or `None` if the index is out of
    /// range (in which case nothing changes).
    pub fn select_row(&mut self, index: usize) -> Option<i64> {
        let row = self.rows.get(index)?.clone();
        self.selection = Some(row.pid);
        self.form.fill_from(&row);
        debug!(pid = %row.pid, "Row selected");
        Some(row.pid)
    }

    /// Explicit reset: clears the selection and restores every input's
    /// placeholder.
    pub fn reset(&mut self) {
        self.form.reset();
        self.selection = None;
    }

    /// Post-mutation housekeeping: reload the list, reset inputs, clear
    /// the selection.
    async fn reload_and_reset(&mut self) -> AppResult<()> {
        self.load().await?;
        self.reset();
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use superstore_db::DbConfig;

    async fn open_screen() -> InventoryScreen {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        InventoryScreen::open(db).await.unwrap()
    }

    fn fill_milk(screen: &mut InventoryScreen) {
        screen.form.product_name.set("Milk");
        screen.form.price.set("50");
        screen.form.quantity.set("10");
        screen.form.mfg_date.set("2024-01-01");
        screen.form.expiry_date.set("2024-06-01");
        screen.form.packing.set("1L");
    }

    #[tokio::test]
    async fn test_add_end_to_end() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);

        screen.add().await.unwrap();

        // Reloaded list contains the submitted fields with a fresh pid
        assert_eq!(screen.rows().len(), 1);
        let row = &screen.rows()[0];
        assert!(row.pid > 0);
        assert_eq!(row.product_name, "Milk");
        assert_eq!(row.price, Some(50));
        assert_eq!(row.quantity, Some(10));
        assert_eq!(row.packing.as_deref(), Some("1L"));

        // Inputs back to placeholder, selection cleared
        assert!(screen.form.product_name.is_placeholder());
        assert_eq!(screen.selection(), None);
    }

    #[tokio::test]
    async fn test_add_validation_failure_writes_nothing() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);
        screen.form.price.set("cheap");

        let err = screen.add().await.unwrap_err();
        assert_eq!(err.to_string(), "price must be a valid integer");

        screen.load().await.unwrap();
        assert!(screen.rows().is_empty());
    }

    #[tokio::test]
    async fn test_update_requires_selection_before_validation() {
        let mut screen = open_screen().await;
        // Form is invalid too, but the selection check comes first
        let err = screen.update().await.unwrap_err();
        assert!(matches!(err, AppError::SelectionRequired));
    }

    #[tokio::test]
    async fn test_update_selected_row_alters_only_that_row() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);
        screen.add().await.unwrap();
        fill_milk(&mut screen);
        screen.form.product_name.set("Bread");
        screen.add().await.unwrap();

        let bread_pid = screen
            .rows()
            .iter()
            .find(|r| r.product_name == "Bread")
            .unwrap()
            .pid;
        let bread_index = screen
            .rows()
            .iter()
            .position(|r| r.pid == bread_pid)
            .unwrap();

        screen.select_row(bread_index).unwrap();
        screen.form.price.set("75");

        assert_eq!(screen.update().await.unwrap(), Mutation::Applied);

        let bread = screen.rows().iter().find(|r| r.pid == bread_pid).unwrap();
        assert_eq!(bread.price, Some(75));
        let milk = screen.rows().iter().find(|r| r.product_name == "Milk").unwrap();
        assert_eq!(milk.price, Some(50));
        assert_eq!(screen.selection(), None);
    }

    #[tokio::test]
    async fn test_update_vanished_row_is_informational() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);
        screen.add().await.unwrap();

        screen.select_row(0).unwrap();
        let pid = screen.selection().unwrap();

        // Row disappears behind the screen's back
        screen.db.products().delete(pid).await.unwrap();

        assert_eq!(screen.update().await.unwrap(), Mutation::NothingChanged);
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);
        screen.add().await.unwrap();

        // No selection yet
        let err = screen.delete(Confirmation::Confirmed).await.unwrap_err();
        assert!(matches!(err, AppError::SelectionRequired));

        screen.select_row(0).unwrap();
        let pid = screen.selection().unwrap();

        // Declining the prompt is a silent no-op; selection survives
        assert_eq!(
            screen.delete(Confirmation::Declined).await.unwrap(),
            Deletion::Cancelled
        );
        assert_eq!(screen.selection(), Some(pid));
        assert_eq!(screen.rows().len(), 1);

        assert_eq!(
            screen.delete(Confirmation::Confirmed).await.unwrap(),
            Deletion::Deleted
        );
        assert!(screen.rows().is_empty());
        assert_eq!(screen.selection(), None);

        // Repeating the delete on the now-absent pid: informational, no crash
        screen.selection = Some(pid);
        assert_eq!(
            screen.delete(Confirmation::Confirmed).await.unwrap(),
            Deletion::NothingChanged
        );
    }

    #[tokio::test]
    async fn test_search_by_name_fragment() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);
        screen.form.product_name.set("Abcde");
        screen.add().await.unwrap();
        fill_milk(&mut screen);
        screen.form.product_name.set("xyz");
        screen.add().await.unwrap();

        screen.form.product_name.set("abc");
        screen.search().await.unwrap();
        assert_eq!(screen.rows().len(), 1);
        assert_eq!(screen.rows()[0].product_name, "Abcde");

        // No hits: empty grid, not an error
        screen.form.product_name.set("nothing-here");
        screen.search().await.unwrap();
        assert!(screen.rows().is_empty());
    }

    #[tokio::test]
    async fn test_search_requires_a_name_fragment() {
        let mut screen = open_screen().await;
        let err = screen.search().await.unwrap_err();
        assert_eq!(err.to_string(), "name is required");
    }

    #[tokio::test]
    async fn test_select_row_fills_form_and_null_cells_reset() {
        let mut screen = open_screen().await;

        // A legacy row with NULL cells
        sqlx::query("INSERT INTO products (product_name, price) VALUES ('Legacy', 5)")
            .execute(screen.db.pool())
            .await
            .unwrap();
        screen.load().await.unwrap();

        let pid = screen.select_row(0).unwrap();
        assert_eq!(screen.selection(), Some(pid));
        assert_eq!(screen.form.product_name.value(), Some("Legacy"));
        assert_eq!(screen.form.price.value(), Some("5"));
        // NULL cells put those inputs back into placeholder state
        assert!(screen.form.quantity.is_placeholder());
        assert!(screen.form.packing.is_placeholder());
    }

    #[tokio::test]
    async fn test_clicking_another_row_replaces_selection() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);
        screen.add().await.unwrap();
        fill_milk(&mut screen);
        screen.form.product_name.set("Bread");
        screen.add().await.unwrap();

        let first = screen.select_row(0).unwrap();
        let second = screen.select_row(1).unwrap();
        assert_ne!(first, second);
        assert_eq!(screen.selection(), Some(second));
    }

    #[tokio::test]
    async fn test_select_row_out_of_range_changes_nothing() {
        let mut screen = open_screen().await;
        assert_eq!(screen.select_row(3), None);
        assert_eq!(screen.selection(), None);
    }

    #[tokio::test]
    async fn test_explicit_reset() {
        let mut screen = open_screen().await;
        fill_milk(&mut screen);
        screen.add().await.unwrap();
        screen.select_row(0).unwrap();

        screen.reset();
        assert_eq!(screen.selection(), None);
        assert!(screen.form.product_name.is_placeholder());
    }
}
