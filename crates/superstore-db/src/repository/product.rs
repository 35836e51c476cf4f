//! # Product Repository
//!
//! Database operations for the products table.
//!
//! ## Key Operations
//! - Load the full product list (no ORDER BY: row order is store-defined
//!   and callers must not rely on it)
//! - Case-insensitive substring search on the product name
//! - Insert / full-row update / delete, keyed by `pid`
//!
//! Mutations return the number of rows affected rather than an error on
//! zero: the screens report "nothing changed" as an informational outcome,
//! distinct from both success and failure.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use superstore_core::{Product, ProductDraft};

const SELECT_COLUMNS: &str =
    "SELECT pid, product_name, price, mfg_date, expiry_date, quantity, packing FROM products";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let all = repo.list_all().await?;
/// let hits = repo.search_by_name("milk").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Fetches every product row.
    ///
    /// No ORDER BY, matching the legacy query: the grid displays rows in
    /// whatever order the store returns them.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Loaded product list");
        Ok(products)
    }

    /// Searches products whose name contains the fragment.
    ///
    /// Unanchored `LIKE '%fragment%'`; SQLite's LIKE is case-insensitive
    /// for ASCII by default, which is the collation behavior the legacy
    /// application relied on. An empty result set is a normal outcome.
    pub async fn search_by_name(&self, fragment: &str) -> DbResult<Vec<Product>> {
        debug!(fragment = %fragment, "Searching products by name");

        let pattern = format!("%{}%", fragment);
        let products =
            sqlx::query_as::<_, Product>(&format!("{SELECT_COLUMNS} WHERE product_name LIKE ?1"))
                .bind(pattern)
                .fetch_all(&self.pool)
                .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Gets a product by its store-assigned id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_pid(&self, pid: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!("{SELECT_COLUMNS} WHERE pid = ?1"))
            .bind(pid)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Inserts a new product row. The store assigns the pid.
    ///
    /// ## Returns
    /// The number of rows affected (0 means the insert took no effect,
    /// which callers report as a failure).
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<u64> {
        debug!(name = %draft.product_name, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (product_name, price, mfg_date, expiry_date, quantity, packing)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&draft.product_name)
        .bind(draft.price)
        .bind(draft.mfg_date)
        .bind(draft.expiry_date)
        .bind(draft.quantity)
        .bind(&draft.packing)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Replaces all six fields of the row matching `pid`.
    ///
    /// ## Returns
    /// Rows affected; 0 means no row with that pid exists (or nothing
    /// changed), which callers surface as an informational outcome.
    pub async fn update(&self, pid: i64, draft: &ProductDraft) -> DbResult<u64> {
        debug!(pid = %pid, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE products SET
                product_name = ?2,
                price = ?3,
                mfg_date = ?4,
                expiry_date = ?5,
                quantity = ?6,
                packing = ?7
            WHERE pid = ?1
            "#,
        )
        .bind(pid)
        .bind(&draft.product_name)
        .bind(draft.price)
        .bind(draft.mfg_date)
        .bind(draft.expiry_date)
        .bind(draft.quantity)
        .bind(&draft.packing)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes the row matching `pid`. Hard delete, no tombstone.
    ///
    /// ## Returns
    /// Rows affected; 0 means the row was already gone.
    pub async fn delete(&self, pid: i64) -> DbResult<u64> {
        debug!(pid = %pid, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE pid = ?1")
            .bind(pid)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts product rows (for diagnostics and tests).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    fn milk_draft() -> ProductDraft {
        ProductDraft {
            product_name: "Milk".to_string(),
            price: 50,
            mfg_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            quantity: 10,
            packing: "1L".to_string(),
        }
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_pid() {
        let db = test_db().await;
        let repo = db.products();

        assert_eq!(repo.insert(&milk_draft()).await.unwrap(), 1);

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert!(row.pid > 0);
        assert_eq!(row.product_name, "Milk");
        assert_eq!(row.price, Some(50));
        assert_eq!(row.quantity, Some(10));
        assert_eq!(row.mfg_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(row.expiry_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(row.packing.as_deref(), Some("1L"));
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let db = test_db().await;
        let repo = db.products();

        let mut abcde = milk_draft();
        abcde.product_name = "Abcde".to_string();
        let mut xyz = milk_draft();
        xyz.product_name = "xyz".to_string();
        repo.insert(&abcde).await.unwrap();
        repo.insert(&xyz).await.unwrap();

        let hits = repo.search_by_name("abc").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].product_name, "Abcde");

        // No match is an empty set, not an error
        let hits = repo.search_by_name("qqq").await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&milk_draft()).await.unwrap();
        let pid = repo.list_all().await.unwrap()[0].pid;

        let mut updated = milk_draft();
        updated.product_name = "Whole Milk".to_string();
        updated.price = 60;
        assert_eq!(repo.update(pid, &updated).await.unwrap(), 1);

        let row = repo.get_by_pid(pid).await.unwrap().unwrap();
        assert_eq!(row.product_name, "Whole Milk");
        assert_eq!(row.price, Some(60));
    }

    #[tokio::test]
    async fn test_update_absent_pid_affects_zero_rows() {
        let db = test_db().await;
        assert_eq!(db.products().update(999, &milk_draft()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let db = test_db().await;
        let repo = db.products();

        repo.insert(&milk_draft()).await.unwrap();
        let pid = repo.list_all().await.unwrap()[0].pid;

        assert_eq!(repo.delete(pid).await.unwrap(), 1);
        assert!(repo.get_by_pid(pid).await.unwrap().is_none());

        // Repeated delete on the now-absent pid: zero rows, not an error
        assert_eq!(repo.delete(pid).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_null_cells_round_trip() {
        let db = test_db().await;
        let repo = db.products();

        // Rows imported from the legacy database can carry NULL cells
        sqlx::query("INSERT INTO products (product_name) VALUES ('Legacy')")
            .execute(db.pool())
            .await
            .unwrap();

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].product_name, "Legacy");
        assert_eq!(rows[0].price, None);
        assert_eq!(rows[0].mfg_date, None);
        assert_eq!(rows[0].packing, None);
    }
}
