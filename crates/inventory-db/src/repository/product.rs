//! # Product Repository
//!
//! The four product statements, each a single atomic statement:
//!
//! | Operation | SQL | Result |
//! |-----------|-----|--------|
//! | `create`  | `INSERT` | [`WriteResult`] with the generated id |
//! | `list`    | `SELECT` | every row, engine scan order |
//! | `update`  | `UPDATE ... WHERE id = ?` | [`WriteResult`], 0 rows if id is unknown |
//! | `delete`  | `DELETE ... WHERE id = ?` | [`WriteResult`], 0 rows if id is unknown |
//!
//! An unknown id is not an error. Callers read `affected_rows`.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StorageResult;
use inventory_core::{Product, ProductId, ProductPayload, WriteResult};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let ack = repo.create(&ProductPayload::new("Kopi Susu", 15000.0)).await?;
/// let products = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// Missing payload fields are bound as `NULL`; the table's `NOT NULL`
    /// constraints turn that into a [`StorageError`](crate::StorageError).
    pub async fn create(&self, payload: &ProductPayload) -> StorageResult<WriteResult> {
        debug!(name = ?payload.name, price = ?payload.price, "Inserting product");

        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?1, ?2)")
            .bind(payload.name.as_deref())
            .bind(payload.price)
            .execute(&self.pool)
            .await?;

        let ack = WriteResult {
            affected_rows: result.rows_affected(),
            insert_id: result.last_insert_rowid(),
        };

        debug!(id = ack.insert_id, "Product inserted");
        Ok(ack)
    }

    /// Returns every product, in the engine's default scan order.
    pub async fn list(&self) -> StorageResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>("SELECT id, name, price FROM products")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: ProductId) -> StorageResult<Option<Product>> {
        let product =
            sqlx::query_as::<_, Product>("SELECT id, name, price FROM products WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(product)
    }

    /// Overwrites name and price of the product with `id`.
    ///
    /// No matching row yields `affected_rows == 0`.
    pub async fn update(&self, id: ProductId, payload: &ProductPayload) -> StorageResult<WriteResult> {
        debug!(%id, "Updating product");

        let result = sqlx::query("UPDATE products SET name = ?1, price = ?2 WHERE id = ?3")
            .bind(payload.name.as_deref())
            .bind(payload.price)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            debug!(%id, "Update matched no product");
        }

        Ok(WriteResult {
            affected_rows: result.rows_affected(),
            insert_id: 0,
        })
    }

    /// Removes the product with `id`.
    ///
    /// No matching row yields `affected_rows == 0`.
    pub async fn delete(&self, id: ProductId) -> StorageResult<WriteResult> {
        debug!(%id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(WriteResult {
            affected_rows: result.rows_affected(),
            insert_id: 0,
        })
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> StorageResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
