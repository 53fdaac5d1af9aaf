//! # Schema Bootstrap
//!
//! Creates the single `products` table when it does not exist yet.
//!
//! This is one idempotent statement, not a migration system. Deployments that
//! manage the schema themselves turn it off with
//! [`DbConfig::create_schema(false)`](crate::DbConfig::create_schema).

use sqlx::SqlitePool;
use tracing::info;

use crate::error::StorageResult;

/// DDL for the `products` table.
///
/// `AUTOINCREMENT` keeps ids of deleted rows from being handed out again.
pub const PRODUCTS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name  TEXT    NOT NULL,
    price REAL    NOT NULL
)
"#;

/// Creates the `products` table if missing.
pub async fn ensure_schema(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::query(PRODUCTS_TABLE_DDL).execute(pool).await?;
    info!("products table ready");
    Ok(())
}
