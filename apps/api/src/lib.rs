//! # Inventory API
//!
//! Stateless HTTP façade over the Product Store.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Inventory API                                  │
//! │                                                                         │
//! │  UI ───► HTTP (5000) ───► routes/products.rs ───► inventory-db ───► SQLite
//! │                                  │                                      │
//! │                                  └── StorageError ──► 500 + raw message │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables, see [`config::ApiConfig`]:
//! - `INVENTORY_HOST` / `INVENTORY_PORT` - listen address (default `0.0.0.0:5000`)
//! - `INVENTORY_DB_PATH` - SQLite file
//! - `INVENTORY_DB_MAX_CONNECTIONS` - pool size (default 1)
//! - `INVENTORY_DB_CREATE_SCHEMA` - create the products table on startup
//! - `RUST_LOG` - log filter

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use inventory_db::Database;

// Re-exports
pub use config::ApiConfig;
pub use error::ApiError;
pub use state::AppState;

/// Builds the full application router over `db`.
pub fn app(db: Database) -> Router {
    routes::router(AppState::new(db))
}
