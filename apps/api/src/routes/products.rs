//! # Product Routes
//!
//! Each handler runs exactly one store operation and serializes its result.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PUT /products/3  {"name": "Kopi Susu", "price": 18000}                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Path(ProductId(3)) + raw body bytes          (no validation)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products().update(3, &payload)                                     │
//! │       │                                                                 │
//! │       ├── Ok(ack)  ──► 200 {"affectedRows": 1, "insertId": 0}           │
//! │       └── Err(e)   ──► 500 {"code": "STORAGE_ERROR", "message": "..."}  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bodies are read as raw bytes whatever the `Content-Type`. A body that is
//! not a JSON object becomes an empty payload and fails in the store.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::error::ApiResult;
use crate::state::AppState;
use inventory_core::{Product, ProductId, ProductPayload, WriteResult};

/// `POST /products`
pub async fn create_product(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<WriteResult>> {
    let payload = ProductPayload::from_body(&body);
    let ack = state.db.products().create(&payload).await?;
    info!(id = ack.insert_id, "Product created");
    Ok(Json(ack))
}

/// `GET /products`
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.db.products().list().await?;
    Ok(Json(products))
}

/// `PUT /products/:id`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    body: Bytes,
) -> ApiResult<Json<WriteResult>> {
    let payload = ProductPayload::from_body(&body);
    let ack = state.db.products().update(id, &payload).await?;
    info!(%id, affected_rows = ack.affected_rows, "Product updated");
    Ok(Json(ack))
}

/// `DELETE /products/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> ApiResult<Json<WriteResult>> {
    let ack = state.db.products().delete(id).await?;
    info!(%id, affected_rows = ack.affected_rows, "Product deleted");
    Ok(Json(ack))
}

// =============================================================================
// Unit Tests
// =============================================================================
