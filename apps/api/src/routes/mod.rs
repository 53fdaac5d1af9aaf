//! # Routes
//!
//! ```text
//! POST   /products      → ProductRepository::create
//! GET    /products      → ProductRepository::list
//! PUT    /products/:id  → ProductRepository::update
//! DELETE /products/:id  → ProductRepository::delete
//! GET    /health        → Database::health_check
//! ```
//!
//! CORS is fully open and every request is traced.

pub mod health;
pub mod products;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            axum::routing::put(products::update_product).delete(products::delete_product),
        )
        .route("/health", get(health::health_check))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
