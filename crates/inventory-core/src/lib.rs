//! # inventory-core: Domain Types for the Inventory Manager
//!
//! Everything the store, the API and the UI agree on lives here. The crate
//! has no I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/ui (terminal client)                       │   │
//! │  │      Product table ──► Add/Edit modal ──► Delete confirm        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP + JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/api (axum)                                 │   │
//! │  │      POST/GET /products   PUT/DELETE /products/:id              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ inventory-core (THIS CRATE) ★                      │   │
//! │  │   types: Product, ProductId, ProductPayload, WriteResult        │   │
//! │  │   price: rupiah formatting, lenient parsing                     │   │
//! │  │   validation: required-field checks for the form                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 inventory-db (Product Store)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and the store result
//! - [`price`] - Display formatting and parsing of prices
//! - [`error`] - Validation error types
//! - [`validation`] - Required-field checks used by the UI form
//!
//! ## Example Usage
//!
//! ```rust
//! use inventory_core::price::format_rupiah;
//!
//! assert_eq!(format_rupiah(15000.0), "Rp 15.000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;
