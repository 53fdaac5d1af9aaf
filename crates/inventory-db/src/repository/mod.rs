//! # Repository Module
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.products().update(id, &payload)                            │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, payload)      INSERT                                │
//! │  ├── list(&self)                 SELECT                                │
//! │  ├── update(&self, id, payload)  UPDATE                                │
//! │  └── delete(&self, id)           DELETE                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite `products` table                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`ProductRepository`](product::ProductRepository) - the product statements

pub mod product;
