//! # State Module
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    UI State                                             │
//! │                                                                         │
//! │  ┌──────────────────────┐      ┌──────────────────────────────┐        │
//! │  │   products cache     │      │   ViewState                  │        │
//! │  │   Vec<Product>       │      │   List | Creating | Editing  │        │
//! │  │   replaced wholesale │      │   (form lives in the modal)  │        │
//! │  │   after each write   │      │                              │        │
//! │  └──────────────────────┘      └──────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod view;

pub use view::{ProductForm, ViewState};
