//! # Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inventory-core (this file)                                            │
//! │  └── ValidationError  - Form input failures (UI only)                  │
//! │                                                                         │
//! │  inventory-db                                                          │
//! │  └── StorageError     - Anything the database rejects                  │
//! │                                                                         │
//! │  apps/api                                                              │
//! │  └── ApiError         - StorageError rendered as HTTP 500              │
//! │                                                                         │
//! │  apps/ui                                                               │
//! │  └── UiError          - Failed HTTP calls, bad form input              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The server never validates input; [`ValidationError`] is raised only by
//! the UI before it sends a request.

use thiserror::Error;

/// Input validation errors for the product form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value could not be interpreted.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
