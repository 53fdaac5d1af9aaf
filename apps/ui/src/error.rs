//! # UI Error Type
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP call fails ──► UiError::Http / UiError::Status                   │
//! │                           │                                             │
//! │                           ▼                                             │
//! │                  one generic failure notice                             │
//! │                                                                         │
//! │  Form input bad  ──► UiError::Validation ──► notice with the reason    │
//! │                                                                         │
//! │  Command not valid in the current view ──► printed, nothing sent       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! API failures are never classified for the user. The variants exist for
//! logging only.

use inventory_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// Transport failure (connection refused, timeout, bad JSON).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The form input is incomplete.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A modal is open; close it first.
    #[error("Finish or cancel the open form first")]
    ModalOpen,

    /// The command needs an open form.
    #[error("No form is open")]
    NoModal,

    /// Row number outside the displayed table.
    #[error("No product in row {0}")]
    NoSuchRow(usize),

    /// Terminal I/O failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl UiError {
    /// True for failures that came from talking to the API.
    pub fn is_api_failure(&self) -> bool {
        matches!(self, UiError::Http(_) | UiError::Status { .. })
    }
}

pub type UiResult<T> = Result<T, UiError>;
