//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← keeps the driver message verbatim         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (apps/api) ← HTTP 500, message passed through                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI shows one generic failure notification                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The variants only record where the failure happened. Callers are not
//! expected to branch on them; every variant maps to the same HTTP status.

use thiserror::Error;

/// A failure reported by the database engine or driver.
///
/// `Display` yields the raw driver message, unmodified.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// Could not reach the database (open failure, closed pool, I/O).
    #[error("{0}")]
    Connection(String),

    /// The engine rejected a statement (constraint violation, bad SQL, ...).
    #[error("{0}")]
    Query(String),
}

impl StorageError {
    /// Returns the raw driver message.
    pub fn message(&self) -> &str {
        match self {
            StorageError::Connection(msg) | StorageError::Query(msg) => msg,
        }
    }
}

/// Convert sqlx errors to StorageError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database                → Query (engine message only)
/// PoolTimedOut / PoolClosed / Io / Tls → Connection
/// Other                                → Query
/// ```
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => StorageError::Query(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => StorageError::Connection(err.to_string()),

            _ => StorageError::Query(err.to_string()),
        }
    }
}

/// Result type for store operations.
pub type StorageResult<T> = Result<T, StorageError>;
