//! # Domain Types
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────┐      │
//! │  │    Product      │   │  ProductPayload  │   │   WriteResult   │      │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────  │      │
//! │  │  id (i64)       │   │  name?           │   │  affectedRows   │      │
//! │  │  name           │   │  price?          │   │  insertId       │      │
//! │  │  price          │   │  (request body)  │   │  (ack of write) │      │
//! │  └─────────────────┘   └──────────────────┘   └─────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unchecked Request Bodies
//! The API does not enforce a body schema. [`ProductPayload`] keeps both
//! fields optional so a missing field reaches the database as `NULL` and is
//! rejected there, the same way any other storage failure is.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::price::parse_price;

// =============================================================================
// Product ID
// =============================================================================

/// Store-assigned product identifier.
///
/// Serialized as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product row as stored in the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Primary key, assigned by the store on creation.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Price in rupiah.
    pub price: f64,
}

// =============================================================================
// Product Payload
// =============================================================================

/// Body of `POST /products` and `PUT /products/:id`.
///
/// ## Leniency
/// - Missing or `null` fields deserialize to `None`
/// - `name` accepts a string, or a number written out as text
/// - `price` accepts a JSON number or a numeric string (`"15000"`)
/// - Any other value is treated like a missing field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(default, deserialize_with = "deserialize_lenient_name")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_lenient_price")]
    pub price: Option<f64>,
}

impl ProductPayload {
    /// Creates a payload with both fields present.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        ProductPayload {
            name: Some(name.into()),
            price: Some(price),
        }
    }

    /// Reads a raw request body.
    ///
    /// Anything that is not a JSON object (empty body, malformed JSON, an
    /// array) yields an empty payload, so the store decides what to reject.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).unwrap_or_default(),
            _ => ProductPayload::default(),
        }
    }
}

fn deserialize_lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn deserialize_lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => parse_price(&s),
        _ => None,
    })
}

// =============================================================================
// Write Result
// =============================================================================

/// Acknowledgement of a write statement, passed through to API clients.
///
/// `insert_id` is the generated id for an INSERT and `0` otherwise.
/// `affected_rows == 0` on an UPDATE or DELETE means the id did not exist;
/// it is not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    pub affected_rows: u64,
    pub insert_id: i64,
}

impl WriteResult {
    /// Returns the generated id, if this acknowledges an insert.
    pub fn inserted_id(&self) -> Option<ProductId> {
        (self.insert_id > 0).then_some(ProductId(self.insert_id))
    }

    /// Returns true when the statement matched no row.
    pub fn is_noop(&self) -> bool {
        self.affected_rows == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
