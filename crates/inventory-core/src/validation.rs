//! # Validation Module
//!
//! Required-field checks for the product form.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Layer 1: UI form (THIS MODULE)                                        │
//! │  ├── name must not be blank                                            │
//! │  └── price must be present and numeric                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: API                                                          │
//! │  └── nothing, bodies are passed through                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database                                                     │
//! │  └── NOT NULL constraints on name and price                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::price::parse_price;
use crate::types::ProductPayload;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use inventory_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Kopi Susu").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }
    Ok(())
}

/// Validates price text and returns the parsed value.
pub fn validate_price_input(input: &str) -> ValidationResult<f64> {
    if input.trim().is_empty() {
        return Err(ValidationError::required("price"));
    }

    parse_price(input).ok_or_else(|| ValidationError::invalid_format("price", "must be a number"))
}

/// Validates raw form fields and builds the request body.
///
/// The name is sent as typed; only blankness is checked.
pub fn validate_product_form(name: &str, price: &str) -> ValidationResult<ProductPayload> {
    validate_product_name(name)?;
    let price = validate_price_input(price)?;
    Ok(ProductPayload::new(name, price))
}

// =============================================================================
// Unit Tests
// =============================================================================
