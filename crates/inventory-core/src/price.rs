//! # Price Module
//!
//! Display formatting and input parsing for product prices.
//!
//! ## Display Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Indonesian rupiah, as rendered in the product table                    │
//! │                                                                         │
//! │     15000      ──►  Rp 15.000        "." groups thousands               │
//! │     1250000.5  ──►  Rp 1.250.000,5   "," separates the fraction         │
//! │     0.1234     ──►  Rp 0,123         at most 3 fraction digits          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Currency prefix shown before every formatted price.
pub const CURRENCY_PREFIX: &str = "Rp";

/// Maximum fraction digits kept when formatting.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats a price as Indonesian rupiah.
///
/// ## Example
/// ```rust
/// use inventory_core::price::format_rupiah;
///
/// assert_eq!(format_rupiah(15000.0), "Rp 15.000");
/// assert_eq!(format_rupiah(2500.75), "Rp 2.500,75");
/// ```
pub fn format_rupiah(price: f64) -> String {
    if !price.is_finite() {
        return format!("{} {}", CURRENCY_PREFIX, price);
    }

    let scale = 10u128.pow(MAX_FRACTION_DIGITS);
    let scaled = (price.abs() * scale as f64).round() as u128;
    let whole = scaled / scale;
    let fraction = scaled % scale;

    let sign = if price < 0.0 && scaled > 0 { "-" } else { "" };
    let mut out = format!("{} {}{}", CURRENCY_PREFIX, sign, group_thousands(whole));

    if fraction > 0 {
        let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS as usize);
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }

    out
}

/// Parses user-entered price text.
///
/// Returns `None` for blank or non-numeric input. Surrounding whitespace is
/// ignored.
pub fn parse_price(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    input.parse::<f64>().ok().filter(|p| p.is_finite())
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
