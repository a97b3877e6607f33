//! Fixed-point price handling.
//!
//! Prices travel as decimal strings (`"45.00"`) and are stored as
//! `NUMERIC(10, 2)`, so at most eight integer digits and two fraction digits
//! are accepted.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9][0-9]{0,7})(\.[0-9]{1,2})?$").expect("price pattern is valid")
});

/// Validate a non-negative decimal price string.
pub fn validate_price(value: &str) -> Result<(), CoreError> {
    if PRICE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid price '{value}'. Expected a decimal with at most two fraction digits"
        )))
    }
}
