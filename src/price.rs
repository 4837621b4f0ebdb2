//! Price format validation.
//!
//! A price is stored as text and must already be in fixed two-decimal form.
//! The rule is textual: the candidate is parsed as a number, re-formatted
//! with two decimal places, and accepted only if the result equals the input
//! exactly. `"3.5"` is rejected because its normalized form is `"3.50"`.

use crate::error::{InventoryError, Result};

/// Validates a candidate price string, returning it unchanged on success.
pub fn validate(input: &str) -> Result<String> {
    let value: f64 = input
        .parse()
        .map_err(|_| InventoryError::InvalidPrice(input.to_string()))?;
    if !value.is_finite() {
        return Err(InventoryError::InvalidPrice(input.to_string()));
    }
    let normalized = format!("{:.2}", value);
    if normalized == input {
        Ok(normalized)
    } else {
        Err(InventoryError::InvalidPrice(input.to_string()))
    }
}
