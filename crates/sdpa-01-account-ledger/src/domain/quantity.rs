//! # Quantity Parsing
//!
//! Raw text to typed ledger inputs. Any failure maps to
//! [`LedgerError::InvalidQuantity`].

use super::errors::LedgerError;
use shared_types::Coins;

/// Parse a hardware unit count: digits only, no sign, no fraction.
pub fn parse_hardware_units(input: &str) -> Result<u32, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(LedgerError::InvalidQuantity(format!(
            "'{}' is not a non-negative whole number",
            trimmed
        )));
    }
    trimmed
        .parse::<u32>()
        .map_err(|_| LedgerError::InvalidQuantity(format!("'{}' is too large", trimmed)))
}

/// Parse a coin quantity: a finite, non-negative real number.
pub fn parse_coin_quantity(input: &str) -> Result<Coins, LedgerError> {
    let trimmed = input.trim();
    let quantity = trimmed.parse::<f64>().map_err(|_| {
        LedgerError::InvalidQuantity(format!("'{}' is not a number", trimmed))
    })?;
    validate_coin_quantity(quantity)?;
    Ok(quantity)
}

/// Reject negative, NaN and infinite coin quantities.
pub fn validate_coin_quantity(quantity: Coins) -> Result<(), LedgerError> {
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(LedgerError::InvalidQuantity(format!(
            "{} is not a non-negative coin quantity",
            quantity
        )));
    }
    Ok(())
}
