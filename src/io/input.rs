//! Operator input parsing
//!
//! Turns raw lines typed at the menu into typed values. Nothing here touches
//! the ledger; every failure is a `ValidationError` the menu can report
//! before re-prompting.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{AccountNumber, ValidationError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Fractional digits allowed in a money amount
pub const CURRENCY_SCALE: u32 = 2;

/// Parse an account number
///
/// Surrounding whitespace is ignored. Anything other than a non-negative
/// integer that fits an account number is rejected.
pub fn parse_account_number(input: &str) -> Result<AccountNumber, ValidationError> {
    let trimmed = input.trim();
    // u64::from_str accepts a leading '+', which is not an account number
    if trimmed.starts_with('+') {
        return Err(ValidationError::invalid_account_number(trimmed));
    }
    trimmed
        .parse::<AccountNumber>()
        .map_err(|_| ValidationError::invalid_account_number(trimmed))
}

/// Parse a money amount
///
/// Accepts an optional leading `$` and surrounding whitespace. The sign is
/// not checked here: whether an amount is acceptable for a deposit or
/// withdrawal is the ledger's decision.
///
/// # Errors
///
/// Returns an error if:
/// - The text is not a decimal number
/// - The number has more than two fractional digits
pub fn parse_amount(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();

    // Decimal::from_str is lenient about a few forms we don't want to accept
    let well_formed = !digits.is_empty()
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'));
    if !well_formed {
        return Err(ValidationError::malformed_amount(trimmed));
    }

    let amount =
        Decimal::from_str(digits).map_err(|_| ValidationError::malformed_amount(trimmed))?;

    if amount.scale() > CURRENCY_SCALE {
        return Err(ValidationError::TooManyDecimals {
            input: trimmed.to_string(),
            max_scale: CURRENCY_SCALE,
        });
    }

    Ok(amount)
}

/// Parse a numeric menu selection
pub fn parse_menu_choice(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::invalid_choice(trimmed));
    }
    trimmed
        .parse()
        .map_err(|_| ValidationError::invalid_choice(trimmed))
}
