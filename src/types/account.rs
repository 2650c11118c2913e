//! Account-related types for the bank ledger
//!
//! This module defines the Account record held by the ledger, the validated
//! `NewAccount` request used to open one, and the `Pin` attribute.

use super::error::ValidationError;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Account number
///
/// Issued by the ledger from a monotonically increasing counter.
pub type AccountNumber = u64;

/// Number of the demonstration account seeded at startup
pub const BOOTSTRAP_ACCOUNT_NUMBER: AccountNumber = 1000;

/// Four-digit personal identification number
///
/// Stored as a fixed-width value so leading zeros survive ("0042").
/// The `Debug` output is masked so a PIN never ends up in logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pin([u8; 4]);

impl Pin {
    /// Number of digits in a PIN
    pub const LENGTH: usize = 4;

    /// The PIN as a four character digit string
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("0000")
    }
}

impl FromStr for Pin {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != Self::LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ValidationError::InvalidPin);
        }

        let mut digits = [0u8; 4];
        digits.copy_from_slice(bytes);
        Ok(Pin(digits))
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(****)")
    }
}

/// A validated request to open an account
///
/// Construction trims and display-cases the holder name and city and
/// rejects empty values, so the ledger only ever sees well-formed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    holder_name: String,
    city: String,
    pin: Pin,
}

impl NewAccount {
    /// Validate and normalize the fields of a new account
    ///
    /// # Arguments
    ///
    /// * `holder_name` - Raw holder name, e.g. `"  john   doe "`
    /// * `city` - Raw city name
    /// * `pin` - An already parsed PIN
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` if the name or city is blank.
    pub fn new(holder_name: &str, city: &str, pin: Pin) -> Result<Self, ValidationError> {
        Ok(NewAccount {
            holder_name: display_case(holder_name, "name")?,
            city: display_case(city, "city")?,
            pin,
        })
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }
}

/// Normalize free-form text to display case
///
/// Whitespace runs collapse to a single space; each word gets an upper-case
/// first letter and lower-case remainder. Blank input is rejected as an
/// empty `field`. Applying it twice gives the same text.
pub fn display_case(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let words: Vec<String> = raw
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect();

    if words.is_empty() {
        return Err(ValidationError::empty_field(field));
    }

    Ok(words.join(" "))
}

/// One customer's holding
///
/// Every field except `balance` is fixed at creation. The balance is only
/// changed by the ledger's deposit and withdraw operations and never drops
/// below zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    number: AccountNumber,
    holder_name: String,
    city: String,
    pin: Pin,
    pub(crate) balance: Decimal,
}

impl Account {
    /// Open an account with a zero balance
    pub fn new(number: AccountNumber, details: NewAccount) -> Self {
        Account {
            number,
            holder_name: details.holder_name,
            city: details.city,
            pin: details.pin,
            balance: Decimal::ZERO,
        }
    }

    /// Build an account with an opening balance
    ///
    /// Used for startup seeding. The ledger rejects negative balances when
    /// the account is seeded.
    pub fn with_balance(number: AccountNumber, details: NewAccount, balance: Decimal) -> Self {
        Account {
            balance,
            ..Account::new(number, details)
        }
    }

    /// The demonstration account every session starts with
    ///
    /// Number 1000, held by "Shrey Admin" of Indore, pre-funded with 50000.00.
    pub fn bootstrap() -> Self {
        Account {
            number: BOOTSTRAP_ACCOUNT_NUMBER,
            holder_name: "Shrey Admin".to_string(),
            city: "Indore".to_string(),
            pin: Pin(*b"1234"),
            balance: Decimal::new(5_000_000, 2),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }
}
