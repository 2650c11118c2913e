//! Error types for the bank ledger
//!
//! Two families of failure exist:
//!
//! - **Validation errors**: raw operator input that could not be turned into
//!   a typed value (blank name, malformed PIN, non-numeric amount, ...).
//!   These are produced before the ledger is ever called.
//! - **Ledger errors**: well-formed requests the ledger refuses (unknown
//!   account, non-positive amount, insufficient balance, ...).
//!
//! Neither is fatal. The menu turns both into a message and re-prompts.

use super::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Operator input that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required free-text field was blank after trimming
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the blank field
        field: String,
    },

    /// The PIN was not exactly four decimal digits
    #[error("PIN must be exactly 4 digits")]
    InvalidPin,

    /// The account number was not a non-negative integer
    #[error("'{input}' is not a valid account number")]
    InvalidAccountNumber {
        /// The rejected input
        input: String,
    },

    /// The amount was not a decimal number
    #[error("'{input}' is not a valid amount")]
    MalformedAmount {
        /// The rejected input
        input: String,
    },

    /// The amount had more fractional digits than the currency allows
    #[error("'{input}' has more than {max_scale} decimal places")]
    TooManyDecimals {
        /// The rejected input
        input: String,
        /// Maximum number of fractional digits
        max_scale: u32,
    },

    /// A menu selection was not a number
    #[error("'{input}' is not a menu option")]
    InvalidChoice {
        /// The rejected input
        input: String,
    },
}

impl ValidationError {
    /// Create an EmptyField error
    pub fn empty_field(field: &str) -> Self {
        ValidationError::EmptyField {
            field: field.to_string(),
        }
    }

    /// Create an InvalidAccountNumber error
    pub fn invalid_account_number(input: &str) -> Self {
        ValidationError::InvalidAccountNumber {
            input: input.to_string(),
        }
    }

    /// Create a MalformedAmount error
    pub fn malformed_amount(input: &str) -> Self {
        ValidationError::MalformedAmount {
            input: input.to_string(),
        }
    }

    /// Create an InvalidChoice error
    pub fn invalid_choice(input: &str) -> Self {
        ValidationError::InvalidChoice {
            input: input.to_string(),
        }
    }
}

/// Main error type for ledger operations
///
/// Every variant leaves the ledger unchanged: an operation either applies
/// completely or reports one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// No account carries the requested number
    #[error("Account {account} not found")]
    AccountNotFound {
        /// The requested account number
        account: AccountNumber,
    },

    /// Deposit or withdrawal amount was zero or negative
    #[error("Invalid amount {amount} for {operation}: amount must be positive")]
    InvalidAmount {
        /// Operation that was rejected
        operation: String,
        /// The rejected amount
        amount: Decimal,
    },

    /// Withdrawal would take the balance below zero
    ///
    /// Carries the current balance so the caller can show it.
    #[error("Insufficient balance in account {account}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// A seeded account reused a number already in the ledger
    #[error("Account number {account} is already in use")]
    DuplicateAccountNumber {
        /// The clashing account number
        account: AccountNumber,
    },

    /// The account number counter reached its maximum
    #[error("No account numbers left to allocate")]
    AccountNumbersExhausted,

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },
}

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(operation: &str, amount: Decimal) -> Self {
        LedgerError::InvalidAmount {
            operation: operation.to_string(),
            amount,
        }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(
        account: AccountNumber,
        balance: Decimal,
        requested: Decimal,
    ) -> Self {
        LedgerError::InsufficientBalance {
            account,
            balance,
            requested,
        }
    }

    /// Create a DuplicateAccountNumber error
    pub fn duplicate_account_number(account: AccountNumber) -> Self {
        LedgerError::DuplicateAccountNumber { account }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}
