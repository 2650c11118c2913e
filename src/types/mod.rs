//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account record, account numbers, PINs and creation requests
//! - `error`: Validation and ledger error types

pub mod account;
pub mod error;

pub use account::{display_case, Account, AccountNumber, NewAccount, Pin, BOOTSTRAP_ACCOUNT_NUMBER};
pub use error::{LedgerError, ValidationError};
