//! Core business logic module
//!
//! This module contains the account ledger components:
//! - `ledger` - Account storage, number allocation, deposits and withdrawals
//! - `shared` - Thread-safe handle serializing access to one ledger

pub mod ledger;
pub mod shared;

pub use ledger::{Ledger, LedgerConfig, DEFAULT_FIRST_ACCOUNT_NUMBER};
pub use shared::SharedLedger;
