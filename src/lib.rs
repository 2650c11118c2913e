//! Bank Ledger Library
//! # Overview
//!
//! This library provides an in-memory account ledger driven by an
//! interactive, password-gated administration menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Pin, NewAccount, errors)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account storage, number allocation and balance operations
//!   - [`core::shared`] - Thread-safe handle for multi-caller use
//! - [`io`] - Operator input parsing and result formatting
//! - [`session`] - Admin credential check and the text menu loop
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Create account**: Allocate the next account number and open a zero-balance account
//! - **Deposit**: Credit a positive amount to an existing account
//! - **Withdraw**: Debit a positive amount, never taking the balance below zero
//! - **Find**: Look up one account by number
//! - **List**: All accounts in creation order
//!
//! # Invariants
//!
//! - Account numbers are unique and strictly increasing; none is ever reused
//! - Every balance is non-negative at all times
//! - Failed operations leave the ledger unchanged

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod session;
pub mod types;

pub use self::core::{Ledger, LedgerConfig, SharedLedger};
pub use io::{write_accounts_csv, write_accounts_table};
pub use session::{Session, SessionSettings};
pub use types::{Account, AccountNumber, LedgerError, NewAccount, Pin, ValidationError};
