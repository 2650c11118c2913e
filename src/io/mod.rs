//! I/O module
//!
//! Handles operator input parsing and result presentation.
//!
//! # Components
//!
//! - `input` - Raw text to typed values (account numbers, amounts, menu choices)
//! - `format` - Currency formatting, account detail view, table and CSV listings

pub mod format;
pub mod input;

pub use format::{format_currency, write_account_details, write_accounts_csv, write_accounts_table};
pub use input::{parse_account_number, parse_amount, parse_menu_choice};
