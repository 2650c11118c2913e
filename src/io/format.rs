//! Presentation of ledger results
//!
//! This module centralizes how accounts and amounts are shown to the
//! operator:
//! - Currency formatting (two decimal places, `$` prefix)
//! - The single-account detail block
//! - The fixed-width account table
//! - A CSV rendering of the account list
//!
//! The PIN is never rendered.

use crate::types::Account;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::io::{self, Write};

/// Format an amount as currency with exactly two decimal places
///
/// Values with more precision are rounded half away from zero. Cents are
/// padded in the rendered text, so amounts too large to carry two fractional
/// digits in a `Decimal` still print with `.00`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", to_cents(amount))
}

fn to_cents(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}

/// Write the detail block for one account
pub fn write_account_details(account: &Account, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "--- Account Details ---")?;
    writeln!(output, "  Account No: {}", account.number())?;
    writeln!(output, "  Name:       {}", account.holder_name())?;
    writeln!(output, "  City:       {}", account.city())?;
    writeln!(output, "  Balance:    {}", format_currency(account.balance()))?;
    writeln!(output, "-----------------------")
}

/// Write accounts as a fixed-width table
///
/// Columns: account number (8), name (20), city (15), balance (10, right
/// aligned). An empty list prints a notice instead of an empty table.
pub fn write_accounts_table<'a, I>(accounts: I, output: &mut dyn Write) -> io::Result<()>
where
    I: IntoIterator<Item = &'a Account>,
{
    let mut accounts = accounts.into_iter().peekable();
    if accounts.peek().is_none() {
        return writeln!(output, "No accounts currently open.");
    }

    writeln!(
        output,
        "{:<8} | {:<20} | {:<15} | {:>10}",
        "ACC NO", "NAME", "CITY", "BALANCE"
    )?;
    writeln!(output, "{}", "-".repeat(59))?;
    for account in accounts {
        writeln!(
            output,
            "{:<8} | {:<20} | {:<15} | {:>10}",
            account.number(),
            account.holder_name(),
            account.city(),
            format_currency(account.balance())
        )?;
    }
    writeln!(output, "{}", "-".repeat(59))
}

/// One CSV output row
#[derive(Debug, Serialize)]
struct AccountRow<'a> {
    account: u64,
    name: &'a str,
    city: &'a str,
    balance: String,
}

/// Write accounts in CSV format
///
/// Columns: account, name, city, balance. Rows keep the order they are given
/// in; the header is always written, even for an empty list.
pub fn write_accounts_csv<'a, I>(accounts: I, output: &mut dyn Write) -> Result<(), String>
where
    I: IntoIterator<Item = &'a Account>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer
        .write_record(["account", "name", "city", "balance"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for account in accounts {
        writer
            .serialize(AccountRow {
                account: account.number(),
                name: account.holder_name(),
                city: account.city(),
                balance: to_cents(account.balance()),
            })
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
