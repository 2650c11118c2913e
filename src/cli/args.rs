use crate::core::{LedgerConfig, DEFAULT_FIRST_ACCOUNT_NUMBER};
use crate::session::{AdminCredential, SessionSettings, DEFAULT_ADMIN_PASSWORD};
use crate::types::AccountNumber;
use clap::{Parser, ValueEnum};

/// Interactive in-memory bank account ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive in-memory bank account ledger", long_about = None)]
pub struct CliArgs {
    /// Account number given to the first account created in this session
    #[arg(
        long = "first-account-number",
        value_name = "NUMBER",
        env = "BANK_FIRST_ACCOUNT",
        default_value_t = DEFAULT_FIRST_ACCOUNT_NUMBER,
        help = "Account number given to the first created account"
    )]
    pub first_account_number: AccountNumber,

    /// Skip seeding the demonstration account
    #[arg(
        long = "no-bootstrap",
        help = "Start with an empty ledger instead of the demonstration account 1000"
    )]
    pub no_bootstrap: bool,

    /// Administrator password
    #[arg(
        long = "admin-password",
        value_name = "PASSWORD",
        env = "BANK_ADMIN_PASSWORD",
        hide_env_values = true,
        hide_default_value = true,
        default_value = DEFAULT_ADMIN_PASSWORD,
        help = "Password that unlocks the administration menu"
    )]
    pub admin_password: String,

    /// Rendering for the account listing
    #[arg(
        long = "list-format",
        value_name = "FORMAT",
        default_value = "table",
        help = "Account listing format: 'table' or 'csv'"
    )]
    pub list_format: ListFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log filter (e.g. 'info', 'bank_ledger=debug'); RUST_LOG takes precedence"
    )]
    pub log_level: String,
}

/// Available renderings for the account listing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Table,
    Csv,
}

impl CliArgs {
    /// Build the ledger startup configuration from CLI arguments
    pub fn to_ledger_config(&self) -> LedgerConfig {
        LedgerConfig {
            first_account_number: self.first_account_number,
            seed_bootstrap_account: !self.no_bootstrap,
        }
    }

    /// Build the menu session settings from CLI arguments
    pub fn to_session_settings(&self) -> SessionSettings {
        SessionSettings {
            credential: AdminCredential::new(self.admin_password.clone()),
            list_format: self.list_format,
        }
    }
}
