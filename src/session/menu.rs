//! Interactive administration menu
//!
//! This module provides `Session`, the text dialogue that drives a `Ledger`
//! on behalf of one administrator. It reads operator lines from any
//! `BufRead` and writes prompts and results to any `Write`, so the same code
//! serves the terminal and scripted tests.
//!
//! # Flow
//!
//! ```text
//! login menu ── 1 + correct password ──► admin menu ── 6 ──► login menu
//!     │                                      │
//!     └── 2 or end of input ──► exit         └── end of input ──► exit
//! ```
//!
//! Every validation or ledger failure is reported as an `Error: ...` line and
//! the menu is shown again. Only I/O failures on the streams themselves end
//! the session with an error.

use crate::cli::ListFormat;
use crate::core::Ledger;
use crate::io::{
    format_currency, parse_account_number, parse_amount, parse_menu_choice, write_account_details,
    write_accounts_csv, write_accounts_table,
};
use crate::session::auth::AdminCredential;
use crate::types::{display_case, LedgerError, NewAccount, Pin, ValidationError};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Settings a session needs beyond the ledger itself
#[derive(Debug, Clone, Default)]
pub struct SessionSettings {
    /// Password that unlocks the admin menu
    pub credential: AdminCredential,
    /// Rendering used for "display all accounts"
    pub list_format: ListFormat,
}

/// Entries of the administration menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminAction {
    CreateAccount,
    Deposit,
    Withdraw,
    DisplayAccount,
    DisplayAllAccounts,
    Logout,
}

impl AdminAction {
    fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(AdminAction::CreateAccount),
            2 => Some(AdminAction::Deposit),
            3 => Some(AdminAction::Withdraw),
            4 => Some(AdminAction::DisplayAccount),
            5 => Some(AdminAction::DisplayAllAccounts),
            6 => Some(AdminAction::Logout),
            _ => None,
        }
    }
}

/// What the menu loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Show the current menu again
    Continue,
    /// Leave the admin menu for the login menu
    Logout,
    /// Input is exhausted; end the session
    Quit,
}

/// Result of asking the operator for one value
enum Reply<T> {
    Value(T),
    /// Input was rejected and already reported
    Rejected,
    /// End of input
    Closed,
}

impl<T> Reply<T> {
    /// The value, or the flow the caller should return instead
    fn or_flow(self) -> Result<T, Flow> {
        match self {
            Reply::Value(value) => Ok(value),
            Reply::Rejected => Err(Flow::Continue),
            Reply::Closed => Err(Flow::Quit),
        }
    }
}

/// One administrator session over a ledger
pub struct Session<'a, R, W> {
    ledger: &'a mut Ledger,
    input: R,
    output: W,
    settings: SessionSettings,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(ledger: &'a mut Ledger, input: R, output: W, settings: SessionSettings) -> Self {
        Session {
            ledger,
            input,
            output,
            settings,
        }
    }

    /// Run the login menu until the operator exits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "--------------------------------")?;
        writeln!(self.output, "\tBANK MANAGEMENT SYSTEM")?;
        writeln!(self.output, "--------------------------------")?;

        loop {
            writeln!(self.output, "\n------ LOGIN / EXIT ------")?;
            writeln!(self.output, "1. Login (Admin)")?;
            writeln!(self.output, "2. Exit")?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                debug!("input closed at login menu");
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    if self.login()? == Flow::Quit {
                        return Ok(());
                    }
                }
                "2" => {
                    writeln!(self.output, "Exiting the Bank Management System. Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice. Please enter 1 or 2.")?,
            }
        }
    }

    fn login(&mut self) -> io::Result<Flow> {
        let Some(password) = self.prompt("Enter Admin password: ")? else {
            return Ok(Flow::Quit);
        };

        // Authentication state lives only for the duration of admin_menu
        if self.settings.credential.verify(&password) {
            info!("admin logged in");
            writeln!(self.output, "Successfully logged in!")?;
            self.admin_menu()
        } else {
            warn!("rejected admin login attempt");
            writeln!(self.output, "Wrong password. Please try again.")?;
            Ok(Flow::Continue)
        }
    }

    fn admin_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n==================================")?;
            writeln!(self.output, "ADMINISTRATION MENU")?;
            writeln!(self.output, "==================================")?;
            writeln!(self.output, "1. Create New Account")?;
            writeln!(self.output, "2. Deposit Money")?;
            writeln!(self.output, "3. Withdraw Money")?;
            writeln!(self.output, "4. Display Account Details")?;
            writeln!(self.output, "5. Display All Accounts (Admin View)")?;
            writeln!(self.output, "6. Logout")?;

            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(Flow::Quit);
            };

            let choice = match parse_menu_choice(&line) {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            let flow = match AdminAction::from_choice(choice) {
                Some(AdminAction::CreateAccount) => self.create_account()?,
                Some(AdminAction::Deposit) => self.deposit()?,
                Some(AdminAction::Withdraw) => self.withdraw()?,
                Some(AdminAction::DisplayAccount) => self.display_account()?,
                Some(AdminAction::DisplayAllAccounts) => self.display_all_accounts()?,
                Some(AdminAction::Logout) => {
                    info!("admin logged out");
                    writeln!(self.output, "Logging out...")?;
                    Flow::Logout
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please select from 1-6.")?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Continue => {}
                Flow::Logout => return Ok(Flow::Continue),
                Flow::Quit => return Ok(Flow::Quit),
            }
        }
    }

    fn create_account(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n---------- CREATE ACCOUNT ----------")?;

        // Each field is re-asked until valid
        let Some(name) = self.ask_until("Enter name: ", |raw| display_case(raw, "name"))? else {
            return Ok(Flow::Quit);
        };
        let Some(city) = self.ask_until("Enter your city: ", |raw| display_case(raw, "city"))?
        else {
            return Ok(Flow::Quit);
        };
        let Some(pin) = self.ask_until("Enter 4-digit PIN: ", |raw| raw.parse::<Pin>())? else {
            return Ok(Flow::Quit);
        };

        let details = match NewAccount::new(&name, &city, pin) {
            Ok(details) => details,
            Err(error) => {
                self.report(&error)?;
                return Ok(Flow::Continue);
            }
        };

        let created = self
            .ledger
            .create_account(details)
            .map(|account| (account.number(), account.holder_name().to_string()));

        match created {
            Ok((number, holder)) => {
                writeln!(self.output, "\nSUCCESS: Account created!")?;
                writeln!(self.output, "  Account Number: {}", number)?;
                writeln!(self.output, "  Account Holder: {}", holder)?;
            }
            Err(error) => self.report_ledger_error(&error)?,
        }

        Ok(Flow::Continue)
    }

    fn deposit(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n----------- DEPOSIT MONEY -----------")?;

        let number = match self
            .ask("Enter account number: ", parse_account_number)?
            .or_flow()
        {
            Ok(number) => number,
            Err(flow) => return Ok(flow),
        };
        let amount = match self
            .ask("Enter amount to deposit: ", parse_amount)?
            .or_flow()
        {
            Ok(amount) => amount,
            Err(flow) => return Ok(flow),
        };

        match self.ledger.deposit(number, amount) {
            Ok(balance) => {
                writeln!(
                    self.output,
                    "\nSUCCESS: Deposited {}.",
                    format_currency(amount)
                )?;
                writeln!(
                    self.output,
                    "  New Balance for {}: {}",
                    number,
                    format_currency(balance)
                )?;
            }
            Err(error) => self.report_ledger_error(&error)?,
        }

        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n----------- WITHDRAW MONEY ----------")?;

        let number = match self
            .ask("Enter account number: ", parse_account_number)?
            .or_flow()
        {
            Ok(number) => number,
            Err(flow) => return Ok(flow),
        };
        let amount = match self
            .ask("Enter amount to withdraw: ", parse_amount)?
            .or_flow()
        {
            Ok(amount) => amount,
            Err(flow) => return Ok(flow),
        };

        match self.ledger.withdraw(number, amount) {
            Ok(balance) => {
                writeln!(self.output, "\nSUCCESS: Withdrew {}.", format_currency(amount))?;
                writeln!(
                    self.output,
                    "  New Balance for {}: {}",
                    number,
                    format_currency(balance)
                )?;
            }
            Err(error) => self.report_ledger_error(&error)?,
        }

        Ok(Flow::Continue)
    }

    fn display_account(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n---------- DISPLAY ACCOUNT ----------")?;

        let number = match self
            .ask("Enter account number: ", parse_account_number)?
            .or_flow()
        {
            Ok(number) => number,
            Err(flow) => return Ok(flow),
        };

        match self.ledger.find_account(number) {
            Some(account) => {
                writeln!(self.output)?;
                write_account_details(account, &mut self.output)?;
            }
            None => self.report_ledger_error(&LedgerError::account_not_found(number))?,
        }

        Ok(Flow::Continue)
    }

    fn display_all_accounts(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n---------- ALL ACCOUNTS (ADMIN) ----------")?;

        match self.settings.list_format {
            ListFormat::Table => write_accounts_table(self.ledger.accounts(), &mut self.output)?,
            ListFormat::Csv => write_accounts_csv(self.ledger.accounts(), &mut self.output)
                .map_err(io::Error::other)?,
        }

        Ok(Flow::Continue)
    }

    /// Write a prompt and read one line
    ///
    /// Returns `None` at end of input. The line terminator is stripped but
    /// other whitespace is kept, so the password comparison stays exact.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompt for a value and parse it, reporting a parse failure
    fn ask<T, F>(&mut self, label: &str, parse: F) -> io::Result<Reply<T>>
    where
        F: FnOnce(&str) -> Result<T, ValidationError>,
    {
        let Some(line) = self.prompt(label)? else {
            return Ok(Reply::Closed);
        };

        match parse(&line) {
            Ok(value) => Ok(Reply::Value(value)),
            Err(error) => {
                debug!(%error, "rejected operator input");
                self.report(&error)?;
                Ok(Reply::Rejected)
            }
        }
    }

    /// Prompt until the value parses; `None` at end of input
    fn ask_until<T, F>(&mut self, label: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, ValidationError>,
    {
        loop {
            match self.ask(label, &parse)? {
                Reply::Value(value) => return Ok(Some(value)),
                Reply::Rejected => continue,
                Reply::Closed => return Ok(None),
            }
        }
    }

    fn report(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.output, "Error: {}.", error)
    }

    fn report_ledger_error(&mut self, error: &LedgerError) -> io::Result<()> {
        match error {
            LedgerError::AccountNotFound { .. } => {
                writeln!(self.output, "Error: Account number not found.")
            }
            LedgerError::InvalidAmount { .. } => {
                writeln!(self.output, "Error: Amount must be positive.")
            }
            LedgerError::InsufficientBalance { balance, .. } => {
                writeln!(self.output, "Error: Insufficient balance.")?;
                writeln!(self.output, "  Current Balance: {}", format_currency(*balance))
            }
            other => self.report(other),
        }
    }
}
