//! Account ledger
//!
//! This module provides the `Ledger` struct which owns every account record
//! and the account number counter.
//!
//! The Ledger is responsible for:
//! - Allocating strictly increasing, never reused account numbers
//! - Opening accounts with a zero balance
//! - Applying deposits and withdrawals without ever letting a balance go negative
//! - Looking up a single account and listing all accounts in creation order
//!
//! Every operation is all-or-nothing: on failure the ledger is left exactly as
//! it was before the call.

use crate::types::{Account, AccountNumber, LedgerError, NewAccount};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::slice;
use tracing::{debug, info, warn};

/// First account number handed out by a fresh ledger
pub const DEFAULT_FIRST_ACCOUNT_NUMBER: AccountNumber = 1001;

/// Startup configuration for a ledger
///
/// Controls where account numbering starts and whether the demonstration
/// account is seeded before the first operator action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Counter value used for the first created account
    pub first_account_number: AccountNumber,
    /// Seed the demonstration account (number 1000) at startup
    pub seed_bootstrap_account: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            first_account_number: DEFAULT_FIRST_ACCOUNT_NUMBER,
            seed_bootstrap_account: true,
        }
    }
}

/// In-memory store of all accounts
///
/// Accounts are kept in creation order for listing, with a number → position
/// index for constant-time lookup.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// Accounts in the order they were created or seeded
    accounts: Vec<Account>,
    /// Position of each account in `accounts`, keyed by account number
    index: HashMap<AccountNumber, usize>,
    /// Next number `allocate_account_number` will hand out
    next_number: AccountNumber,
}

impl Ledger {
    /// Create an empty ledger whose numbering starts at 1001
    pub fn new() -> Self {
        Self::with_first_account_number(DEFAULT_FIRST_ACCOUNT_NUMBER)
    }

    /// Create an empty ledger whose numbering starts at `first`
    pub fn with_first_account_number(first: AccountNumber) -> Self {
        Ledger {
            accounts: Vec::new(),
            index: HashMap::new(),
            next_number: first,
        }
    }

    /// Build a ledger from startup configuration
    ///
    /// Seeds the demonstration account when the configuration asks for it.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Ledger::seed`].
    pub fn from_config(config: &LedgerConfig) -> Result<Self, LedgerError> {
        let mut ledger = Self::with_first_account_number(config.first_account_number);
        if config.seed_bootstrap_account {
            ledger.seed(Account::bootstrap())?;
        }
        Ok(ledger)
    }

    /// Insert a pre-built account, typically at startup
    ///
    /// If the seeded number is at or above the counter, the counter is moved
    /// past it so later allocations stay strictly greater than every number
    /// already in the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account number is already in use
    /// - The opening balance is negative
    /// - The seeded number is the largest representable account number
    pub fn seed(&mut self, account: Account) -> Result<(), LedgerError> {
        let number = account.number();

        if self.index.contains_key(&number) {
            return Err(LedgerError::duplicate_account_number(number));
        }

        if account.balance() < Decimal::ZERO {
            return Err(LedgerError::invalid_amount("seed", account.balance()));
        }

        let next_number = if number >= self.next_number {
            number
                .checked_add(1)
                .ok_or(LedgerError::AccountNumbersExhausted)?
        } else {
            self.next_number
        };

        debug!(account = number, "seeding account");
        self.next_number = next_number;
        self.index.insert(number, self.accounts.len());
        self.accounts.push(account);

        Ok(())
    }

    /// Hand out the next account number
    ///
    /// Returns the current counter value and advances the counter by one.
    ///
    /// # Errors
    ///
    /// Returns `AccountNumbersExhausted` once the counter cannot advance.
    pub fn allocate_account_number(&mut self) -> Result<AccountNumber, LedgerError> {
        let number = self.next_number;
        self.next_number = number
            .checked_add(1)
            .ok_or(LedgerError::AccountNumbersExhausted)?;
        Ok(number)
    }

    /// The number the next created account will receive
    pub fn next_account_number(&self) -> AccountNumber {
        self.next_number
    }

    /// Open a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `details` - Validated holder name, city and PIN
    ///
    /// # Returns
    ///
    /// The stored account, including its assigned number
    ///
    /// # Errors
    ///
    /// Only fails if the account number counter is exhausted.
    pub fn create_account(&mut self, details: NewAccount) -> Result<&Account, LedgerError> {
        let number = self.allocate_account_number()?;
        let position = self.accounts.len();

        self.accounts.push(Account::new(number, details));
        self.index.insert(number, position);

        let account = &self.accounts[position];
        info!(
            account = number,
            holder = account.holder_name(),
            city = account.city(),
            "account created"
        );
        Ok(account)
    }

    /// Look up an account by number
    ///
    /// Returns `None` if no account carries that number.
    pub fn find_account(&self, number: AccountNumber) -> Option<&Account> {
        let account = self
            .index
            .get(&number)
            .and_then(|&position| self.accounts.get(position));
        debug!(account = number, found = account.is_some(), "account lookup");
        account
    }

    /// Deposit funds into an account
    ///
    /// # Arguments
    ///
    /// * `number` - The account to credit
    /// * `amount` - The amount to add (must be positive)
    ///
    /// # Returns
    ///
    /// The account's new balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The account does not exist
    /// - Adding the amount would overflow the balance
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let result = self.apply_deposit(number, amount);
        match &result {
            Ok(balance) => info!(account = number, %amount, %balance, "deposit applied"),
            Err(error) => warn!(account = number, %amount, %error, "deposit rejected"),
        }
        result
    }

    fn apply_deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        ensure_positive("deposit", amount)?;
        let account = self.account_mut(number)?;

        let new_balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", number))?;

        account.balance = new_balance;
        Ok(new_balance)
    }

    /// Withdraw funds from an account
    ///
    /// The balance is checked before anything changes; an overdraft is
    /// refused and the balance stays as it was.
    ///
    /// # Arguments
    ///
    /// * `number` - The account to debit
    /// * `amount` - The amount to remove (must be positive)
    ///
    /// # Returns
    ///
    /// The account's new balance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The amount is zero or negative
    /// - The account does not exist
    /// - The amount exceeds the current balance (the error carries the balance)
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let result = self.apply_withdrawal(number, amount);
        match &result {
            Ok(balance) => info!(account = number, %amount, %balance, "withdrawal applied"),
            Err(error) => warn!(account = number, %amount, %error, "withdrawal rejected"),
        }
        result
    }

    fn apply_withdrawal(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        ensure_positive("withdrawal", amount)?;
        let account = self.account_mut(number)?;

        if account.balance < amount {
            return Err(LedgerError::insufficient_balance(
                number,
                account.balance,
                amount,
            ));
        }

        // amount <= balance, so the difference cannot be negative
        let new_balance = account.balance - amount;
        account.balance = new_balance;
        Ok(new_balance)
    }

    /// All accounts in creation order
    ///
    /// Each call starts a fresh iteration; an empty ledger yields nothing.
    pub fn accounts(&self) -> slice::Iter<'_, Account> {
        self.accounts.iter()
    }

    /// Number of accounts in the ledger
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the ledger holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_mut(&mut self, number: AccountNumber) -> Result<&mut Account, LedgerError> {
        let position = *self
            .index
            .get(&number)
            .ok_or_else(|| LedgerError::account_not_found(number))?;
        Ok(&mut self.accounts[position])
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_positive(operation: &str, amount: Decimal) -> Result<(), LedgerError> {
    if amount > Decimal::ZERO {
        Ok(())
    } else {
        Err(LedgerError::invalid_amount(operation, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pin, BOOTSTRAP_ACCOUNT_NUMBER};
    use proptest::prelude::*;
    use rstest::rstest;

    fn details(name: &str, city: &str) -> NewAccount {
        let pin: Pin = "1234".parse().unwrap();
        NewAccount::new(name, city, pin).unwrap()
    }

    fn bootstrapped() -> Ledger {
        Ledger::from_config(&LedgerConfig::default()).unwrap()
    }

    fn balance_of(ledger: &Ledger, number: AccountNumber) -> Decimal {
        ledger.find_account(number).unwrap().balance()
    }

    #[test]
    fn test_new_creates_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.accounts().count(), 0);
        assert_eq!(ledger.next_account_number(), DEFAULT_FIRST_ACCOUNT_NUMBER);
    }

    #[test]
    fn test_from_config_seeds_bootstrap_account() {
        let ledger = bootstrapped();

        assert_eq!(ledger.len(), 1);
        let account = ledger.find_account(BOOTSTRAP_ACCOUNT_NUMBER).unwrap();
        assert_eq!(account.holder_name(), "Shrey Admin");
        assert_eq!(account.balance(), Decimal::new(5_000_000, 2));
        assert_eq!(ledger.next_account_number(), 1001);
    }

    #[test]
    fn test_from_config_without_bootstrap_is_empty() {
        let config = LedgerConfig {
            first_account_number: 5000,
            seed_bootstrap_account: false,
        };
        let ledger = Ledger::from_config(&config).unwrap();

        assert!(ledger.is_empty());
        assert_eq!(ledger.next_account_number(), 5000);
    }

    #[test]
    fn test_seed_below_counter_keeps_counter() {
        let config = LedgerConfig {
            first_account_number: 5000,
            seed_bootstrap_account: true,
        };
        let ledger = Ledger::from_config(&config).unwrap();

        assert_eq!(ledger.next_account_number(), 5000);
    }

    #[test]
    fn test_seed_at_or_above_counter_advances_counter() {
        let config = LedgerConfig {
            first_account_number: 1,
            seed_bootstrap_account: true,
        };
        let mut ledger = Ledger::from_config(&config).unwrap();

        assert_eq!(ledger.next_account_number(), BOOTSTRAP_ACCOUNT_NUMBER + 1);
        let created = ledger.create_account(details("a", "b")).unwrap();
        assert_eq!(created.number(), 1001);
    }

    #[test]
    fn test_seed_rejects_duplicate_number() {
        let mut ledger = bootstrapped();

        let result = ledger.seed(Account::bootstrap());

        assert_eq!(
            result,
            Err(LedgerError::DuplicateAccountNumber {
                account: BOOTSTRAP_ACCOUNT_NUMBER
            })
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_seed_rejects_negative_balance() {
        let mut ledger = Ledger::new();
        let account = Account::with_balance(7, details("a", "b"), Decimal::new(-1, 2));

        let result = ledger.seed(account);

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert!(ledger.is_empty());
        assert_eq!(ledger.next_account_number(), DEFAULT_FIRST_ACCOUNT_NUMBER);
    }

    #[test]
    fn test_seed_at_max_number_is_rejected_without_side_effects() {
        let mut ledger = Ledger::new();
        let account = Account::new(AccountNumber::MAX, details("a", "b"));

        let result = ledger.seed(account);

        assert_eq!(result, Err(LedgerError::AccountNumbersExhausted));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_allocate_account_number_is_monotonic() {
        let mut ledger = Ledger::new();

        assert_eq!(ledger.allocate_account_number(), Ok(1001));
        assert_eq!(ledger.allocate_account_number(), Ok(1002));
        assert_eq!(ledger.allocate_account_number(), Ok(1003));
        assert_eq!(ledger.next_account_number(), 1004);
    }

    #[test]
    fn test_allocate_account_number_exhaustion() {
        let mut ledger = Ledger::with_first_account_number(AccountNumber::MAX - 1);

        assert_eq!(ledger.allocate_account_number(), Ok(AccountNumber::MAX - 1));
        assert_eq!(
            ledger.allocate_account_number(),
            Err(LedgerError::AccountNumbersExhausted)
        );
        assert_eq!(ledger.next_account_number(), AccountNumber::MAX);
    }

    #[test]
    fn test_create_account_assigns_next_number() {
        let mut ledger = bootstrapped();

        let account = ledger
            .create_account(NewAccount::new("john doe", "pune", "1234".parse().unwrap()).unwrap())
            .unwrap();

        assert_eq!(account.number(), 1001);
        assert_eq!(account.holder_name(), "John Doe");
        assert_eq!(account.city(), "Pune");
        assert_eq!(account.balance(), Decimal::ZERO);
        assert_eq!(ledger.next_account_number(), 1002);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_create_account_skips_numbers_allocated_directly() {
        let mut ledger = Ledger::new();

        ledger.allocate_account_number().unwrap();
        let account = ledger.create_account(details("a", "b")).unwrap();

        assert_eq!(account.number(), 1002);
    }

    #[test]
    fn test_accounts_are_listed_in_creation_order() {
        let mut ledger = bootstrapped();
        ledger.create_account(details("zed", "x")).unwrap();
        ledger.create_account(details("amy", "y")).unwrap();

        let numbers: Vec<AccountNumber> = ledger.accounts().map(Account::number).collect();
        assert_eq!(numbers, vec![1000, 1001, 1002]);

        // listing again yields the same sequence
        let again: Vec<AccountNumber> = ledger.accounts().map(Account::number).collect();
        assert_eq!(numbers, again);
    }

    #[test]
    fn test_find_account_returns_none_for_unknown_number() {
        let ledger = bootstrapped();
        assert!(ledger.find_account(9999).is_none());
    }

    #[test]
    fn test_find_account_is_idempotent() {
        let ledger = bootstrapped();
        let first = ledger.find_account(1000).cloned();
        let second = ledger.find_account(1000).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_deposit_into_bootstrap_account() {
        let mut ledger = bootstrapped();

        let balance = ledger.deposit(1000, Decimal::new(50000, 2)).unwrap();

        assert_eq!(balance, Decimal::new(5_050_000, 2));
        assert_eq!(balance_of(&ledger, 1000), Decimal::new(5_050_000, 2));
    }

    #[test]
    fn test_deposit_multiple_times_accumulates() {
        let mut ledger = Ledger::new();
        let number = ledger.create_account(details("a", "b")).unwrap().number();

        ledger.deposit(number, Decimal::new(10, 2)).unwrap();
        ledger.deposit(number, Decimal::new(20, 2)).unwrap();

        // 0.10 + 0.20 is exact in decimal
        assert_eq!(balance_of(&ledger, number), Decimal::new(30, 2));
    }

    #[test]
    fn test_deposit_into_unknown_account() {
        let mut ledger = bootstrapped();

        let result = ledger.deposit(9999, Decimal::new(1000, 2));

        assert_eq!(result, Err(LedgerError::AccountNotFound { account: 9999 }));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-500, 2))]
    fn test_deposit_rejects_non_positive_amount(#[case] amount: Decimal) {
        let mut ledger = bootstrapped();

        let result = ledger.deposit(1000, amount);

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(balance_of(&ledger, 1000), Decimal::new(5_000_000, 2));
    }

    #[test]
    fn test_invalid_amount_is_reported_before_missing_account() {
        let mut ledger = Ledger::new();

        let result = ledger.deposit(9999, Decimal::ZERO);

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[test]
    fn test_deposit_overflow_leaves_balance_unchanged() {
        let mut ledger = Ledger::new();
        let account = Account::with_balance(1, details("a", "b"), Decimal::MAX);
        ledger.seed(account).unwrap();

        let result = ledger.deposit(1, Decimal::ONE);

        assert_eq!(
            result,
            Err(LedgerError::ArithmeticOverflow {
                operation: "deposit".to_string(),
                account: 1
            })
        );
        assert_eq!(balance_of(&ledger, 1), Decimal::MAX);
    }

    #[test]
    fn test_withdraw_decreases_balance() {
        let mut ledger = bootstrapped();

        let balance = ledger.withdraw(1000, Decimal::new(1_000_000, 2)).unwrap();

        assert_eq!(balance, Decimal::new(4_000_000, 2));
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut ledger = bootstrapped();

        let balance = ledger.withdraw(1000, Decimal::new(5_000_000, 2)).unwrap();

        assert_eq!(balance, Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_with_insufficient_balance() {
        let mut ledger = bootstrapped();
        ledger.deposit(1000, Decimal::new(50000, 2)).unwrap();

        let result = ledger.withdraw(1000, Decimal::new(6_000_000, 2));

        assert_eq!(
            result,
            Err(LedgerError::InsufficientBalance {
                account: 1000,
                balance: Decimal::new(5_050_000, 2),
                requested: Decimal::new(6_000_000, 2),
            })
        );
        assert_eq!(balance_of(&ledger, 1000), Decimal::new(5_050_000, 2));
    }

    #[test]
    fn test_withdraw_from_unknown_account() {
        let mut ledger = bootstrapped();

        let result = ledger.withdraw(9999, Decimal::ONE);

        assert_eq!(result, Err(LedgerError::AccountNotFound { account: 9999 }));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-500, 2))]
    fn test_withdraw_rejects_non_positive_amount(#[case] amount: Decimal) {
        let mut ledger = bootstrapped();

        let result = ledger.withdraw(1000, amount);

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(balance_of(&ledger, 1000), Decimal::new(5_000_000, 2));
    }

    #[test]
    fn test_mutations_do_not_touch_other_fields() {
        let mut ledger = bootstrapped();
        let before = ledger.find_account(1000).cloned().unwrap();

        ledger.deposit(1000, Decimal::ONE).unwrap();
        ledger.withdraw(1000, Decimal::TWO).unwrap();

        let after = ledger.find_account(1000).unwrap();
        assert_eq!(after.number(), before.number());
        assert_eq!(after.holder_name(), before.holder_name());
        assert_eq!(after.city(), before.city());
        assert_eq!(after.pin(), before.pin());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Deposit(i64),
        Withdraw(i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-10_000i64..1_000_000).prop_map(Op::Deposit),
            (-10_000i64..1_000_000).prop_map(Op::Withdraw),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: created account numbers are distinct and strictly increasing.
        #[test]
        fn created_numbers_strictly_increase(count in 1usize..50, first in 0u64..1_000_000) {
            let mut ledger = Ledger::with_first_account_number(first);
            let mut numbers = Vec::new();
            for _ in 0..count {
                numbers.push(ledger.create_account(details("a", "b")).unwrap().number());
            }

            prop_assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(numbers.iter().all(|&n| n < ledger.next_account_number()));
        }

        /// Property: balances never go negative and every operation is exact.
        #[test]
        fn balance_arithmetic_is_exact_and_non_negative(
            ops in prop::collection::vec(op_strategy(), 1..40)
        ) {
            let mut ledger = Ledger::new();
            let number = ledger.create_account(details("a", "b")).unwrap().number();

            for op in ops {
                let before = balance_of(&ledger, number);
                match op {
                    Op::Deposit(cents) => {
                        let amount = Decimal::new(cents, 2);
                        match ledger.deposit(number, amount) {
                            Ok(after) => {
                                prop_assert!(amount > Decimal::ZERO);
                                prop_assert_eq!(after, before + amount);
                            }
                            Err(LedgerError::InvalidAmount { .. }) => {
                                prop_assert!(amount <= Decimal::ZERO);
                            }
                            Err(other) => prop_assert!(false, "unexpected error {}", other),
                        }
                    }
                    Op::Withdraw(cents) => {
                        let amount = Decimal::new(cents, 2);
                        match ledger.withdraw(number, amount) {
                            Ok(after) => {
                                prop_assert!(amount > Decimal::ZERO && amount <= before);
                                prop_assert_eq!(after, before - amount);
                            }
                            Err(LedgerError::InsufficientBalance { balance, .. }) => {
                                prop_assert!(amount > before);
                                prop_assert_eq!(balance, before);
                            }
                            Err(LedgerError::InvalidAmount { .. }) => {
                                prop_assert!(amount <= Decimal::ZERO);
                            }
                            Err(other) => prop_assert!(false, "unexpected error {}", other),
                        }
                    }
                }

                prop_assert!(balance_of(&ledger, number) >= Decimal::ZERO);
            }
        }
    }
}
