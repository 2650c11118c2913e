//! Thread-safe ledger handle
//!
//! This module provides `SharedLedger`, a cloneable handle that lets several
//! callers drive one `Ledger` at the same time.
//!
//! # Design
//!
//! A single `RwLock` guards the whole ledger. Every mutating operation
//! (allocation, creation, deposit, withdrawal) takes the write lock, so the
//! uniqueness and non-negative balance invariants hold exactly as they do for
//! a single caller. Lookups and listings take the read lock and may run
//! alongside each other, but never alongside a mutation, and they return
//! owned snapshots so no reference outlives the lock.
//!
//! # Poisoning
//!
//! Ledger operations validate before they mutate and never leave partial
//! state behind, so a panic in another holder cannot have broken an
//! invariant. A poisoned lock is therefore recovered rather than reported.

use crate::core::ledger::Ledger;
use crate::types::{Account, AccountNumber, LedgerError, NewAccount};
use rust_decimal::Decimal;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Cloneable, thread-safe handle to a single ledger
///
/// Clones share the same underlying ledger.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    /// Wrap an existing ledger
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Hand out the next account number
    pub fn allocate_account_number(&self) -> Result<AccountNumber, LedgerError> {
        self.write().allocate_account_number()
    }

    /// Open a new account, returning a snapshot of it
    pub fn create_account(&self, details: NewAccount) -> Result<Account, LedgerError> {
        self.write().create_account(details).cloned()
    }

    /// Deposit funds, returning the new balance
    pub fn deposit(&self, number: AccountNumber, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.write().deposit(number, amount)
    }

    /// Withdraw funds, returning the new balance
    pub fn withdraw(&self, number: AccountNumber, amount: Decimal) -> Result<Decimal, LedgerError> {
        self.write().withdraw(number, amount)
    }

    /// Snapshot of one account
    pub fn find_account(&self, number: AccountNumber) -> Option<Account> {
        self.read().find_account(number).cloned()
    }

    /// Snapshot of every account in creation order
    pub fn accounts(&self) -> Vec<Account> {
        self.read().accounts().cloned().collect()
    }

    /// Run a closure against a consistent read-only view of the ledger
    pub fn with_ledger<T>(&self, f: impl FnOnce(&Ledger) -> T) -> T {
        f(&self.read())
    }

    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}
