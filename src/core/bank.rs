//! Bank ledger
//!
//! This module provides the `Bank` struct which owns the account store of a
//! bank shell session and implements the balance operations on top of it.
//!
//! The Bank is responsible for:
//! - Opening accounts (appended at the tail, duplicates allowed)
//! - Deposits, withdrawals and balance queries by account number
//! - Closing accounts
//! - Saving and loading `accounts.txt`
//!
//! Amounts are not validated for sign. A negative deposit lowers the balance
//! and a negative withdrawal always passes the funds check and raises it.

use crate::core::record_store::RecordStore;
use crate::io::text_codec;
use crate::types::{Account, AccountNumber, BoundedText, StoreError};
use rust_decimal::Decimal;
use std::path::Path;

/// Account ledger for one shell session
#[derive(Debug, Default)]
pub struct Bank {
    accounts: RecordStore<Account>,
}

impl Bank {
    /// Create a bank with no accounts
    pub fn new() -> Self {
        Bank {
            accounts: RecordStore::new(),
        }
    }

    /// Open an account with an initial deposit
    ///
    /// # Errors
    ///
    /// Only `StoreError::AllocationExhausted`, which is fatal.
    pub fn open_account(
        &mut self,
        number: AccountNumber,
        name: impl Into<BoundedText>,
        initial_deposit: Decimal,
    ) -> Result<(), StoreError> {
        self.accounts
            .append(Account::new(number, name, initial_deposit))
    }

    /// Deposit funds into an account
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(StoreError)` - If the store is empty, the account is missing, or
    ///   the addition overflows
    pub fn deposit(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, StoreError> {
        let account = self.accounts.lookup_mut(number)?;

        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| StoreError::arithmetic_overflow("deposit", number))?;

        Ok(account.balance)
    }

    /// Withdraw funds from an account
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The new balance
    /// * `Err(StoreError)` - If the store is empty, the account is missing, the
    ///   balance is lower than `amount`, or the subtraction overflows
    pub fn withdraw(
        &mut self,
        number: AccountNumber,
        amount: Decimal,
    ) -> Result<Decimal, StoreError> {
        let account = self.accounts.lookup_mut(number)?;

        if account.balance < amount {
            return Err(StoreError::insufficient_funds(
                number,
                account.balance,
                amount,
            ));
        }

        account.balance = account
            .balance
            .checked_sub(amount)
            .ok_or_else(|| StoreError::arithmetic_overflow("withdraw", number))?;

        Ok(account.balance)
    }

    /// Current balance of an account
    pub fn balance(&self, number: AccountNumber) -> Result<Decimal, StoreError> {
        self.accounts.lookup(number).map(|account| account.balance)
    }

    /// Close (remove) the first account with the given number
    pub fn close_account(&mut self, number: AccountNumber) -> Result<Account, StoreError> {
        self.accounts.delete(number)
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &RecordStore<Account> {
        &self.accounts
    }

    /// Write every account to `path`, returning the number of lines written
    pub fn save(&self, path: &Path) -> Result<usize, StoreError> {
        text_codec::save(&self.accounts, path)
    }

    /// Replace every account with the contents of `path`
    ///
    /// Returns the number of accounts loaded. If `path` cannot be opened the
    /// current accounts are kept.
    pub fn load(&mut self, path: &Path) -> Result<usize, StoreError> {
        text_codec::load(&mut self.accounts, path)
    }
}
