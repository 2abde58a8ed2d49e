//! Bank account records
//!
//! This module defines the Account record kept by the bank ledger shell.

use super::text::BoundedText;
use crate::core::traits::Keyed;
use rust_decimal::{Decimal, RoundingStrategy};

/// Account number
///
/// Signed 32-bit, matching the range accepted on the command line and in
/// `accounts.txt`.
pub type AccountNumber = i32;

/// Round an amount to whole cents, halves away from zero
///
/// Balances and amounts are printed and saved with exactly two decimals;
/// they go through this first so extra digits round instead of being cut.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Bank account record
///
/// Accounts are always created fully formed; only the balance changes
/// afterwards (through deposits and withdrawals).
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Account number, used as the lookup key
    pub number: AccountNumber,

    /// Account holder name, at most 99 characters
    pub name: BoundedText,

    /// Current balance
    ///
    /// Signed: a negative deposit or an overdrawing withdrawal of a negative
    /// amount can move it anywhere.
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with the given opening balance
    ///
    /// # Arguments
    ///
    /// * `number` - The account number
    /// * `name` - Account holder name (clamped to 99 characters)
    /// * `balance` - Opening balance
    pub fn new(number: AccountNumber, name: impl Into<BoundedText>, balance: Decimal) -> Self {
        Account {
            number,
            name: name.into(),
            balance,
        }
    }
}

impl Keyed for Account {
    type Key = AccountNumber;

    fn key(&self) -> AccountNumber {
        self.number
    }
}
