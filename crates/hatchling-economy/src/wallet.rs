//! The pet's currency balance.
//!
//! Debits are all-or-nothing: if the balance does not cover the amount the
//! wallet is left untouched and [`EconomyError::InsufficientFunds`] is
//! returned. Credits saturate at `u32::MAX`.

use serde::{Deserialize, Serialize};

use crate::EconomyError;

/// Non-negative currency balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    balance: u32,
}

impl Wallet {
    /// Create a wallet holding `balance`.
    pub const fn new(balance: u32) -> Self {
        Self { balance }
    }

    /// Current balance.
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// Remove `amount` from the balance.
    pub fn debit(&mut self, amount: u32) -> Result<(), EconomyError> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(EconomyError::InsufficientFunds {
                required: amount,
                available: self.balance,
            })?;
        Ok(())
    }

    /// Add `amount` to the balance.
    pub const fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }
}
