//! Account registry module
//!
//! This module provides the `AccountRegistry` struct which owns every account
//! opened during a session.
//!
//! The AccountRegistry is responsible for:
//! - Opening new accounts with freshly generated identifiers
//! - Keeping accounts in insertion order for listing
//! - Looking accounts up by identifier
//! - Removing accounts

use crate::types::{Account, BankError, IbanGenerator};
use chrono::Local;
use log::{debug, info};
use rust_decimal::Decimal;

/// Owns all accounts of a session
///
/// Accounts are kept in a `Vec` in the order they were added. Every lookup is
/// a linear scan, which is plenty for an interactive single-user session.
pub struct AccountRegistry {
    /// Accounts in insertion order
    accounts: Vec<Account>,

    /// Source of identifiers for `open_account`
    generator: IbanGenerator,
}

impl AccountRegistry {
    /// Create an empty registry with an entropy-seeded identifier generator
    pub fn new() -> Self {
        Self::with_generator(IbanGenerator::default())
    }

    /// Create an empty registry drawing identifiers from `generator`
    pub fn with_generator(generator: IbanGenerator) -> Self {
        AccountRegistry {
            accounts: Vec::new(),
            generator,
        }
    }

    /// Open a new account and register it
    ///
    /// Generates a fresh identifier and stamps the account with the current
    /// local time.
    ///
    /// # Arguments
    ///
    /// * `holder` - Name of the account holder
    /// * `balance` - Opening balance (must be non-negative)
    ///
    /// # Returns
    ///
    /// * `Ok(&Account)` - The newly registered account
    /// * `Err(BankError::NegativeBalance)` - If `balance` is negative; nothing
    ///   is registered in that case
    pub fn open_account(
        &mut self,
        holder: impl Into<String>,
        balance: Decimal,
    ) -> Result<&Account, BankError> {
        let iban = self.generator.next_iban();
        let account = Account::new(iban, holder, balance, Local::now().naive_local())?;
        info!("Opened account {} with balance {}", account.iban(), balance);

        let index = self.accounts.len();
        self.add(account);
        Ok(&self.accounts[index])
    }

    /// Append an account
    ///
    /// Identifier uniqueness is not re-checked: identifiers come from the
    /// generator and are unique with overwhelming probability.
    pub fn add(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// All accounts in insertion order
    pub fn list_all(&self) -> &[Account] {
        &self.accounts
    }

    /// Find an account by identifier
    ///
    /// # Returns
    ///
    /// The matching account, or `None` if no account has that identifier
    pub fn find_by_id(&self, iban: &str) -> Option<&Account> {
        let found = self.accounts.iter().find(|a| a.iban().as_str() == iban);
        debug!("Lookup of {}: {}", iban, if found.is_some() { "hit" } else { "miss" });
        found
    }

    /// Find an account by identifier for editing
    pub fn find_by_id_mut(&mut self, iban: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.iban().as_str() == iban)
    }

    /// Remove an account by identifier
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The removed account, ownership handed back to the caller
    /// * `Err(BankError::AccountNotFound)` - If no account matches; the
    ///   registry is left unchanged
    pub fn remove(&mut self, iban: &str) -> Result<Account, BankError> {
        let position = self
            .accounts
            .iter()
            .position(|a| a.iban().as_str() == iban)
            .ok_or_else(|| BankError::account_not_found(iban))?;

        let removed = self.accounts.remove(position);
        info!("Removed account {}", removed.iban());
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Default for AccountRegistry {
    fn default() -> Self {
        Self::new()
    }
}
