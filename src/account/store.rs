//! Shard-local account storage

use std::collections::HashMap;
use thiserror::Error;

use super::types::{AccountAccessor, Address, UserAccount, UserAccountHandler};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountStoreError {
    #[error("Account already exists: {0}")]
    AccountAlreadyExists(String),
}

/// Accounts resident on one shard
#[derive(Clone, Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<Address, UserAccount>,
}

impl AccountStore {
    /// Create a new empty account store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an account with no username
    pub fn create_account(&mut self, address: Address) -> Result<&mut UserAccount, AccountStoreError> {
        self.insert(UserAccount::new(address))
    }

    /// Add a prepared account
    pub fn insert(&mut self, account: UserAccount) -> Result<&mut UserAccount, AccountStoreError> {
        if self.accounts.contains_key(&account.address) {
            return Err(AccountStoreError::AccountAlreadyExists(hex::encode(&account.address)));
        }

        let address = account.address.clone();
        Ok(self.accounts.entry(address).or_insert(account))
    }

    pub fn get(&self, address: &[u8]) -> Option<&UserAccount> {
        self.accounts.get(address)
    }

    pub fn get_mut(&mut self, address: &[u8]) -> Option<&mut UserAccount> {
        self.accounts.get_mut(address)
    }

    pub fn contains(&self, address: &[u8]) -> bool {
        self.accounts.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountAccessor for AccountStore {
    fn account_mut(&mut self, address: &[u8]) -> Option<&mut dyn UserAccountHandler> {
        self.accounts
            .get_mut(address)
            .map(|account| account as &mut dyn UserAccountHandler)
    }
}
