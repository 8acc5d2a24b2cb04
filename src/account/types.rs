//! Account type definitions for the built-in function layer

use serde::{Deserialize, Serialize};

use crate::encoding::hex_bytes;

/// Raw account address
pub type Address = Vec<u8>;

/// Mutable view of an account's username binding
pub trait UserAccountHandler {
    fn address(&self) -> &[u8];

    /// Current username hash, empty if never set
    fn user_name(&self) -> &[u8];

    fn set_user_name(&mut self, user_name: &[u8]);
}

/// Resolves accounts that live on the executing shard
pub trait AccountAccessor {
    /// `None` means the account is not resident on this shard.
    fn account_mut(&mut self, address: &[u8]) -> Option<&mut dyn UserAccountHandler>;
}

/// Main account structure
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct UserAccount {
    #[serde(with = "hex_bytes")]
    pub address: Address,
    #[serde(with = "hex_bytes", default)]
    pub user_name: Vec<u8>,
}

impl UserAccount {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            user_name: Vec::new(),
        }
    }

    pub fn with_user_name(mut self, user_name: Vec<u8>) -> Self {
        self.user_name = user_name;
        self
    }

    pub fn has_user_name(&self) -> bool {
        !self.user_name.is_empty()
    }
}

impl UserAccountHandler for UserAccount {
    fn address(&self) -> &[u8] {
        &self.address
    }

    fn user_name(&self) -> &[u8] {
        &self.user_name
    }

    fn set_user_name(&mut self, user_name: &[u8]) {
        self.user_name = user_name.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_name_starts_empty() {
        let account = UserAccount::new(vec![1, 2, 3]);
        assert!(!account.has_user_name());
        assert!(account.user_name().is_empty());
        assert_eq!(account.address(), &[1, 2, 3]);
    }

    #[test]
    fn test_set_user_name() {
        let mut account = UserAccount::new(vec![7]);
        account.set_user_name(&[9; 32]);
        assert!(account.has_user_name());
        assert_eq!(account.user_name(), &[9; 32]);
    }

    #[test]
    fn test_account_json_fields() {
        let account = UserAccount::new(vec![0xaa]).with_user_name(vec![0x0b; 2]);
        let value = serde_json::to_value(&account).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert_eq!(object["address"], "aa");
        assert_eq!(object["user_name"], "0b0b");
    }
}
