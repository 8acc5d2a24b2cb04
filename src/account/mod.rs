//! Account access for built-in functions
//!
//! Built-in functions only see accounts resident on the executing shard:
//! - `UserAccountHandler` exposes the username field of one account
//! - `AccountAccessor` resolves a recipient address, or reports it absent
//! - `AccountStore` is the in-memory shard-local implementation

pub mod types;
pub mod store;

pub use types::{AccountAccessor, Address, UserAccount, UserAccountHandler};
pub use store::{AccountStore, AccountStoreError};
