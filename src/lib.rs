pub mod account;
pub mod builtins;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod vm;

pub use builtins::{EventSink, SaveUserName, USER_NAME_HASH_LENGTH};
pub use error::BuiltinError;
pub use vm::{BuiltinFunction, BuiltinFunctionTable, ContractCallInput, ExecutionOutcome};
