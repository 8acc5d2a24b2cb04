use thiserror::Error;

use crate::vm::ReturnCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Nil VM input")]
    NilInput,
    #[error("Built-in function called with value")]
    ValueNotAllowed,
    #[error("Not enough gas: provided {provided}, required {required}")]
    InsufficientGas { provided: u64, required: u64 },
    #[error("Caller is not an authorized DNS address")]
    UnauthorizedCaller,
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("User name change is disabled")]
    ChangeDisabled,
    #[error("Built-in function not found: {0}")]
    FunctionNotFound(String),
    #[error("Invalid call data: {0}")]
    InvalidCallData(String),
    #[error("Invalid call input: {0}")]
    InvalidInput(String),
}

impl BuiltinError {
    /// Return code the dispatcher reports when rejecting the transaction.
    pub fn return_code(&self) -> ReturnCode {
        match self {
            BuiltinError::InsufficientGas { .. } => ReturnCode::OutOfGas,
            BuiltinError::FunctionNotFound(_) => ReturnCode::FunctionNotFound,
            BuiltinError::Configuration(_) | BuiltinError::NilInput => ReturnCode::ExecutionFailed,
            BuiltinError::ValueNotAllowed
            | BuiltinError::UnauthorizedCaller
            | BuiltinError::InvalidArguments(_)
            | BuiltinError::ChangeDisabled
            | BuiltinError::InvalidCallData(_)
            | BuiltinError::InvalidInput(_) => ReturnCode::UserError,
        }
    }
}
