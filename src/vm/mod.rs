//! VM-facing contract for built-in functions
//!
//! The dispatcher looks functions up by name in a [`BuiltinFunctionTable`]
//! and invokes them with the destination account, if it lives on this shard.

pub mod types;

pub use types::{CallType, ContractCallInput, ExecutionOutcome, Finality, OutputAccount, ReturnCode};

use std::collections::HashMap;
use std::sync::Arc;

use crate::account::UserAccountHandler;
use crate::builtins::EventSink;
use crate::error::BuiltinError;

/// A privileged operation registered in the VM dispatch table
pub trait BuiltinFunction: Send + Sync {
    /// Identifier used in call data to select this function
    fn name(&self) -> &str;

    /// Execute the function. `dest` is `None` when the recipient account is
    /// not resident on the executing shard.
    fn process_builtin_function(
        &self,
        dest: Option<&mut dyn UserAccountHandler>,
        input: Option<&ContractCallInput>,
        sink: &dyn EventSink,
    ) -> Result<ExecutionOutcome, BuiltinError>;
}

/// Name-indexed set of built-in functions
#[derive(Clone, Default)]
pub struct BuiltinFunctionTable {
    functions: HashMap<String, Arc<dyn BuiltinFunction>>,
}

impl BuiltinFunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a function under its own name
    pub fn add(&mut self, function: Arc<dyn BuiltinFunction>) -> Result<(), BuiltinError> {
        let name = function.name().to_string();
        if name.is_empty() {
            return Err(BuiltinError::Configuration(
                "built-in function name is empty".to_string(),
            ));
        }
        if self.functions.contains_key(&name) {
            return Err(BuiltinError::Configuration(format!(
                "built-in function {} already registered",
                name
            )));
        }

        self.functions.insert(name, function);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn BuiltinFunction>, BuiltinError> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| BuiltinError::FunctionNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.functions.keys().cloned().collect();
        keys.sort();
        keys
    }
}
