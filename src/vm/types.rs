//! Call input and output types exchanged with the VM dispatcher

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::account::Address;
use crate::encoding::{decimal, hex_bytes, hex_list, text_bytes};

/// Outcome code reported back to the dispatcher
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReturnCode {
    Ok,
    FunctionNotFound,
    UserError,
    OutOfGas,
    ExecutionFailed,
}

/// How a generated call is delivered
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    DirectCall,
    AsynchronousCall,
}

/// Whether the effects of a successful call are already applied
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Finality {
    /// State was written on this shard.
    Committed,
    /// The operation still has to run on the recipient's shard.
    PendingDispatch,
}

/// Contract call as handed to a built-in function
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContractCallInput {
    #[serde(with = "hex_bytes")]
    pub caller_addr: Address,
    #[serde(with = "hex_bytes")]
    pub recipient_addr: Address,
    #[serde(with = "decimal", default)]
    pub call_value: BigUint,
    pub gas_provided: u64,
    #[serde(with = "hex_list", default)]
    pub arguments: Vec<Vec<u8>>,
}

impl ContractCallInput {
    /// Create a call input carrying no value
    pub fn new(
        caller_addr: Address,
        recipient_addr: Address,
        gas_provided: u64,
        arguments: Vec<Vec<u8>>,
    ) -> Self {
        Self {
            caller_addr,
            recipient_addr,
            call_value: BigUint::default(),
            gas_provided,
            arguments,
        }
    }

    pub fn with_value(mut self, call_value: BigUint) -> Self {
        self.call_value = call_value;
        self
    }
}

/// Follow-up call addressed to another shard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OutputAccount {
    #[serde(with = "hex_bytes")]
    pub address: Address,
    /// Call data, always ASCII
    #[serde(with = "text_bytes")]
    pub data: Vec<u8>,
    pub call_type: CallType,
    pub gas_limit: u64,
}

/// Successful result of a built-in function call
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutionOutcome {
    /// The destination account was updated in place.
    LocalMutation { gas_remaining: u64 },
    /// The destination lives elsewhere; the call travels with its full gas.
    ForwardedCall { output: OutputAccount },
}

impl ExecutionOutcome {
    pub fn return_code(&self) -> ReturnCode {
        ReturnCode::Ok
    }

    pub fn finality(&self) -> Finality {
        match self {
            ExecutionOutcome::LocalMutation { .. } => Finality::Committed,
            ExecutionOutcome::ForwardedCall { .. } => Finality::PendingDispatch,
        }
    }

    /// Gas handed back to the caller. Forwarded calls keep none locally.
    pub fn gas_remaining(&self) -> u64 {
        match self {
            ExecutionOutcome::LocalMutation { gas_remaining } => *gas_remaining,
            ExecutionOutcome::ForwardedCall { .. } => 0,
        }
    }

    pub fn forwarded_call(&self) -> Option<&OutputAccount> {
        match self {
            ExecutionOutcome::ForwardedCall { output } => Some(output),
            ExecutionOutcome::LocalMutation { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_input_from_json() {
        let json = r#"{
            "caller_addr": "aa01",
            "recipient_addr": "bb02",
            "call_value": "0",
            "gas_provided": 5000,
            "arguments": ["0a0b"]
        }"#;

        let input: ContractCallInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.caller_addr, vec![0xaa, 0x01]);
        assert_eq!(input.recipient_addr, vec![0xbb, 0x02]);
        assert_eq!(input.call_value, BigUint::default());
        assert_eq!(input.gas_provided, 5000);
        assert_eq!(input.arguments, vec![vec![0x0a, 0x0b]]);
    }

    #[test]
    fn test_call_input_value_defaults_to_zero() {
        let json = r#"{"caller_addr": "aa", "recipient_addr": "bb", "gas_provided": 1}"#;
        let input: ContractCallInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.call_value, BigUint::default());
        assert!(input.arguments.is_empty());
    }

    #[test]
    fn test_large_call_value_parses() {
        let json = r#"{
            "caller_addr": "aa",
            "recipient_addr": "bb",
            "call_value": "340282366920938463463374607431768211456",
            "gas_provided": 1
        }"#;
        let input: ContractCallInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.call_value, BigUint::from(1u8) << 128);
    }

    #[test]
    fn test_outcome_accessors() {
        let local = ExecutionOutcome::LocalMutation { gas_remaining: 42 };
        assert_eq!(local.return_code(), ReturnCode::Ok);
        assert_eq!(local.finality(), Finality::Committed);
        assert_eq!(local.gas_remaining(), 42);
        assert!(local.forwarded_call().is_none());

        let forwarded = ExecutionOutcome::ForwardedCall {
            output: OutputAccount {
                address: vec![1, 2],
                data: b"SetUserName@00".to_vec(),
                call_type: CallType::AsynchronousCall,
                gas_limit: 900,
            },
        };
        assert_eq!(forwarded.return_code(), ReturnCode::Ok);
        assert_eq!(forwarded.finality(), Finality::PendingDispatch);
        assert_eq!(forwarded.gas_remaining(), 0);
        assert_eq!(forwarded.forwarded_call().unwrap().gas_limit, 900);
    }

    #[test]
    fn test_forwarded_data_serializes_as_text() {
        let forwarded = ExecutionOutcome::ForwardedCall {
            output: OutputAccount {
                address: vec![0xbb],
                data: b"SetUserName@0a0b".to_vec(),
                call_type: CallType::AsynchronousCall,
                gas_limit: 5,
            },
        };

        let json = serde_json::to_string(&forwarded).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["output"]["data"], "SetUserName@0a0b");
        assert_eq!(value["output"]["address"], "bb");

        let back: ExecutionOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, forwarded);
    }

    #[test]
    fn test_outcome_json_is_tagged() {
        let local = ExecutionOutcome::LocalMutation { gas_remaining: 7 };
        let value = serde_json::to_value(&local).unwrap();
        assert_eq!(value["kind"], "local_mutation");
        assert_eq!(value["gas_remaining"], 7);
    }
}
