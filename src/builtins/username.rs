//! `SetUserName` built-in function
//!
//! Binds a 32-byte username hash to an account. Only DNS addresses may call
//! it. When the recipient lives on another shard the call is forwarded there
//! as an asynchronous call carrying the full gas provided; otherwise the
//! username is written locally and `gas_cost` is charged.

use std::collections::HashSet;

use num_traits::Zero;

use super::auth::AuthorizationSet;
use super::events::{BuiltinEvent, EventSink};
use crate::account::{AccountAccessor, Address, UserAccountHandler};
use crate::encoding::encode_call_data;
use crate::error::BuiltinError;
use crate::vm::{BuiltinFunction, CallType, ContractCallInput, ExecutionOutcome, OutputAccount};

pub const USER_NAME_HASH_LENGTH: usize = 32;

#[derive(Debug, Clone)]
pub struct SaveUserName {
    gas_cost: u64,
    dns_addresses: AuthorizationSet,
    enable_change: bool,
}

impl SaveUserName {
    /// Canonical identifier of the function in call data
    pub const NAME: &'static str = "SetUserName";

    /// The DNS address set is copied; `None` is a configuration error.
    pub fn new(
        gas_cost: u64,
        dns_addresses: Option<&HashSet<Address>>,
        enable_change: bool,
    ) -> Result<Self, BuiltinError> {
        let dns_addresses = dns_addresses
            .ok_or_else(|| BuiltinError::Configuration("nil DNS addresses".to_string()))?;

        Ok(Self {
            gas_cost,
            dns_addresses: AuthorizationSet::from_addresses(dns_addresses),
            enable_change,
        })
    }

    pub fn gas_cost(&self) -> u64 {
        self.gas_cost
    }

    pub fn enable_change(&self) -> bool {
        self.enable_change
    }

    pub fn dns_addresses(&self) -> &AuthorizationSet {
        &self.dns_addresses
    }

    /// Validate the call and either write the username to `dest` or, when
    /// `dest` is absent, build the call to forward to the recipient's shard.
    pub fn process(
        &self,
        dest: Option<&mut dyn UserAccountHandler>,
        input: Option<&ContractCallInput>,
        sink: &dyn EventSink,
    ) -> Result<ExecutionOutcome, BuiltinError> {
        let input = match self.validate(input) {
            Ok(input) => input,
            Err(e) => return Err(self.reject(sink, e)),
        };
        let user_name = &input.arguments[0];

        let dest = match dest {
            Some(dest) => dest,
            None => {
                // Sender shard: no local write, the whole gas budget moves on.
                let output = OutputAccount {
                    address: input.recipient_addr.clone(),
                    data: encode_call_data(Self::NAME, &[user_name]),
                    call_type: CallType::AsynchronousCall,
                    gas_limit: input.gas_provided,
                };
                sink.record(BuiltinEvent::UserNameForwarded {
                    recipient: input.recipient_addr.clone(),
                    gas_limit: input.gas_provided,
                });
                return Ok(ExecutionOutcome::ForwardedCall { output });
            }
        };

        let replaced = !dest.user_name().is_empty();
        if replaced && !self.enable_change {
            return Err(self.reject(sink, BuiltinError::ChangeDisabled));
        }

        dest.set_user_name(user_name);
        sink.record(BuiltinEvent::UserNameSet {
            address: dest.address().to_vec(),
            replaced,
        });

        Ok(ExecutionOutcome::LocalMutation {
            gas_remaining: input.gas_provided - self.gas_cost,
        })
    }

    /// Resolve the recipient through `accounts` and process the call
    pub fn process_for_recipient<A: AccountAccessor + ?Sized>(
        &self,
        accounts: &mut A,
        input: Option<&ContractCallInput>,
        sink: &dyn EventSink,
    ) -> Result<ExecutionOutcome, BuiltinError> {
        match input {
            Some(call) => {
                let dest = accounts.account_mut(&call.recipient_addr);
                self.process(dest, Some(call), sink)
            }
            None => self.process(None, None, sink),
        }
    }

    fn validate<'a>(
        &self,
        input: Option<&'a ContractCallInput>,
    ) -> Result<&'a ContractCallInput, BuiltinError> {
        let input = input.ok_or(BuiltinError::NilInput)?;

        if !input.call_value.is_zero() {
            return Err(BuiltinError::ValueNotAllowed);
        }
        if input.gas_provided < self.gas_cost {
            return Err(BuiltinError::InsufficientGas {
                provided: input.gas_provided,
                required: self.gas_cost,
            });
        }
        if !self.dns_addresses.contains(&input.caller_addr) {
            return Err(BuiltinError::UnauthorizedCaller);
        }
        if input.arguments.len() != 1 {
            return Err(BuiltinError::InvalidArguments(format!(
                "expected 1 argument, got {}",
                input.arguments.len()
            )));
        }
        if input.arguments[0].len() != USER_NAME_HASH_LENGTH {
            return Err(BuiltinError::InvalidArguments(format!(
                "username hash must be {} bytes, got {}",
                USER_NAME_HASH_LENGTH,
                input.arguments[0].len()
            )));
        }

        Ok(input)
    }

    fn reject(&self, sink: &dyn EventSink, err: BuiltinError) -> BuiltinError {
        sink.record(BuiltinEvent::Rejected {
            function: Self::NAME,
            reason: err.to_string(),
        });
        err
    }
}

impl BuiltinFunction for SaveUserName {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn process_builtin_function(
        &self,
        dest: Option<&mut dyn UserAccountHandler>,
        input: Option<&ContractCallInput>,
        sink: &dyn EventSink,
    ) -> Result<ExecutionOutcome, BuiltinError> {
        self.process(dest, input, sink)
    }
}
