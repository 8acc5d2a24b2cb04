use serde::Serialize;
use tracing::info;

use crate::account::{AccountStore, UserAccount};
use crate::builtins::{SaveUserName, TracingSink};
use crate::config::BuiltinsConfig;
use crate::crypto::hash_username_hex;
use crate::error::BuiltinError;
use crate::vm::{ContractCallInput, ExecutionOutcome, Finality};

/// What `process` prints on success
#[derive(Serialize, Debug)]
pub struct ProcessReport {
    pub outcome: ExecutionOutcome,
    pub finality: Finality,
    /// Recipient username after the call, when the account is local
    pub user_name: Option<String>,
}

pub fn handle_process_command(
    config_path: &str,
    input_path: &str,
    present: bool,
    current_username: Option<String>,
) -> Result<ProcessReport, BuiltinError> {
    let config = BuiltinsConfig::load(config_path)?;
    let function = config.build_save_user_name()?;

    let raw = std::fs::read_to_string(input_path)
        .map_err(|e| BuiltinError::InvalidInput(format!("read {}: {}", input_path, e)))?;
    let input: ContractCallInput = serde_json::from_str(&raw)
        .map_err(|e| BuiltinError::InvalidInput(format!("parse {}: {}", input_path, e)))?;

    let mut store = AccountStore::new();
    if present || current_username.is_some() {
        let existing = match current_username {
            Some(h) => hex::decode(h.trim())
                .map_err(|e| BuiltinError::InvalidInput(format!("current username: {}", e)))?,
            None => Vec::new(),
        };
        store
            .insert(UserAccount::new(input.recipient_addr.clone()).with_user_name(existing))
            .map_err(|e| BuiltinError::InvalidInput(e.to_string()))?;
    }

    info!(
        "{}: recipient {} resident: {}",
        SaveUserName::NAME,
        hex::encode(&input.recipient_addr),
        store.contains(&input.recipient_addr)
    );

    let outcome = function.process_for_recipient(&mut store, Some(&input), &TracingSink)?;
    let user_name = store
        .get(&input.recipient_addr)
        .map(|account| hex::encode(&account.user_name));

    Ok(ProcessReport {
        finality: outcome.finality(),
        outcome,
        user_name,
    })
}

/// One-line report for a failed `process` run
pub fn failure_message(err: &BuiltinError) -> String {
    format!("{} failed ({:?}): {}", SaveUserName::NAME, err.return_code(), err)
}

pub fn handle_hash_command(name: &str) -> String {
    hash_username_hex(name)
}

pub fn handle_init_config(path: &str) -> Result<(), BuiltinError> {
    BuiltinsConfig::default().save(path)
}
