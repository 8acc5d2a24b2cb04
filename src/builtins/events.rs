//! Observability events emitted by built-in functions

use std::sync::Mutex;
use tracing::{debug, info, warn};

use crate::account::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinEvent {
    /// Destination not on this shard; the call was handed on with its gas.
    UserNameForwarded { recipient: Address, gas_limit: u64 },
    /// Username written to a local account.
    UserNameSet { address: Address, replaced: bool },
    /// The call failed validation and nothing was changed.
    Rejected { function: &'static str, reason: String },
}

/// Receives events from `process` calls
pub trait EventSink: Send + Sync {
    fn record(&self, event: BuiltinEvent);
}

/// Emits events through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: BuiltinEvent) {
        match event {
            BuiltinEvent::UserNameForwarded { recipient, gas_limit } => {
                warn!(
                    "SetUserName: destination {} not in shard, forwarding with gas limit {}",
                    hex::encode(recipient),
                    gas_limit
                );
            }
            BuiltinEvent::UserNameSet { address, replaced } => {
                info!("SetUserName: username set for {} (replaced: {})", hex::encode(address), replaced);
            }
            BuiltinEvent::Rejected { function, reason } => {
                debug!("{} rejected: {}", function, reason);
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn record(&self, _event: BuiltinEvent) {}
}

/// Keeps events in memory, in arrival order
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<BuiltinEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BuiltinEvent> {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemorySink {
    fn record(&self, event: BuiltinEvent) {
        self.events.lock().unwrap_or_else(|e| e.into_inner()).push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.record(BuiltinEvent::UserNameSet { address: vec![1], replaced: false });
        sink.record(BuiltinEvent::Rejected { function: "SetUserName", reason: "no".to_string() });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], BuiltinEvent::UserNameSet { .. }));
        assert!(matches!(events[1], BuiltinEvent::Rejected { .. }));
    }

    #[test]
    fn test_tracing_and_noop_sinks_accept_events() {
        TracingSink.record(BuiltinEvent::UserNameForwarded { recipient: vec![2], gas_limit: 10 });
        NoopSink.record(BuiltinEvent::UserNameSet { address: vec![3], replaced: true });
    }
}
