//! Message sink: the output channel for strategy confirmations.
//!
//! Payment, delivery and notification strategies confirm what they did with
//! a single human-readable line. Routing those lines through an injected
//! sink keeps the domain crates free of any concrete output stream and lets
//! tests capture emissions (or assert their absence).

use std::sync::Mutex;

/// Receiver for human-readable confirmation messages.
///
/// Messages are informational, not a machine-parsed protocol. Implementations
/// must always succeed; there is no error channel.
pub trait MessageSink: Send + Sync + core::fmt::Debug {
    fn emit(&self, message: &str);
}

/// Production sink: forwards every message to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn emit(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Capturing sink for tests: records messages in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock only loses captured messages.
        self.messages.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl MessageSink for RecordingSink {
    fn emit(&self, message: &str) {
        self.lock().push(message.to_string());
    }
}
