//! Coordinator timing configuration.

use serde::Deserialize;
use serde::Serialize;
use std::time::Duration;

/// Debounce, timeout and buffering policy of a coordinator.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoordinatorConfig {
    /// Quiet period in milliseconds.
    ///
    /// An edit is sent to the oracle once no further edit has arrived for
    /// this long. Each edit restarts the timer.
    pub debounce_ms: u64,

    /// Upper bound in milliseconds on how long a burst of edits can hold
    /// back a request, measured from the first edit of the burst.
    pub max_debounce_ms: u64,

    /// How long one oracle round-trip may take before the query is
    /// reported as `Unknown`.
    pub oracle_timeout_ms: u64,

    /// How many editing events may queue up before senders wait.
    pub event_buffer: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 150,
            max_debounce_ms: 1_000,
            oracle_timeout_ms: 2_000,
            event_buffer: 64,
        }
    }
}

impl CoordinatorConfig {
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn with_max_debounce_ms(mut self, max_debounce_ms: u64) -> Self {
        self.max_debounce_ms = max_debounce_ms;
        self
    }

    pub fn with_oracle_timeout_ms(mut self, oracle_timeout_ms: u64) -> Self {
        self.oracle_timeout_ms = oracle_timeout_ms;
        self
    }

    pub fn with_event_buffer(mut self, event_buffer: usize) -> Self {
        self.event_buffer = event_buffer;
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn max_debounce(&self) -> Duration {
        Duration::from_millis(self.max_debounce_ms.max(self.debounce_ms))
    }

    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_millis(self.oracle_timeout_ms)
    }

    /// How long after the latest edit the pending request fires, given how
    /// long ago the burst started.
    pub fn delay_after(&self, since_first_change: Duration) -> Duration {
        self.debounce()
            .min(self.max_debounce().saturating_sub(since_first_change))
    }
}
