use std::time::Duration;
use tokio::time::Instant;

/// Configuration for decision timeouts.
///
/// Humans get the longer action window; out-of-process strategies get the
/// short strategy window, since a well-behaved bot answers in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    pub action: Duration,
    pub strategy: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            action: Duration::from_millis(bmb_core::ACTION_TIMEOUT_MS),
            strategy: Duration::from_millis(bmb_core::STRATEGY_TIMEOUT_MS),
        }
    }
}

/// Manages deadline tracking for seat decisions.
#[derive(Debug)]
pub struct Timer {
    config: TimerConfig,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(config: TimerConfig) -> Self {
        Self {
            config,
            deadline: None,
        }
    }
    pub fn start_action(&mut self) {
        self.deadline = Some(Instant::now() + self.config.action);
    }
    pub fn start_strategy(&mut self) {
        self.deadline = Some(Instant::now() + self.config.strategy);
    }
    /// Time left before the deadline. Zero once expired, None if not started.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
}
