use crate::TimerConfig;
use bmb_core::Chips;
use bmb_gameplay::Rules;
use std::time::Duration;

/// Everything a room needs to know before the first card is dealt.
///
/// `seed` makes deals reproducible: hand `h` is dealt from a deck seeded
/// with `seed + h`, so an entire session replays identically. None means
/// fresh OS entropy per hand.
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    pub rules: Rules,
    pub starting_stack: Chips,
    pub hands: u64,
    pub seed: Option<u64>,
    pub timers: TimerConfig,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            starting_stack: bmb_core::STACK,
            hands: 1000,
            seed: None,
            timers: TimerConfig::default(),
        }
    }
}

impl TableConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn with_hands(mut self, hands: u64) -> Self {
        self.hands = hands;
        self
    }
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }
    pub fn with_stack(mut self, stack: Chips) -> Self {
        self.starting_stack = stack;
        self
    }
    /// Timer config with both windows collapsed to the given duration.
    /// Test-oriented; production tables keep the asymmetric defaults.
    pub fn with_timeouts(mut self, timeout: Duration) -> Self {
        self.timers = TimerConfig {
            action: timeout,
            strategy: timeout,
        };
        self
    }
}
