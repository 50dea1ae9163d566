use bmb_core::*;

/// How odd chips and tied ranks are prioritized at settlement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Earliest seat in the hand's turn order wins the remainder.
    #[default]
    TurnOrder,
    /// Lowest seat index wins the remainder regardless of rotation.
    SeatOrder,
}

/// Per-table betting parameters. Passed explicitly at construction; there is
/// no ambient global configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Forced contribution from every seat before the deal.
    pub ante: Chips,
    /// Smallest legal opening bet or raise increment.
    pub min_raise: Chips,
    /// Number of betting rounds per hand.
    pub rounds: usize,
    /// Seat priority for indivisible pot remainders.
    pub tie_break: TieBreak,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            ante: ANTE,
            min_raise: MIN_RAISE,
            rounds: BETTING_ROUNDS,
            tie_break: TieBreak::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_parameters() {
        let rules = Rules::default();
        assert!(rules.ante == 5);
        assert!(rules.min_raise == 1);
        assert!(rules.rounds == 1);
        assert!(rules.tie_break == TieBreak::TurnOrder);
    }
}
