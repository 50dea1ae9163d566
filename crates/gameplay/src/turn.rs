use bmb_core::Position;

/// Whose turn it is to act, or whether the hand is over.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    /// Seat `Position` must make a decision.
    Choice(Position),
    /// The hand is over; settle the pot.
    Terminal,
}

impl Turn {
    /// Extracts the seat index. Panics if not a Choice.
    pub fn position(&self) -> Position {
        match self {
            Self::Choice(c) => *c,
            _ => panic!("don't ask"),
        }
    }
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice(_))
    }
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal)
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Terminal => write!(f, "-"),
        }
    }
}

/// Phase of the hand's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Antes not yet collected, cards not yet dealt.
    Ante,
    /// Betting round `usize` (1-indexed) in progress.
    Betting(usize),
    /// Betting complete; awaiting settlement.
    Showdown,
    /// Pot distributed; terminal per-hand state.
    Settled,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ante => write!(f, "ante"),
            Self::Betting(r) => write!(f, "betting({})", r),
            Self::Showdown => write!(f, "showdown"),
            Self::Settled => write!(f, "settled"),
        }
    }
}
