use crate::State;
use bmb_cards::Rank;
use bmb_core::Chips;
use bmb_core::Position;

/// Per-seat ledger entry consumed by the showdown.
///
/// Entries are ordered by tie-break priority when handed to [`crate::Showdown`];
/// that ordering decides who receives indivisible pot remainders.
#[derive(Debug, Clone)]
pub struct Settlement {
    seat: Position,
    reward: Chips,
    risked: Chips,
    status: State,
    rank: Rank,
}

impl Settlement {
    pub fn seat(&self) -> Position {
        self.seat
    }
    pub fn reward(&self) -> Chips {
        self.reward
    }
    pub fn risked(&self) -> Chips {
        self.risked
    }
    pub fn status(&self) -> State {
        self.status
    }
    pub fn rank(&self) -> Rank {
        self.rank
    }
    /// Eligible to win chips: live at showdown, neither folded nor out.
    pub fn contends(&self) -> bool {
        matches!(self.status, State::Betting | State::Shoving)
    }
    pub fn pnl(&self) -> Chips {
        self.reward - self.risked
    }
    pub(crate) fn add(&mut self, amount: Chips) {
        self.reward += amount;
    }
}

impl From<(Position, Chips, State, Rank)> for Settlement {
    fn from((seat, risked, status, rank): (Position, Chips, State, Rank)) -> Self {
        Self {
            seat,
            reward: 0,
            risked,
            status,
            rank,
        }
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{} {} {:+}", self.seat, self.rank, self.pnl())
    }
}
