use bmb_core::Chips;

/// Why an externally submitted action was refused.
///
/// All variants are recoverable: the submitter is told why and the hand
/// continues waiting. These are the rejection reasons exposed through the
/// action submission interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reject {
    /// The action violates the betting rules at this moment.
    IllegalAction(String),
    /// The submitting seat is not the acting seat.
    NotYourTurn,
    /// No hand is currently accepting actions.
    HandNotInBettingRound,
}

impl std::fmt::Display for Reject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalAction(s) => write!(f, "illegal action: {}", s),
            Self::NotYourTurn => write!(f, "not your turn"),
            Self::HandNotInBettingRound => write!(f, "hand not in betting round"),
        }
    }
}

impl std::error::Error for Reject {}

/// Fatal internal-consistency fault: chips collected and chips distributed
/// disagree at settlement. Indicates broken accounting, never a recoverable
/// runtime condition; the table must halt rather than pay out a wrong pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerImbalance {
    pub staked: Chips,
    pub rewarded: Chips,
}

impl std::fmt::Display for LedgerImbalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ledger imbalance: staked {} != rewarded {}",
            self.staked, self.rewarded
        )
    }
}

impl std::error::Error for LedgerImbalance {}
