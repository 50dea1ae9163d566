use bmb_core::Chips;
use bmb_core::Position;
use serde::Deserialize;
use serde::Serialize;

/// A seat's decision at one ply of the hand.
///
/// Amounts carry different meanings per variant:
/// - `Bet(n)` — chips pushed to open the round's betting
/// - `Call(n)` — chips actually paid, which may be short of the high-water
///   stake when the caller is all-in
/// - `Raise(n)` — the increment above the round's high-water stake; the
///   chips moved are the caller's shortfall plus `n`
/// - `Ante(n)` — the forced contribution posted before the deal
///
/// Serializes tagged (`{"type":"raise","amount":10}`) for the wire protocol
/// and the external strategy stdio contract.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Bet(Chips),
    Call(Chips),
    Raise(Chips),
    Ante(Chips),
}

impl Action {
    /// True if this is a bet or raise (reopens the action).
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_))
    }
    /// True if this is a fold or check (no chips added).
    pub fn is_passive(&self) -> bool {
        matches!(self, Action::Fold | Action::Check)
    }
    /// True if this is a forced ante post (not a decision).
    pub fn is_ante(&self) -> bool {
        matches!(self, Action::Ante(_))
    }
    /// Extracts the carried chip amount.
    pub fn amount(&self) -> Option<Chips> {
        match *self {
            Action::Bet(n) | Action::Call(n) | Action::Raise(n) | Action::Ante(n) => Some(n),
            _ => None,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Check => "Check",
            Action::Bet(_) => "Bet",
            Action::Call(_) => "Call",
            Action::Raise(_) => "Raise",
            Action::Ante(_) => "Ante",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.first().map(|p| p.to_uppercase()).as_deref() {
            Some("FOLD") => Ok(Action::Fold),
            Some("CHECK") => Ok(Action::Check),
            Some("BET") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Action::Bet)
                .ok_or("invalid bet amount"),
            Some("CALL") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Action::Call)
                .ok_or("invalid call amount"),
            Some("RAISE") => parts
                .get(1)
                .and_then(|n| n.parse().ok())
                .map(Action::Raise)
                .ok_or("invalid raise amount"),
            _ => Err("invalid action type"),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Bet(n) => write!(f, "BET   {}", n),
            Action::Call(n) => write!(f, "CALL  {}", n),
            Action::Raise(n) => write!(f, "RAISE {}", n),
            Action::Ante(n) => write!(f, "ANTE  {}", n),
        }
    }
}

/// A recorded action in the hand history: who acted, what was applied, and
/// whether the sandbox had to correct the strategy's submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub seat: Position,
    pub action: Action,
    pub corrected: bool,
}

impl Play {
    pub fn new(seat: Position, action: Action) -> Self {
        Self {
            seat,
            action,
            corrected: false,
        }
    }
    pub fn corrected(seat: Position, action: Action) -> Self {
        Self {
            seat,
            action,
            corrected: true,
        }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.corrected {
            write!(f, "P{}: {} (corrected)", self.seat, self.action)
        } else {
            write!(f, "P{}: {}", self.seat, self.action)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_actions() {
        assert!(Action::try_from("fold") == Ok(Action::Fold));
        assert!(Action::try_from("CHECK") == Ok(Action::Check));
        assert!(Action::try_from("bet 10") == Ok(Action::Bet(10)));
        assert!(Action::try_from("raise 25") == Ok(Action::Raise(25)));
        assert!(Action::try_from("call").is_err());
        assert!(Action::try_from("dance").is_err());
    }

    #[test]
    fn serde_tagged_form() {
        let json = serde_json::to_string(&Action::Raise(10)).unwrap();
        assert!(json == r#"{"type":"raise","amount":10}"#);
        let back: Action = serde_json::from_str(&json).unwrap();
        assert!(back == Action::Raise(10));
        let fold: Action = serde_json::from_str(r#"{"type":"fold"}"#).unwrap();
        assert!(fold == Action::Fold);
    }
}
