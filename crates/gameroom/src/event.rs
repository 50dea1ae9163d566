use bmb_cards::Card;
use bmb_core::Chips;
use bmb_core::Position;
use bmb_gameplay::Action;
use bmb_gameplay::Observation;

/// Events sent from room to seats.
/// Each per-hand event carries the hand number so receivers can drop stale
/// messages from earlier hands. [`Event::UpCard`] is tailored per recipient:
/// a seat is never sent its own card.
#[derive(Clone, Debug)]
pub enum Event {
    /// New hand starting with current stacks.
    HandStart {
        hand: u64,
        first: Position,
        stacks: Vec<Chips>,
    },
    /// Another seat's forehead card, as visible to the recipient.
    UpCard {
        hand: u64,
        seat: Position,
        card: Card,
    },
    /// A seat acted. Carries the action as applied plus the running pot.
    Action {
        hand: u64,
        seat: Position,
        action: Action,
        corrected: bool,
        pot: Chips,
    },
    /// It's your turn to act. `ply` numbers decisions monotonically across
    /// the whole session; a reply is only honored for the ply it answers.
    Decision {
        hand: u64,
        ply: u64,
        observation: Observation,
    },
    /// All cards revealed at showdown. None for seats that sat out.
    Showdown {
        hand: u64,
        reveals: Vec<(Position, Option<Card>)>,
    },
    /// Hand settled with payouts and resulting stacks.
    HandEnd {
        hand: u64,
        payouts: Vec<(Position, Chips)>,
        stacks: Vec<Chips>,
    },
    /// The table halted and no further hands will be played.
    Halt,
}

impl Event {
    pub fn hand(&self) -> Option<u64> {
        match self {
            Event::HandStart { hand, .. }
            | Event::UpCard { hand, .. }
            | Event::Action { hand, .. }
            | Event::Decision { hand, .. }
            | Event::Showdown { hand, .. }
            | Event::HandEnd { hand, .. } => Some(*hand),
            Event::Halt => None,
        }
    }
    pub fn is_decision(&self) -> bool {
        matches!(self, Event::Decision { .. })
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::HandStart { hand, first, .. } => write!(f, "Hand #{} (first P{})", hand, first),
            Event::UpCard { seat, card, .. } => write!(f, "P{} shows {}", seat, card),
            Event::Action {
                seat,
                action,
                corrected,
                pot,
                ..
            } => {
                if *corrected {
                    write!(f, "P{}: {} (corrected) pot {}", seat, action, pot)
                } else {
                    write!(f, "P{}: {} pot {}", seat, action, pot)
                }
            }
            Event::Decision { observation, .. } => {
                write!(f, "Your turn: {} to call", observation.to_call)
            }
            Event::Showdown { reveals, .. } => {
                let s = reveals
                    .iter()
                    .map(|(p, c)| match c {
                        Some(card) => format!("P{} {}", p, card),
                        None => format!("P{} -", p),
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Showdown: {}", s)
            }
            Event::HandEnd { payouts, .. } => {
                let s = payouts
                    .iter()
                    .map(|(p, c)| format!("P{} wins {}", p, c))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Winners: {}", s)
            }
            Event::Halt => write!(f, "Table halted"),
        }
    }
}

/// A strategy's answer to a [`Event::Decision`], or its failure to produce
/// one. Faults never crash the table: the room folds the seat and moves on.
/// Carries the ply of the decision it answers; a reply that outlives its
/// decision window is discarded by sequence, never applied to a later turn.
#[derive(Clone, Debug)]
pub enum Reply {
    Action { ply: u64, action: Action },
    Fault { ply: u64, reason: String },
}

impl Reply {
    pub fn ply(&self) -> u64 {
        match self {
            Reply::Action { ply, .. } | Reply::Fault { ply, .. } => *ply,
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Reply::Action { ply, action } => write!(f, "{} (ply {})", action, ply),
            Reply::Fault { ply, reason } => write!(f, "fault (ply {}): {}", ply, reason),
        }
    }
}
