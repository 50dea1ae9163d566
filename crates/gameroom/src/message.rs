use bmb_core::*;
use bmb_gameplay::Observation;
use serde::Serialize;

/// Messages sent from server to client.
/// All per-hand messages include the hand number for proper sequencing, so
/// clients can associate messages with hands and ignore stale ones.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Initial connection confirmation with seat assignment.
    Connected { room: String, seat: Position },
    /// A new hand is starting.
    HandStart {
        hand: u64,
        first: Position,
        stacks: Vec<Chips>,
    },
    /// Another seat's forehead card, as visible to this client.
    UpCard {
        hand: u64,
        seat: Position,
        card: String,
    },
    /// A seat took an action.
    Action {
        hand: u64,
        seat: Position,
        action: String,
        corrected: bool,
        pot: Chips,
    },
    /// It's your turn to act.
    Decision { hand: u64, observation: Observation },
    /// All cards revealed at showdown, your own included.
    Showdown { hand: u64, reveals: Vec<Reveal> },
    /// Hand settled.
    HandEnd {
        hand: u64,
        winners: Vec<Winner>,
        stacks: Vec<Chips>,
    },
    /// The table stopped and no further hands will be played.
    Halt,
}

/// A seat's card revealed at showdown. None means the seat sat out.
#[derive(Clone, Debug, Serialize)]
pub struct Reveal {
    pub seat: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,
}

/// A winner's payout at hand end.
#[derive(Clone, Debug, Serialize)]
pub struct Winner {
    pub seat: Position,
    pub amount: Chips,
}

impl ServerMessage {
    pub fn connected(room: &str, seat: Position) -> Self {
        Self::Connected {
            room: room.to_string(),
            seat,
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}
