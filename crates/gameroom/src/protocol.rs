use crate::Event;
use crate::Reveal;
use crate::ServerMessage;
use crate::Winner;
use bmb_gameplay::Action;

/// Errors that can occur while decoding client input.
#[derive(Debug, Clone)]
pub enum ProtocolError {
    InvalidAction(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAction(s) => write!(f, "invalid action: {}", s),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Handles Event to ServerMessage conversion and action parsing.
/// Centralizes the protocol layer between internal events and wire format.
pub struct Protocol;

impl Protocol {
    /// Converts an internal Event to a wire ServerMessage.
    pub fn encode(event: &Event) -> ServerMessage {
        match event {
            Event::HandStart {
                hand,
                first,
                stacks,
            } => ServerMessage::HandStart {
                hand: *hand,
                first: *first,
                stacks: stacks.clone(),
            },
            Event::UpCard { hand, seat, card } => ServerMessage::UpCard {
                hand: *hand,
                seat: *seat,
                card: card.to_string(),
            },
            Event::Action {
                hand,
                seat,
                action,
                corrected,
                pot,
            } => ServerMessage::Action {
                hand: *hand,
                seat: *seat,
                action: action.to_string(),
                corrected: *corrected,
                pot: *pot,
            },
            Event::Decision {
                hand, observation, ..
            } => ServerMessage::Decision {
                hand: *hand,
                observation: observation.clone(),
            },
            Event::Showdown { hand, reveals } => ServerMessage::Showdown {
                hand: *hand,
                reveals: reveals
                    .iter()
                    .map(|(seat, card)| Reveal {
                        seat: *seat,
                        card: card.map(|c| c.to_string()),
                    })
                    .collect(),
            },
            Event::HandEnd {
                hand,
                payouts,
                stacks,
            } => ServerMessage::HandEnd {
                hand: *hand,
                winners: payouts
                    .iter()
                    .map(|(seat, amount)| Winner {
                        seat: *seat,
                        amount: *amount,
                    })
                    .collect(),
                stacks: stacks.clone(),
            },
            Event::Halt => ServerMessage::Halt,
        }
    }
    /// Parses a client command string into an Action.
    pub fn decode(s: &str) -> Result<Action, ProtocolError> {
        Action::try_from(s).map_err(|_| ProtocolError::InvalidAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmb_cards::Card;

    #[test]
    fn decode_valid_action() {
        assert!(Protocol::decode("fold").is_ok());
        assert!(Protocol::decode("check").is_ok());
        assert!(Protocol::decode("call 10").is_ok());
        assert!(Protocol::decode("raise 20").is_ok());
    }

    #[test]
    fn decode_invalid_action() {
        assert!(Protocol::decode("invalid").is_err());
        assert!(Protocol::decode("call").is_err()); // missing amount
    }

    #[test]
    fn encode_upcard_as_display_string() {
        let card = Card::try_from("As").unwrap();
        let event = Event::UpCard {
            hand: 3,
            seat: 1,
            card,
        };
        let json = Protocol::encode(&event).to_json();
        assert!(json.contains(r#""type":"up_card""#));
        assert!(json.contains(r#""card":"As""#));
        assert!(json.contains(r#""hand":3"#));
    }

    #[test]
    fn encode_showdown_skips_absent_cards() {
        let event = Event::Showdown {
            hand: 0,
            reveals: vec![(0, Card::try_from("Kd").ok()), (1, None)],
        };
        let json = Protocol::encode(&event).to_json();
        assert!(json.contains(r#""card":"Kd""#));
        // seat 1 sat out; its entry carries no card field at all
        assert!(!json.contains("null"));
    }
}
