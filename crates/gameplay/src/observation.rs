use crate::Game;
use crate::Play;
use crate::State;
use bmb_cards::Card;
use bmb_core::Chips;
use bmb_core::Position;
use serde::Deserialize;
use serde::Serialize;

/// What one seat is allowed to see of another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatView {
    pub seat: Position,
    /// The card on that seat's forehead. None for seats sitting out.
    pub card: Option<Card>,
    pub stack: Chips,
    pub stake: Chips,
    pub risked: Chips,
    pub folded: bool,
}

/// The information set handed to a strategy when it must act.
///
/// This is the one place card knowledge is filtered: the observer sees every
/// other seat's card but never its own. Serialized as JSON for out-of-process
/// strategies, so field names are part of the strategy contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub seat: Position,
    pub stack: Chips,
    pub stake: Chips,
    pub risked: Chips,
    pub pot: Chips,
    pub round: usize,
    pub to_call: Chips,
    pub min_raise: Chips,
    pub others: Vec<SeatView>,
    pub history: Vec<Play>,
}

impl Observation {
    /// Snapshot of the game from `pos`'s point of view.
    pub fn observe(game: &Game, pos: Position, history: &[Play]) -> Self {
        let me = game.seat(pos);
        let others = game
            .seats()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .map(|(i, seat)| SeatView {
                seat: i,
                card: seat.card(),
                stack: seat.stack(),
                stake: seat.stake(),
                risked: seat.risked(),
                folded: seat.state() == State::Folding,
            })
            .collect();
        Self {
            seat: pos,
            stack: me.stack(),
            stake: me.stake(),
            risked: me.risked(),
            pot: game.pot(),
            round: game.round(),
            to_call: game.to_call(pos),
            min_raise: game.min_raise(),
            others,
            history: history.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;
    use crate::Rules;
    use bmb_cards::Deck;

    fn observed(pos: Position) -> Observation {
        let mut game = Game::new(Rules::default(), &[200, 200, 200], 0);
        let mut deck = Deck::seeded(42);
        game.begin(&mut deck);
        Observation::observe(&game, pos, &[])
    }

    #[test]
    fn own_card_is_never_visible() {
        let obs = observed(0);
        assert!(obs.others.len() == 2);
        assert!(obs.others.iter().all(|v| v.seat != 0));
        assert!(obs.others.iter().all(|v| v.card.is_some()));
    }

    #[test]
    fn views_disagree_about_which_cards_exist() {
        let a = observed(0);
        let b = observed(1);
        let seen_by_a: Vec<_> = a.others.iter().filter_map(|v| v.card).collect();
        let seen_by_b: Vec<_> = b.others.iter().filter_map(|v| v.card).collect();
        assert!(seen_by_a != seen_by_b);
    }

    #[test]
    fn observation_tracks_the_bet() {
        let mut game = Game::new(Rules::default(), &[200, 200, 200], 0);
        let mut deck = Deck::seeded(42);
        game.begin(&mut deck);
        game.act(0, Action::Bet(25));
        let obs = Observation::observe(&game, 1, &[]);
        assert!(obs.to_call == 25);
        assert!(obs.min_raise == 25);
        assert!(obs.pot == 40);
        assert!(obs.stack == 195);
    }

    #[test]
    fn serializes_without_leaking_the_own_card() {
        let obs = observed(2);
        let json = serde_json::to_string(&obs).unwrap();
        let back: Observation = serde_json::from_str(&json).unwrap();
        assert!(back == obs);
        // the observer's card must not appear anywhere in the payload
        let mut game = Game::new(Rules::default(), &[200, 200, 200], 0);
        let mut deck = Deck::seeded(42);
        game.begin(&mut deck);
        let own = game.seat(2).card().unwrap();
        assert!(!json.contains(&own.to_string()));
    }
}
