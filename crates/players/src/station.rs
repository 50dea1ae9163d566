use bmb_gameplay::Action;
use bmb_gameplay::Observation;
use bmb_gameroom::Event;
use bmb_gameroom::Player;

/// Calls any bet, checks when free, never raises. The other degenerate
/// baseline: where [`crate::Rock`] concedes every pot, the station pays to
/// see every showdown.
pub struct CallStation;

#[async_trait::async_trait]
impl Player for CallStation {
    async fn decide(&mut self, observation: &Observation) -> anyhow::Result<Action> {
        match observation.to_call {
            0 => Ok(Action::Check),
            n => Ok(Action::Call(n.min(observation.stack))),
        }
    }

    async fn notify(&mut self, _: &Event) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmb_cards::Deck;
    use bmb_gameplay::Game;
    use bmb_gameplay::Rules;

    #[tokio::test]
    async fn station_pays_whatever_it_takes() {
        let mut game = Game::new(Rules::default(), &[200, 200], 0);
        let mut deck = Deck::seeded(4);
        game.begin(&mut deck);
        game.act(0, Action::Bet(50));
        let obs = Observation::observe(&game, 1, &[]);
        let mut station = CallStation;
        assert!(station.decide(&obs).await.unwrap() == Action::Call(50));
    }
}
