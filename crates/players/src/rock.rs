use bmb_gameplay::Action;
use bmb_gameplay::Observation;
use bmb_gameroom::Event;
use bmb_gameroom::Player;

/// Never voluntarily puts a chip in the pot: checks when free, folds when
/// not. The loader seats this in place of a strategy that failed to start,
/// so a broken upload bleeds antes instead of crashing the table.
pub struct Rock;

#[async_trait::async_trait]
impl Player for Rock {
    async fn decide(&mut self, observation: &Observation) -> anyhow::Result<Action> {
        match observation.to_call {
            0 => Ok(Action::Check),
            _ => Ok(Action::Fold),
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
    async fn rock_checks_when_free_folds_when_not() {
        let mut game = Game::new(Rules::default(), &[200, 200], 0);
        let mut deck = Deck::seeded(2);
        game.begin(&mut deck);
        let mut rock = Rock;
        let free = Observation::observe(&game, 0, &[]);
        assert!(rock.decide(&free).await.unwrap() == Action::Check);
        game.act(0, Action::Bet(10));
        let facing = Observation::observe(&game, 1, &[]);
        assert!(rock.decide(&facing).await.unwrap() == Action::Fold);
    }
}
