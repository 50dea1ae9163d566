use bmb_gameplay::Action;
use bmb_gameplay::Observation;
use bmb_gameroom::Event;
use bmb_gameroom::Player;
use rand::seq::IndexedRandom;

/// Example strategy that chooses randomly among its plausible actions.
/// Demonstrates synchronous decision-making in async context; useful as a
/// sparring partner and for soaking the table loop in tests.
pub struct Fish;

impl Fish {
    fn candidates(observation: &Observation) -> Vec<Action> {
        let mut options = vec![Action::Fold];
        if observation.to_call == 0 {
            options.push(Action::Check);
            if observation.stack > 0 {
                options.push(Action::Bet(observation.min_raise.min(observation.stack)));
            }
        } else {
            options.push(Action::Call(observation.to_call.min(observation.stack)));
            if observation.stack > observation.to_call {
                options.push(Action::Raise(observation.min_raise));
            }
        }
        options
    }
}

#[async_trait::async_trait]
impl Player for Fish {
    async fn decide(&mut self, observation: &Observation) -> anyhow::Result<Action> {
        let ref mut rng = rand::rng();
        Self::candidates(observation)
            .choose(rng)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("no candidate actions"))
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
    async fn fish_always_produces_something_plausible() {
        let mut game = Game::new(Rules::default(), &[200, 200], 0);
        let mut deck = Deck::seeded(11);
        game.begin(&mut deck);
        let observation = Observation::observe(&game, 0, &[]);
        let mut fish = Fish;
        for _ in 0..50 {
            let action = fish.decide(&observation).await.unwrap();
            let (tamed, _) = game.tame(0, action);
            assert!(game.validate(0, &tamed).is_ok() || tamed == Action::Fold);
        }
    }
}
