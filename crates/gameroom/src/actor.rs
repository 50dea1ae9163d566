use crate::Event;
use crate::Player;
use crate::Reply;
use bmb_core::Position;
use tokio::sync::mpsc::*;

/// Wrapper that runs a Player in its own async task.
/// Handles message passing between Room and Player implementation.
///
/// - Room unicasts Decision when it's this seat's turn
/// - Actor calls Player::decide and sends the reply back to Room
/// - Room broadcasts events for all game actions
/// - Actor forwards events to Player::notify
///
/// A faulting strategy replies with [`Reply::Fault`] instead of crashing
/// the task; the room decides what that costs the seat.
pub struct Actor {
    id: Position,
    player: Box<dyn Player>,
    getter: UnboundedReceiver<Event>,
    sender: UnboundedSender<(Position, Reply)>,
}

impl Actor {
    pub fn spawn(
        id: Position,
        player: Box<dyn Player>,
        sender: UnboundedSender<(Position, Reply)>,
    ) -> UnboundedSender<Event> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            id,
            player,
            sender,
            getter: rx,
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        loop {
            match self.getter.recv().await {
                Some(ref event @ Event::Decision {
                    ply,
                    ref observation,
                    ..
                }) => {
                    log::debug!("[actor P{}] received Decision (ply {})", self.id, ply);
                    self.player.notify(event).await;
                    let reply = match self.player.decide(observation).await {
                        Ok(action) => {
                            log::debug!("[actor P{}] decided {}", self.id, action);
                            Reply::Action { ply, action }
                        }
                        Err(e) => {
                            log::warn!("[actor P{}] strategy fault: {:#}", self.id, e);
                            Reply::Fault {
                                ply,
                                reason: format!("{:#}", e),
                            }
                        }
                    };
                    let _ = self.sender.send((self.id, reply));
                }
                Some(Event::Halt) => break,
                Some(ref event) => {
                    log::trace!("[actor P{}] received {}", self.id, event);
                    self.player.notify(event).await;
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmb_gameplay::Action;
    use bmb_gameplay::Observation;

    struct Parrot(Action);
    #[async_trait::async_trait]
    impl Player for Parrot {
        async fn decide(&mut self, _: &Observation) -> anyhow::Result<Action> {
            Ok(self.0)
        }
        async fn notify(&mut self, _: &Event) {}
    }

    struct Broken;
    #[async_trait::async_trait]
    impl Player for Broken {
        async fn decide(&mut self, _: &Observation) -> anyhow::Result<Action> {
            anyhow::bail!("strategy exploded")
        }
        async fn notify(&mut self, _: &Event) {}
    }

    fn decision() -> Event {
        use bmb_cards::Deck;
        use bmb_gameplay::Game;
        use bmb_gameplay::Rules;
        let mut game = Game::new(Rules::default(), &[200, 200], 0);
        let mut deck = Deck::seeded(1);
        game.begin(&mut deck);
        Event::Decision {
            hand: 0,
            ply: 1,
            observation: Observation::observe(&game, 0, &[]),
        }
    }

    #[tokio::test]
    async fn actor_relays_decisions() {
        let (tx, mut rx) = unbounded_channel();
        let inbox = Actor::spawn(0, Box::new(Parrot(Action::Check)), tx);
        inbox.send(decision()).unwrap();
        let (seat, reply) = rx.recv().await.unwrap();
        assert!(seat == 0);
        assert!(matches!(
            reply,
            Reply::Action {
                ply: 1,
                action: Action::Check
            }
        ));
    }

    #[tokio::test]
    async fn actor_reports_faults_instead_of_dying() {
        let (tx, mut rx) = unbounded_channel();
        let inbox = Actor::spawn(3, Box::new(Broken), tx);
        inbox.send(decision()).unwrap();
        let (seat, reply) = rx.recv().await.unwrap();
        assert!(seat == 3);
        assert!(matches!(reply, Reply::Fault { .. }));
        // the task is still alive and answers again
        inbox.send(decision()).unwrap();
        assert!(matches!(rx.recv().await, Some((3, Reply::Fault { .. }))));
    }
}
