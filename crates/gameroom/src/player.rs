use crate::Event;
use bmb_gameplay::Action;
use bmb_gameplay::Observation;

/// Trait for entities that make betting decisions.
/// Implementations can be in-process strategies, external processes speaking
/// JSON over stdio, or anything else that fits in a box.
///
/// The async design lets strategies spawn blocking computation, await
/// subprocess I/O, or await remote responses without blocking the room.
/// The room is transport-agnostic: it neither knows nor cares where the
/// decision comes from.
///
/// `decide` is fallible. A returned error is a strategy fault, not a table
/// fault: the room logs it and folds the seat for the hand in progress.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Make a decision from the seat's information set. The observation
    /// contains everything visible to this seat, and never its own card.
    async fn decide(&mut self, observation: &Observation) -> anyhow::Result<Action>;

    /// Receive notification of game events. Called for all public actions
    /// and for private events tailored to this seat. Not required for
    /// decision-making; observations are self-contained.
    async fn notify(&mut self, event: &Event);
}

#[async_trait::async_trait]
impl Player for Box<dyn Player> {
    async fn decide(&mut self, observation: &Observation) -> anyhow::Result<Action> {
        (**self).decide(observation).await
    }
    async fn notify(&mut self, event: &Event) {
        (**self).notify(event).await
    }
}
