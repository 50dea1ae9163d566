use bmb_core::Position;
use bmb_gameplay::Action;
use bmb_gameplay::Reject;
use tokio::sync::oneshot;

/// An externally submitted action awaiting validation.
///
/// Humans are the reject-and-retry side of the sandbox: an illegal
/// submission is refused with a reason over the reply channel and the
/// seat's decision window keeps running. Strategies never see this type;
/// their submissions are tamed instead.
#[derive(Debug)]
pub struct Submission {
    pub seat: Position,
    pub action: Action,
    pub reply: oneshot::Sender<Result<(), Reject>>,
}

impl Submission {
    /// Pairs a submission with the channel its verdict comes back on.
    pub fn new(seat: Position, action: Action) -> (Self, oneshot::Receiver<Result<(), Reject>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                seat,
                action,
                reply: tx,
            },
            rx,
        )
    }
    pub(crate) fn verdict(self, verdict: Result<(), Reject>) {
        let _ = self.reply.send(verdict);
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{} submits {}", self.seat, self.action)
    }
}
