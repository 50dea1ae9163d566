use bmb_core::ID;
use bmb_gameroom::Room;
use bmb_gameroom::RoomReport;
use bmb_gameroom::Submission;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;

/// Handle to communicate with a running room.
/// The casino keeps one per open room; `start` and `done` are one-shot and
/// get taken by the first caller of begin/wait.
pub struct RoomHandle {
    pub id: ID<Room>,
    pub submissions: UnboundedSender<Submission>,
    pub start: Option<oneshot::Sender<()>>,
    pub done: Option<oneshot::Receiver<RoomReport>>,
}

/// Channels for room lifecycle coordination, split between the casino side
/// (handle) and the room side (everything else).
pub struct RoomChannels {
    pub handle: RoomHandle,
    pub submissions: UnboundedReceiver<Submission>,
    pub start: oneshot::Receiver<()>,
    pub done: oneshot::Sender<RoomReport>,
}

impl RoomHandle {
    /// Creates paired channels for room communication.
    pub fn pair(id: ID<Room>) -> RoomChannels {
        let (sub_tx, sub_rx) = unbounded_channel();
        let (start_tx, start_rx) = oneshot::channel();
        let (done_tx, done_rx) = oneshot::channel();
        RoomChannels {
            handle: RoomHandle {
                id,
                submissions: sub_tx,
                start: Some(start_tx),
                done: Some(done_rx),
            },
            submissions: sub_rx,
            start: start_rx,
            done: done_tx,
        }
    }
}
