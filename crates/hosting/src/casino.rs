use crate::RoomHandle;
use bmb_core::ID;
use bmb_core::Position;
use bmb_gameplay::Reject;
use bmb_gameroom::Event;
use bmb_gameroom::Protocol;
use bmb_gameroom::Room;
use bmb_gameroom::RoomReport;
use bmb_gameroom::Submission;
use bmb_gameroom::TableConfig;
use bmb_players::Loader;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;

/// How one seat of a new room is filled.
pub enum Seating {
    /// An uploaded strategy, named relative to the loader's directory.
    Strategy(String),
    /// A human client; events are relayed out through the given sender and
    /// actions come back through [`Casino::submit`].
    Human(UnboundedSender<Event>),
}

/// Manages active game rooms and their lifecycles.
pub struct Casino {
    loader: Loader,
    rooms: RwLock<HashMap<ID<Room>, RoomHandle>>,
}

impl Casino {
    pub fn new(loader: Loader) -> Self {
        Self {
            loader,
            rooms: RwLock::new(HashMap::new()),
        }
    }

    /// Opens a new room with the given seating and spawns its task. The
    /// room idles until [`Casino::begin`]. Strategy processes are started
    /// here, so a rejected upload fails the whole open.
    pub async fn open(&self, config: TableConfig, seats: Vec<Seating>) -> anyhow::Result<ID<Room>> {
        anyhow::ensure!(seats.len() >= 2, "a table needs at least two seats");
        let id = ID::default();
        let channels = RoomHandle::pair(id);
        let mut room = Room::new(id, config, seats.len(), channels.submissions);
        for (pos, seating) in seats.into_iter().enumerate() {
            match seating {
                Seating::Strategy(name) => room.sit(pos, self.loader.load(&name)?),
                Seating::Human(sender) => room.sit_human(pos, sender),
            }
        }
        self.rooms.write().await.insert(id, channels.handle);
        tokio::spawn(room.run(channels.start, channels.done));
        log::info!("[casino] opened room {}", id);
        Ok(id)
    }

    /// Releases the start signal; the room begins dealing.
    pub async fn begin(&self, id: ID<Room>) -> anyhow::Result<()> {
        let start = self
            .rooms
            .write()
            .await
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("room {} not found", id))?
            .start
            .take()
            .ok_or_else(|| anyhow::anyhow!("room {} already started", id))?;
        start
            .send(())
            .map_err(|_| anyhow::anyhow!("room {} is gone", id))?;
        Ok(())
    }

    /// Routes a human client's command into its room. The outer error is
    /// infrastructural (no such room, bad syntax, room gone); the inner
    /// result is the room's verdict on the action itself.
    pub async fn submit(
        &self,
        id: ID<Room>,
        seat: Position,
        command: &str,
    ) -> anyhow::Result<Result<(), Reject>> {
        let action = Protocol::decode(command)?;
        let (submission, verdict) = Submission::new(seat, action);
        self.rooms
            .read()
            .await
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("room {} not found", id))?
            .submissions
            .send(submission)
            .map_err(|_| anyhow::anyhow!("room {} is gone", id))?;
        Ok(verdict.await?)
    }

    /// Waits for the room to finish and removes it. One caller only.
    pub async fn wait(&self, id: ID<Room>) -> anyhow::Result<RoomReport> {
        let done = self
            .rooms
            .write()
            .await
            .get_mut(&id)
            .ok_or_else(|| anyhow::anyhow!("room {} not found", id))?
            .done
            .take()
            .ok_or_else(|| anyhow::anyhow!("room {} already awaited", id))?;
        let report = done.await?;
        self.close(id).await?;
        Ok(report)
    }

    /// Removes a room from the casino. The room task itself winds down when
    /// its channels close.
    pub async fn close(&self, id: ID<Room>) -> anyhow::Result<()> {
        self.rooms
            .write()
            .await
            .remove(&id)
            .map(|_| log::info!("[casino] closed room {}", id))
            .ok_or_else(|| anyhow::anyhow!("room {} not found", id))
    }

    pub async fn occupancy(&self) -> usize {
        self.rooms.read().await.len()
    }
}
