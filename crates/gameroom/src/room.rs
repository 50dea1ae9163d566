use crate::*;
use bmb_cards::Deck;
use bmb_core::*;
use bmb_gameplay::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;

/// Live table coordinator.
/// Imperative shell that owns the Game (functional core) and handles
/// seating, decision timeouts, the two sandbox disciplines, and hand
/// history.
///
/// Room runs hands in a loop until the configured count is reached, the
/// table stops being playable, or the ledger fails to balance. Strategy
/// seats get their submissions tamed into legal actions; human seats get
/// illegal submissions rejected with a reason and may retry within their
/// decision window. Either way a seat that produces nothing in time is
/// folded.
pub struct Room {
    id: ID<Self>,
    config: TableConfig,
    table: Table,
    replies_tx: UnboundedSender<(Position, Reply)>,
    replies: UnboundedReceiver<(Position, Reply)>,
    submissions: UnboundedReceiver<Submission>,
    context: HandLog,
    logs: Vec<HandLog>,
    stacks: Vec<Chips>,
    first: Position,
    hand: u64,
    ply: u64,
}

/// What a finished room reports back to its host.
#[derive(Debug, Clone)]
pub struct RoomReport {
    pub hands: u64,
    pub stacks: Vec<Chips>,
    pub corrections: u64,
    pub halted: bool,
}

impl std::fmt::Display for RoomReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let stacks = self
            .stacks
            .iter()
            .enumerate()
            .map(|(i, c)| format!("P{} {}", i, c))
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} hands, {} corrections: {}",
            self.hands, self.corrections, stacks
        )
    }
}

impl Room {
    pub fn new(
        id: ID<Self>,
        config: TableConfig,
        seats: usize,
        submissions: UnboundedReceiver<Submission>,
    ) -> Self {
        let (replies_tx, replies) = unbounded_channel();
        Self {
            id,
            table: Table::new(seats),
            replies_tx,
            replies,
            submissions,
            context: HandLog::default(),
            logs: Vec::new(),
            stacks: vec![config.starting_stack; seats],
            first: 0,
            hand: 0,
            ply: 0,
            config,
        }
    }
    /// Seats a strategy, spawning its decision loop in its own task.
    pub fn sit<P>(&mut self, pos: Position, player: P)
    where
        P: Player + 'static,
    {
        let inbox = Actor::spawn(pos, Box::new(player), self.replies_tx.clone());
        self.table.sit_bot(pos, inbox);
    }
    /// Seats a human relay; decisions arrive through the submission channel.
    pub fn sit_human(&mut self, pos: Position, sender: UnboundedSender<Event>) {
        self.table.sit_human(pos, sender);
    }
    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn logs(&self) -> &[HandLog] {
        &self.logs
    }
}

impl Room {
    pub async fn run(
        mut self,
        start: oneshot::Receiver<()>,
        done: oneshot::Sender<RoomReport>,
    ) {
        log::debug!("[room {}] waiting for start", self.id);
        let _ = start.await;
        log::debug!("[room {}] starting game loop", self.id);
        let mut halted = false;
        while self.hand < self.config.hands {
            match self.play_hand().await {
                Ok(true) => continue,
                Ok(false) => {
                    log::info!("[room {}] game over after {} hands", self.id, self.hand);
                    break;
                }
                Err(e) => {
                    log::error!("[room {}] halting table: {}", self.id, e);
                    halted = true;
                    break;
                }
            }
        }
        self.table.broadcast(Event::Halt);
        let report = RoomReport {
            hands: self.hand,
            stacks: self.stacks.clone(),
            corrections: self.logs.iter().map(|l| l.corrections() as u64).sum(),
            halted,
        };
        log::info!("[room {}] {}", self.id, report);
        let _ = done.send(report);
    }

    /// Plays one hand start to finish. Ok(false) means the table can no
    /// longer field a hand; Err is the unrecoverable accounting fault.
    async fn play_hand(&mut self) -> Result<bool, LedgerImbalance> {
        let mut game = Game::new(self.config.rules, &self.stacks, self.first);
        if !game.playable() {
            return Ok(false);
        }
        let mut deck = self.deck();
        let antes = game.begin(&mut deck);
        self.context = HandLog::new(self.hand, &game);
        self.table.broadcast(Event::HandStart {
            hand: self.hand,
            first: game.first(),
            stacks: game.stacks(),
        });
        for (pos, action) in antes {
            self.context.record(Play::new(pos, action));
            self.table.broadcast(Event::Action {
                hand: self.hand,
                seat: pos,
                action,
                corrected: false,
                pot: game.pot(),
            });
        }
        self.deal(&game);
        while let Turn::Choice(pos) = game.turn() {
            let play = self.ask(&mut game, pos).await;
            self.context.record(play);
            self.table.broadcast(Event::Action {
                hand: self.hand,
                seat: play.seat,
                action: play.action,
                corrected: play.corrected,
                pot: game.pot(),
            });
        }
        self.table.broadcast(Event::Showdown {
            hand: self.hand,
            reveals: game
                .seats()
                .iter()
                .enumerate()
                .map(|(i, s)| (i, s.card()))
                .collect(),
        });
        let payouts = game.settle()?;
        self.context.close(payouts.clone());
        self.stacks = game.stacks();
        self.table.broadcast(Event::HandEnd {
            hand: self.hand,
            payouts,
            stacks: self.stacks.clone(),
        });
        log::debug!("[room {}] {}", self.id, self.context);
        self.logs.push(std::mem::take(&mut self.context));
        self.first = (self.first + 1) % self.stacks.len();
        self.hand += 1;
        Ok(true)
    }

    fn deck(&self) -> Deck {
        match self.config.seed {
            Some(seed) => Deck::seeded(seed.wrapping_add(self.hand)),
            None => Deck::shuffled(),
        }
    }

    /// Sends each seat every card except its own.
    fn deal(&self, game: &Game) {
        for recipient in 0..self.table.seats() {
            for (seat, holder) in game.seats().iter().enumerate() {
                if seat != recipient {
                    if let Some(card) = holder.card() {
                        self.table.unicast(
                            recipient,
                            Event::UpCard {
                                hand: self.hand,
                                seat,
                                card,
                            },
                        );
                    }
                }
            }
        }
    }

    async fn ask(&mut self, game: &mut Game, pos: Position) -> Play {
        // replies from decisions that already timed out must not be taken
        // for an answer to this one
        while let Ok((seat, reply)) = self.replies.try_recv() {
            log::debug!("[room {}] dropping stale reply from P{}: {}", self.id, seat, reply);
        }
        self.ply += 1;
        let ply = self.ply;
        let observation = Observation::observe(game, pos, self.context.plays());
        self.table.unicast(
            pos,
            Event::Decision {
                hand: self.hand,
                ply,
                observation,
            },
        );
        if self.table.is_bot(pos) {
            self.ask_strategy(game, pos, ply).await
        } else {
            self.ask_human(game, pos).await
        }
    }

    /// Strategy discipline: the submission is tamed into a legal action,
    /// and a timeout or fault costs the seat a fold. Replies are matched by
    /// seat and ply; an answer to any earlier decision is discarded even
    /// when it lands mid-window.
    async fn ask_strategy(&mut self, game: &mut Game, pos: Position, ply: u64) -> Play {
        let mut timer = Timer::new(self.config.timers);
        timer.start_strategy();
        loop {
            let window = timer.remaining().unwrap_or_default();
            match tokio::time::timeout(window, self.replies.recv()).await {
                Ok(Some((seat, Reply::Action { ply: seq, action })))
                    if seat == pos && seq == ply =>
                {
                    let (tamed, corrected) = game.tame(pos, action);
                    let applied = game.act(pos, tamed);
                    return match corrected {
                        true => Play::corrected(pos, applied),
                        false => Play::new(pos, applied),
                    };
                }
                Ok(Some((seat, Reply::Fault { ply: seq, reason })))
                    if seat == pos && seq == ply =>
                {
                    log::warn!(
                        "[room {}] P{} strategy fault, folding: {}",
                        self.id,
                        pos,
                        reason
                    );
                    return Play::corrected(pos, game.force_fold(pos));
                }
                Ok(Some((seat, reply))) => {
                    log::debug!("[room {}] stale reply from P{}: {}", self.id, seat, reply);
                    continue;
                }
                Ok(None) | Err(_) => {
                    log::warn!("[room {}] P{} timed out, folding", self.id, pos);
                    return Play::corrected(pos, game.force_fold(pos));
                }
            }
        }
    }

    /// Human discipline: illegal submissions are rejected with a reason and
    /// the seat may retry until its decision window closes.
    async fn ask_human(&mut self, game: &mut Game, pos: Position) -> Play {
        let mut timer = Timer::new(self.config.timers);
        timer.start_action();
        loop {
            let window = timer.remaining().unwrap_or_default();
            match tokio::time::timeout(window, self.submissions.recv()).await {
                Ok(Some(sub)) if sub.seat == pos => match game.validate(pos, &sub.action) {
                    Ok(()) => {
                        let action = sub.action;
                        sub.verdict(Ok(()));
                        let applied = game.act(pos, action);
                        return Play::new(pos, applied);
                    }
                    Err(reject) => {
                        log::debug!("[room {}] rejected {}: {}", self.id, sub, reject);
                        sub.verdict(Err(reject));
                        continue;
                    }
                },
                Ok(Some(sub)) => {
                    sub.verdict(Err(Reject::NotYourTurn));
                    continue;
                }
                Ok(None) | Err(_) => {
                    log::warn!("[room {}] P{} decision window expired, folding", self.id, pos);
                    return Play::corrected(pos, game.force_fold(pos));
                }
            }
        }
    }
}

impl Unique for Room {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct CheckBot;
    #[async_trait::async_trait]
    impl Player for CheckBot {
        async fn decide(&mut self, _: &Observation) -> anyhow::Result<Action> {
            Ok(Action::Check)
        }
        async fn notify(&mut self, _: &Event) {}
    }

    struct GreedyBot;
    #[async_trait::async_trait]
    impl Player for GreedyBot {
        async fn decide(&mut self, _: &Observation) -> anyhow::Result<Action> {
            Ok(Action::Raise(1_000_000))
        }
        async fn notify(&mut self, _: &Event) {}
    }

    struct SleepyBot;
    #[async_trait::async_trait]
    impl Player for SleepyBot {
        async fn decide(&mut self, _: &Observation) -> anyhow::Result<Action> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Action::Check)
        }
        async fn notify(&mut self, _: &Event) {}
    }

    /// Sleeps past the decision window once, then answers promptly.
    struct LagBot {
        asked: bool,
    }
    #[async_trait::async_trait]
    impl Player for LagBot {
        async fn decide(&mut self, _: &Observation) -> anyhow::Result<Action> {
            if !self.asked {
                self.asked = true;
                tokio::time::sleep(Duration::from_millis(300)).await;
                return Ok(Action::Bet(13));
            }
            Ok(Action::Check)
        }
        async fn notify(&mut self, _: &Event) {}
    }

    struct FaultyBot;
    #[async_trait::async_trait]
    impl Player for FaultyBot {
        async fn decide(&mut self, _: &Observation) -> anyhow::Result<Action> {
            anyhow::bail!("no brain found")
        }
        async fn notify(&mut self, _: &Event) {}
    }

    fn spawn(room: Room) -> oneshot::Receiver<RoomReport> {
        let (start_tx, start_rx) = oneshot::channel();
        let (done_tx, done_rx) = oneshot::channel();
        tokio::spawn(room.run(start_rx, done_tx));
        start_tx.send(()).unwrap();
        done_rx
    }

    fn quiet_room(seats: usize, hands: u64) -> (Room, UnboundedSender<Submission>) {
        let (sub_tx, sub_rx) = unbounded_channel();
        let config = TableConfig::default()
            .with_seed(7)
            .with_hands(hands)
            .with_timeouts(Duration::from_millis(200));
        (Room::new(ID::default(), config, seats, sub_rx), sub_tx)
    }

    #[tokio::test]
    async fn checking_bots_play_a_full_session() {
        let (mut room, _subs) = quiet_room(3, 5);
        room.sit(0, CheckBot);
        room.sit(1, CheckBot);
        room.sit(2, CheckBot);
        let report = spawn(room).await.unwrap();
        assert!(report.hands == 5);
        assert!(!report.halted);
        assert!(report.stacks.iter().sum::<Chips>() == 600);
    }

    #[tokio::test]
    async fn oversized_raises_are_corrected_not_rejected() {
        let (mut room, _subs) = quiet_room(2, 2);
        room.sit(0, GreedyBot);
        room.sit(1, CheckBot);
        let report = spawn(room).await.unwrap();
        assert!(report.hands == 2);
        assert!(report.corrections > 0);
        assert!(report.stacks.iter().sum::<Chips>() == 400);
    }

    #[tokio::test]
    async fn unresponsive_strategy_is_folded() {
        let (mut room, _subs) = quiet_room(2, 1);
        room.sit(0, SleepyBot);
        room.sit(1, CheckBot);
        let report = spawn(room).await.unwrap();
        assert!(report.hands == 1);
        assert!(report.corrections > 0);
        // whoever acted first was folded; all antes went to the other seat
        assert!(report.stacks.iter().sum::<Chips>() == 400);
        assert!(report.stacks.iter().any(|&s| s < bmb_core::STACK));
    }

    #[tokio::test]
    async fn late_reply_from_a_timed_out_decision_is_ignored() {
        let (mut room, _subs) = quiet_room(2, 2);
        room.sit(0, LagBot { asked: false });
        room.sit(1, CheckBot);
        let report = spawn(room).await.unwrap();
        assert!(report.hands == 2);
        // hand one: the lagging seat is folded on deadline. its answer
        // lands mid-way through a later decision and must be discarded,
        // so hand two plays out as plain checks with no further
        // corrections and no bet in the pot.
        assert!(report.corrections == 1);
        assert!(report.stacks.iter().sum::<Chips>() == 400);
        assert!(!report.halted);
    }

    #[tokio::test]
    async fn faulting_strategy_is_folded_and_play_continues() {
        let (mut room, _subs) = quiet_room(2, 3);
        room.sit(0, FaultyBot);
        room.sit(1, CheckBot);
        let report = spawn(room).await.unwrap();
        assert!(report.hands == 3);
        assert!(report.corrections >= 3);
        assert!(!report.halted);
    }

    #[tokio::test]
    async fn human_rejection_and_retry() {
        let (mut room, subs) = quiet_room(2, 1);
        let (relay_tx, _relay_rx) = unbounded_channel();
        room.sit_human(0, relay_tx);
        room.sit(1, CheckBot);
        let done = spawn(room);
        // seat 0 opens the first hand: calling with nothing to call is
        // rejected, then a plain check is accepted
        let (bad, verdict) = Submission::new(0, Action::Call(10));
        subs.send(bad).unwrap();
        assert!(matches!(verdict.await.unwrap(), Err(Reject::IllegalAction(_))));
        let (good, verdict) = Submission::new(0, Action::Check);
        subs.send(good).unwrap();
        assert!(verdict.await.unwrap().is_ok());
        let report = done.await.unwrap();
        assert!(report.hands == 1);
    }

    #[tokio::test]
    async fn absent_human_is_folded_on_deadline() {
        let (mut room, _subs) = quiet_room(2, 1);
        let (relay_tx, _relay_rx) = unbounded_channel();
        room.sit_human(0, relay_tx);
        room.sit(1, CheckBot);
        let report = spawn(room).await.unwrap();
        assert!(report.hands == 1);
        assert!(report.corrections > 0);
    }
}
