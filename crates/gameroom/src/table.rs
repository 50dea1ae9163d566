use crate::Event;
use bmb_core::*;
use std::collections::HashSet;
use tokio::sync::mpsc::UnboundedSender;

/// Manages physical table state: seat occupancy and event fan-out.
/// Separates who sits where from how the hand plays out.
///
/// A seat is either a bot (an [`crate::Actor`] replying on the room's
/// decision channel) or a human (replying through [`crate::Submission`]s);
/// both receive events through the same senders.
#[derive(Debug)]
pub struct Table {
    senders: Vec<Option<UnboundedSender<Event>>>,
    bots: HashSet<Position>,
}

impl Table {
    /// Creates a table with capacity for n seats.
    pub fn new(n: usize) -> Self {
        Self {
            senders: vec![None; n],
            bots: HashSet::new(),
        }
    }
    /// Seats a strategy actor at the given position.
    pub fn sit_bot(&mut self, pos: Position, sender: UnboundedSender<Event>) {
        if pos < self.senders.len() {
            self.senders[pos] = Some(sender);
            self.bots.insert(pos);
        }
    }
    /// Seats a human relay at the given position.
    pub fn sit_human(&mut self, pos: Position, sender: UnboundedSender<Event>) {
        if pos < self.senders.len() {
            self.senders[pos] = Some(sender);
            self.bots.remove(&pos);
        }
    }
    pub fn is_bot(&self, pos: Position) -> bool {
        self.bots.contains(&pos)
    }
    pub fn seats(&self) -> usize {
        self.senders.len()
    }
    pub fn occupied(&self) -> usize {
        self.senders.iter().filter(|s| s.is_some()).count()
    }
    pub fn sender(&self, pos: Position) -> Option<&UnboundedSender<Event>> {
        self.senders.get(pos).and_then(|s| s.as_ref())
    }
    /// Sends an event to a specific seat.
    pub fn unicast(&self, pos: Position, event: Event) {
        log::trace!("[table] unicast to P{}: {}", pos, event);
        match self.sender(pos).map(|inbox| inbox.send(event)) {
            Some(Ok(())) => {}
            Some(Err(e)) => log::warn!("[table] unicast to P{} failed: {:?}", pos, e),
            None => log::trace!("[table] unicast to P{}: empty seat", pos),
        }
    }
    /// Sends an event to all occupied seats.
    pub fn broadcast(&self, event: Event) {
        log::trace!("[table] broadcast: {}", event);
        self.senders.iter().enumerate().for_each(|(i, sender)| {
            if let Some(inbox) = sender {
                if let Err(e) = inbox.send(event.clone()) {
                    log::warn!("[table] broadcast to P{} failed: {:?}", i, e);
                }
            }
        });
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(bmb_core::N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;

    #[test]
    fn table_starts_empty() {
        let table = Table::new(3);
        assert_eq!(table.seats(), 3);
        assert_eq!(table.occupied(), 0);
    }

    #[test]
    fn bots_and_humans_are_told_apart() {
        let mut table = Table::new(2);
        let (tx, _rx) = unbounded_channel();
        table.sit_bot(0, tx.clone());
        table.sit_human(1, tx);
        assert!(table.is_bot(0));
        assert!(!table.is_bot(1));
        assert_eq!(table.occupied(), 2);
    }

    #[test]
    fn unicast_reaches_the_right_seat() {
        let mut table = Table::new(2);
        let (tx0, mut rx0) = unbounded_channel();
        let (tx1, mut rx1) = unbounded_channel();
        table.sit_bot(0, tx0);
        table.sit_bot(1, tx1);
        table.unicast(1, Event::Halt);
        assert!(rx0.try_recv().is_err());
        assert!(matches!(rx1.try_recv(), Ok(Event::Halt)));
    }
}
