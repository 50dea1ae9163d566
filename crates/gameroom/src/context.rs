use bmb_cards::Card;
use bmb_core::*;
use bmb_gameplay::Game;
use bmb_gameplay::Play;

/// Complete record of a hand in progress.
/// Tracks everything needed to audit a hand after the fact: who held what,
/// every action as applied (with correction flags), and the final payouts.
#[derive(Debug, Clone)]
pub struct HandLog {
    hand: u64,
    first: Position,
    holdings: Vec<Option<Card>>,
    stacks: Vec<Chips>,
    plays: Vec<Play>,
    payouts: Vec<(Position, Chips)>,
}

impl HandLog {
    /// Captures the deal: cards and stacks as they stood after antes.
    pub fn new(hand: u64, game: &Game) -> Self {
        Self {
            hand,
            first: game.first(),
            holdings: game.seats().iter().map(|s| s.card()).collect(),
            stacks: game.stacks(),
            plays: Vec::new(),
            payouts: Vec::new(),
        }
    }
    pub fn hand(&self) -> u64 {
        self.hand
    }
    pub fn first(&self) -> Position {
        self.first
    }
    pub fn holdings(&self) -> &[Option<Card>] {
        &self.holdings
    }
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }
    pub fn payouts(&self) -> &[(Position, Chips)] {
        &self.payouts
    }
    /// How many submissions the sandbox had to correct this hand.
    pub fn corrections(&self) -> usize {
        self.plays.iter().filter(|p| p.corrected).count()
    }
    pub fn record(&mut self, play: Play) {
        self.plays.push(play);
    }
    pub fn close(&mut self, payouts: Vec<(Position, Chips)>) {
        self.payouts = payouts;
    }
}

impl Default for HandLog {
    fn default() -> Self {
        Self {
            hand: 0,
            first: 0,
            holdings: Vec::new(),
            stacks: Vec::new(),
            plays: Vec::new(),
            payouts: Vec::new(),
        }
    }
}

impl std::fmt::Display for HandLog {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "hand #{} first P{}", self.hand, self.first)?;
        for (i, (card, stack)) in self.holdings.iter().zip(self.stacks.iter()).enumerate() {
            match card {
                Some(c) => writeln!(f, "  P{} {} ({})", i, c, stack)?,
                None => writeln!(f, "  P{} out ({})", i, stack)?,
            }
        }
        for play in &self.plays {
            writeln!(f, "  {}", play)?;
        }
        for (pos, chips) in &self.payouts {
            writeln!(f, "  P{} wins {}", pos, chips)?;
        }
        Ok(())
    }
}
