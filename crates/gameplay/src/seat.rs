use bmb_cards::Card;
use bmb_core::Chips;

/// A seat's standing within the current hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Live and able to act.
    Betting,
    /// All-in; no further actions, still eligible for pots up to its cap.
    Shoving,
    /// Folded; forfeits all claim to the pot.
    Folding,
    /// Could not post the ante; sitting this hand out entirely.
    Out,
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "B"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
            State::Out => write!(f, "O"),
        }
    }
}

/// One seat at the table during a hand.
///
/// Tracks the stack, the dealt card (hidden from its own holder at the
/// information boundary, not here), the per-round stake, and the hand-total
/// risked chips that the settlement layers side pots from.
#[derive(Debug, Clone, Copy)]
pub struct Seat {
    stack: Chips,
    card: Option<Card>,
    state: State,
    stake: Chips,
    risked: Chips,
    acted: bool,
}

impl From<Chips> for Seat {
    fn from(stack: Chips) -> Self {
        Self {
            stack,
            card: None,
            state: State::Out,
            stake: 0,
            risked: 0,
            acted: false,
        }
    }
}

impl Seat {
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn card(&self) -> Option<Card> {
        self.card
    }
    pub fn state(&self) -> State {
        self.state
    }
    /// Chips put in during the current betting round.
    pub fn stake(&self) -> Chips {
        self.stake
    }
    /// Chips put in across the whole hand, antes included.
    pub fn risked(&self) -> Chips {
        self.risked
    }
    /// Whether the seat has acted since the round opened or was reopened.
    pub fn acted(&self) -> bool {
        self.acted
    }
    pub fn is_live(&self) -> bool {
        matches!(self.state, State::Betting | State::Shoving)
    }

    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }
    pub(crate) fn set_card(&mut self, card: Card) {
        self.card = Some(card);
    }
    pub(crate) fn set_acted(&mut self, acted: bool) {
        self.acted = acted;
    }
    /// Posts the ante: chips leave the stack and count as risked, but do not
    /// open a betting stake.
    pub(crate) fn post(&mut self, ante: Chips) {
        assert!(ante <= self.stack);
        self.stack -= ante;
        self.risked += ante;
    }
    /// Moves chips into the round's stake. Going to zero means all-in.
    pub(crate) fn bet(&mut self, chips: Chips) {
        assert!(chips <= self.stack);
        self.stack -= chips;
        self.stake += chips;
        self.risked += chips;
        if self.stack == 0 {
            self.state = State::Shoving;
        }
    }
    pub(crate) fn win(&mut self, reward: Chips) {
        self.stack += reward;
    }
    pub(crate) fn next_round(&mut self) {
        self.stake = 0;
        self.acted = false;
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.card {
            Some(card) => write!(f, "{} {} {:>6}", self.state, card, self.stack),
            None => write!(f, "{} ?? {:>6}", self.state, self.stack),
        }
    }
}
