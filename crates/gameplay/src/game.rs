use crate::Action;
use crate::LedgerImbalance;
use crate::Phase;
use crate::Reject;
use crate::Rules;
use crate::Seat;
use crate::Settlement;
use crate::Showdown;
use crate::State;
use crate::TieBreak;
use crate::Turn;
use bmb_cards::Deck;
use bmb_core::Chips;
use bmb_core::Position;

/// One hand of Indian Poker in progress.
///
/// The authority for turn order, action legality, and chip accounting.
/// Mutation happens only through [`Game::begin`], [`Game::act`], and
/// [`Game::settle`]; everything else is a pure view of the present state.
/// Callers gate actions through [`Game::validate`] (humans: reject and
/// re-request) or [`Game::tame`] (strategies: deterministic downgrade)
/// before applying them.
#[derive(Debug, Clone)]
pub struct Game {
    seats: Vec<Seat>,
    rules: Rules,
    phase: Phase,
    pot: Chips,
    first: Position,
    ticker: Position,
    last_raise: Chips,
}

impl Game {
    /// A fresh hand over the given stacks. `first` rotates across hands and
    /// decides both who opens each round and tie-break priority.
    pub fn new(rules: Rules, stacks: &[Chips], first: Position) -> Self {
        assert!(!stacks.is_empty());
        Self {
            seats: stacks.iter().copied().map(Seat::from).collect(),
            rules,
            phase: Phase::Ante,
            pot: 0,
            first: first % stacks.len(),
            ticker: first % stacks.len(),
            last_raise: 0,
        }
    }
    /// Whether enough seats can post the full ante for a hand to start.
    pub fn playable(&self) -> bool {
        self.seats
            .iter()
            .filter(|s| s.stack() >= self.rules.ante)
            .count()
            >= 2
    }
    /// Collects antes, deals one card per active seat, and opens betting.
    /// Seats that cannot cover the ante sit the hand out. Returns the posted
    /// antes for the hand history.
    pub fn begin(&mut self, deck: &mut Deck) -> Vec<(Position, Action)> {
        assert!(self.phase == Phase::Ante, "hand already started");
        assert!(self.playable(), "not enough seats can ante");
        let mut plays = Vec::new();
        for pos in self.rotation() {
            let seat = &mut self.seats[pos];
            if seat.stack() >= self.rules.ante {
                seat.post(self.rules.ante);
                seat.set_state(State::Betting);
                self.pot += self.rules.ante;
                plays.push((pos, Action::Ante(self.rules.ante)));
            } else {
                seat.set_state(State::Out);
            }
        }
        for pos in self.rotation() {
            if self.seats[pos].state() == State::Betting {
                let card = deck.draw();
                self.seats[pos].set_card(card);
            }
        }
        self.phase = Phase::Betting(1);
        self.last_raise = 0;
        self.ticker = self.opener();
        plays
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn first(&self) -> Position {
        self.first
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, pos: Position) -> &Seat {
        &self.seats[pos]
    }
    pub fn stacks(&self) -> Vec<Chips> {
        self.seats.iter().map(Seat::stack).collect()
    }
    pub fn round(&self) -> usize {
        match self.phase {
            Phase::Betting(r) => r,
            _ => 0,
        }
    }
    pub fn turn(&self) -> Turn {
        match self.phase {
            Phase::Ante => panic!("deal before asking"),
            Phase::Betting(_) => Turn::Choice(self.ticker),
            Phase::Showdown | Phase::Settled => Turn::Terminal,
        }
    }
    /// The round's high-water stake, including folded and all-in stakes.
    pub fn high(&self) -> Chips {
        self.seats.iter().map(Seat::stake).max().unwrap_or(0)
    }
    /// Shortfall the seat must pay to stay in.
    pub fn to_call(&self, pos: Position) -> Chips {
        self.high() - self.seats[pos].stake()
    }
    /// Smallest raise increment that reopens the action.
    pub fn min_raise(&self) -> Chips {
        self.last_raise.max(self.rules.min_raise)
    }
    /// Representative legal actions for the acting seat, with minimum
    /// amounts filled in. Used for decision prompts; [`Game::validate`] is
    /// the authority for arbitrary amounts.
    pub fn legal(&self) -> Vec<Action> {
        let mut options = Vec::new();
        let pos = match self.turn() {
            Turn::Choice(p) => p,
            Turn::Terminal => return options,
        };
        let seat = &self.seats[pos];
        let high = self.high();
        let shortfall = high - seat.stake();
        if shortfall == 0 {
            options.push(Action::Check);
        }
        if high == 0 && seat.stack() > 0 {
            options.push(Action::Bet(self.rules.min_raise.min(seat.stack())));
        }
        if high > 0 && shortfall > 0 {
            options.push(Action::Call(shortfall.min(seat.stack())));
            if seat.stack() > shortfall {
                options.push(Action::Raise(
                    self.min_raise().min(seat.stack() - shortfall),
                ));
            }
        }
        options.push(Action::Fold);
        options
    }

    /// Checks an externally submitted action against the current state.
    /// Illegal submissions are rejected with a reason and must be
    /// re-requested; nothing is applied.
    pub fn validate(&self, pos: Position, action: &Action) -> Result<(), Reject> {
        if !matches!(self.phase, Phase::Betting(_)) {
            return Err(Reject::HandNotInBettingRound);
        }
        if pos != self.ticker {
            return Err(Reject::NotYourTurn);
        }
        let seat = &self.seats[pos];
        let high = self.high();
        let shortfall = high - seat.stake();
        let illegal = |reason: &str| Err(Reject::IllegalAction(reason.to_string()));
        match *action {
            Action::Fold => Ok(()),
            Action::Check => {
                if shortfall == 0 {
                    Ok(())
                } else {
                    illegal("cannot check facing a bet")
                }
            }
            Action::Bet(n) => {
                if high > 0 {
                    illegal("round already opened; raise instead")
                } else if n <= 0 || n > seat.stack() {
                    illegal("bet must be between 1 and the remaining stack")
                } else if n < self.rules.min_raise && n != seat.stack() {
                    illegal("bet below table minimum")
                } else {
                    Ok(())
                }
            }
            Action::Call(_) => {
                if high == 0 || shortfall == 0 {
                    illegal("nothing to call")
                } else {
                    Ok(())
                }
            }
            Action::Raise(n) => {
                // submitted amounts are unbounded; compare without addition
                if high == 0 {
                    illegal("no bet to raise; open with a bet")
                } else if n <= 0 || n > seat.stack() - shortfall {
                    illegal("raise exceeds remaining stack")
                } else if n < self.min_raise() && n != seat.stack() - shortfall {
                    illegal("raise below minimum increment")
                } else {
                    Ok(())
                }
            }
            Action::Ante(_) => illegal("antes are posted automatically"),
        }
    }

    /// Deterministically downgrades a strategy's submission to a legal
    /// action. Never rejects: an over-large raise is capped to all-in, an
    /// impossible aggression becomes the closest cheaper action, and
    /// anything else becomes check if free, else fold. The bool reports
    /// whether the submission was changed, for the hand history.
    pub fn tame(&self, pos: Position, action: Action) -> (Action, bool) {
        assert!(matches!(self.phase, Phase::Betting(_)) && pos == self.ticker);
        let seat = &self.seats[pos];
        let high = self.high();
        let shortfall = high - seat.stake();
        let stack = seat.stack();
        let cheap = if shortfall == 0 {
            Action::Check
        } else {
            Action::Fold
        };
        let tamed = match action {
            Action::Fold => Action::Fold,
            Action::Check if shortfall == 0 => Action::Check,
            Action::Check => Action::Fold,
            Action::Call(_) if high == 0 || shortfall == 0 => cheap,
            Action::Call(_) => Action::Call(shortfall.min(stack)),
            Action::Bet(n) | Action::Raise(n) if high == 0 => {
                if stack <= 0 {
                    cheap
                } else if stack < self.rules.min_raise {
                    Action::Bet(stack)
                } else {
                    Action::Bet(n.clamp(self.rules.min_raise, stack))
                }
            }
            Action::Bet(n) | Action::Raise(n) => {
                if stack <= shortfall {
                    Action::Call(stack)
                } else {
                    let max = stack - shortfall;
                    let min = self.min_raise().min(max);
                    Action::Raise(n.clamp(min, max))
                }
            }
            Action::Ante(_) => cheap,
        };
        // a call's amount is informational; normalizing it is not a
        // correction, changing the verb is
        let corrected = match (action, tamed) {
            (Action::Call(_), Action::Call(_)) => false,
            (submitted, applied) => submitted != applied,
        };
        (tamed, corrected)
    }

    /// Applies a validated or tamed action for the acting seat, advancing
    /// the phase as rounds close. Returns the action as applied (call
    /// amounts are normalized to the chips actually paid).
    pub fn act(&mut self, pos: Position, action: Action) -> Action {
        debug_assert!(self.validate(pos, &action).is_ok(), "unvalidated action");
        let high = self.high();
        let seat_stake = self.seats[pos].stake();
        let applied = match action {
            Action::Fold => {
                self.seats[pos].set_state(State::Folding);
                self.seats[pos].set_acted(true);
                Action::Fold
            }
            Action::Check => {
                self.seats[pos].set_acted(true);
                Action::Check
            }
            Action::Call(_) => {
                let paid = (high - seat_stake).min(self.seats[pos].stack());
                self.seats[pos].bet(paid);
                self.seats[pos].set_acted(true);
                self.pot += paid;
                Action::Call(paid)
            }
            Action::Bet(n) => {
                self.seats[pos].bet(n);
                self.pot += n;
                self.last_raise = n;
                self.reopen(pos);
                Action::Bet(n)
            }
            Action::Raise(n) => {
                let paid = (high - seat_stake) + n;
                self.seats[pos].bet(paid);
                self.pot += paid;
                // an all-in under-raise does not reset the raise size
                if n >= self.min_raise() {
                    self.last_raise = n;
                }
                self.reopen(pos);
                Action::Raise(n)
            }
            Action::Ante(_) => unreachable!("antes are posted in begin"),
        };
        self.advance();
        applied
    }

    /// Folds the acting seat without consulting it. Used for timeouts,
    /// disconnects, and strategy faults.
    pub fn force_fold(&mut self, pos: Position) -> Action {
        self.act(pos, Action::Fold)
    }

    /// Seat indices in turn order, starting from the hand's opener.
    fn rotation(&self) -> Vec<Position> {
        let n = self.seats.len();
        (0..n).map(|i| (self.first + i) % n).collect()
    }
    fn opener(&self) -> Position {
        self.rotation()
            .into_iter()
            .find(|&p| self.seats[p].state() == State::Betting)
            .expect("at least one live seat")
    }
    /// A bet or raise reopens the action for every other live seat.
    fn reopen(&mut self, pos: Position) {
        for (i, seat) in self.seats.iter_mut().enumerate() {
            if seat.state() == State::Betting {
                seat.set_acted(i == pos);
            }
        }
        if self.seats[pos].state() == State::Shoving {
            self.seats[pos].set_acted(true);
        }
    }
    fn contenders(&self) -> usize {
        self.seats.iter().filter(|s| s.is_live()).count()
    }
    fn actionable(&self) -> usize {
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .count()
    }
    /// All seats still able to act have acted since the last aggression and
    /// match the high-water stake.
    fn round_closed(&self) -> bool {
        let high = self.high();
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .all(|s| s.acted() && s.stake() == high)
    }
    fn advance(&mut self) {
        if self.contenders() <= 1 {
            self.phase = Phase::Showdown;
        } else if self.round_closed() {
            let round = self.round();
            if round >= self.rules.rounds || self.actionable() <= 1 {
                self.phase = Phase::Showdown;
            } else {
                for seat in self.seats.iter_mut() {
                    seat.next_round();
                }
                self.last_raise = 0;
                self.phase = Phase::Betting(round + 1);
                self.ticker = self.opener();
            }
        } else {
            self.next_player();
        }
    }
    fn next_player(&mut self) {
        loop {
            self.ticker += 1;
            self.ticker %= self.seats.len();
            if self.seats[self.ticker].state() == State::Betting {
                break;
            }
        }
    }

    /// Per-seat ledger entries in tie-break order.
    pub fn settlements(&self) -> Vec<Settlement> {
        assert!(self.phase == Phase::Showdown, "hand not at showdown");
        let order: Vec<Position> = match self.rules.tie_break {
            TieBreak::TurnOrder => self.rotation(),
            TieBreak::SeatOrder => (0..self.seats.len()).collect(),
        };
        order
            .into_iter()
            .map(|pos| {
                let seat = &self.seats[pos];
                let rank = seat.card().map(|c| c.rank()).unwrap_or_default();
                Settlement::from((pos, seat.risked(), seat.state(), rank))
            })
            .collect()
    }
    /// Distributes the pot and applies payouts to stacks. A mismatch
    /// between chips collected and chips distributed is the fatal
    /// accounting fault: nothing is applied and the table must halt.
    pub fn settle(&mut self) -> Result<Vec<(Position, Chips)>, LedgerImbalance> {
        let results = Showdown::from(self.settlements()).settle();
        let staked = results.iter().map(|s| s.risked()).sum::<Chips>();
        let rewarded = results.iter().map(|s| s.reward()).sum::<Chips>();
        if staked != rewarded || staked != self.pot {
            return Err(LedgerImbalance { staked, rewarded });
        }
        for entry in &results {
            self.seats[entry.seat()].win(entry.reward());
        }
        self.pot = 0;
        self.phase = Phase::Settled;
        let mut payouts: Vec<(Position, Chips)> = results
            .iter()
            .map(|s| (s.seat(), s.reward()))
            .filter(|(_, reward)| *reward > 0)
            .collect();
        payouts.sort_by_key(|(pos, _)| *pos);
        Ok(payouts)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} pot {} high {}", self.phase, self.pot, self.high())?;
        for (i, seat) in self.seats.iter().enumerate() {
            let marker = if i == self.ticker { ">" } else { " " };
            writeln!(f, "{} P{} {}", marker, i, seat)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealt(stacks: &[Chips], first: Position) -> Game {
        let mut game = Game::new(Rules::default(), stacks, first);
        let mut deck = Deck::seeded(42);
        game.begin(&mut deck);
        game
    }

    #[test]
    fn antes_fund_the_pot() {
        let game = dealt(&[200, 200, 200], 0);
        assert!(game.pot() == 15);
        assert!(game.stacks() == vec![195, 195, 195]);
        assert!(game.phase() == Phase::Betting(1));
    }

    #[test]
    fn short_stacks_sit_out() {
        let game = dealt(&[200, 3, 200], 0);
        assert!(game.pot() == 10);
        assert!(game.seat(1).state() == State::Out);
        assert!(game.seat(1).card().is_none());
        assert!(game.seat(1).stack() == 3);
    }

    #[test]
    fn one_card_per_active_seat_no_repeats() {
        let game = dealt(&[200, 200, 200], 0);
        let cards: Vec<_> = game.seats().iter().filter_map(|s| s.card()).collect();
        assert!(cards.len() == 3);
        assert!(cards[0] != cards[1] && cards[1] != cards[2] && cards[0] != cards[2]);
    }

    #[test]
    fn opener_rotates_with_first() {
        let game = dealt(&[200, 200, 200], 1);
        assert!(game.turn() == Turn::Choice(1));
    }

    #[test]
    fn checks_around_close_the_round() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Check);
        game.act(1, Action::Check);
        assert!(game.turn() == Turn::Choice(2));
        game.act(2, Action::Check);
        assert!(game.turn() == Turn::Terminal);
        assert!(game.phase() == Phase::Showdown);
    }

    #[test]
    fn bet_reopens_the_action() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Check);
        game.act(1, Action::Bet(10));
        game.act(2, Action::Call(10));
        // seat 0 already checked but must now respond to the bet
        assert!(game.turn() == Turn::Choice(0));
        game.act(0, Action::Call(10));
        assert!(game.phase() == Phase::Showdown);
        assert!(game.pot() == 45);
    }

    #[test]
    fn turn_pointer_skips_folded_seats() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(10));
        game.act(1, Action::Fold);
        game.act(2, Action::Raise(10));
        assert!(game.turn() == Turn::Choice(0));
        game.act(0, Action::Call(10));
        assert!(game.phase() == Phase::Showdown);
    }

    #[test]
    fn fold_to_one_ends_the_hand_early() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(50));
        game.act(1, Action::Fold);
        game.act(2, Action::Fold);
        assert!(game.phase() == Phase::Showdown);
        let payouts = game.settle().unwrap();
        assert!(payouts == vec![(0, 65)]);
        assert!(game.stacks() == vec![210, 195, 195]);
    }

    #[test]
    fn check_facing_a_bet_is_rejected() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(10));
        assert!(matches!(
            game.validate(1, &Action::Check),
            Err(Reject::IllegalAction(_))
        ));
    }

    #[test]
    fn out_of_turn_is_rejected() {
        let game = dealt(&[200, 200, 200], 0);
        assert!(game.validate(2, &Action::Check) == Err(Reject::NotYourTurn));
    }

    #[test]
    fn settled_hand_rejects_actions() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(50));
        game.act(1, Action::Fold);
        game.act(2, Action::Fold);
        assert!(game.validate(0, &Action::Check) == Err(Reject::HandNotInBettingRound));
    }

    #[test]
    fn raise_below_minimum_is_rejected() {
        let mut rules = Rules::default();
        rules.min_raise = 5;
        let mut game = Game::new(rules, &[200, 200], 0);
        let mut deck = Deck::seeded(7);
        game.begin(&mut deck);
        game.act(0, Action::Bet(10));
        assert!(matches!(
            game.validate(1, &Action::Raise(3)),
            Err(Reject::IllegalAction(_))
        ));
        assert!(game.validate(1, &Action::Raise(10)).is_ok());
    }

    #[test]
    fn absurd_raise_is_rejected_without_overflow() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(10));
        assert!(matches!(
            game.validate(1, &Action::Raise(Chips::MAX)),
            Err(Reject::IllegalAction(_))
        ));
        assert!(matches!(
            game.validate(1, &Action::Raise(Chips::MAX - 10)),
            Err(Reject::IllegalAction(_))
        ));
        let fresh = dealt(&[200, 200, 200], 0);
        assert!(matches!(
            fresh.validate(0, &Action::Bet(Chips::MAX)),
            Err(Reject::IllegalAction(_))
        ));
    }

    #[test]
    fn all_in_under_raise_is_legal() {
        let mut game = dealt(&[200, 25, 200], 0);
        game.act(0, Action::Bet(100));
        // seat 1 has 20 behind after ante: shortfall 100 exceeds stack,
        // so the raise path is closed but the short call stands
        assert!(game.validate(1, &Action::Call(20)).is_ok());
        let applied = game.act(1, Action::Call(0));
        assert!(applied == Action::Call(20));
        assert!(game.seat(1).state() == State::Shoving);
    }

    #[test]
    fn short_call_creates_a_side_pot() {
        // seats: 0 rich, 1 short, 2 rich; the short all-in can win at most
        // its capped layer.
        let mut game = dealt(&[200, 15, 200], 0);
        game.act(0, Action::Bet(50));
        game.act(1, Action::Call(0)); // all-in for 10 behind
        game.act(2, Action::Call(50));
        assert!(game.phase() == Phase::Showdown);
        assert!(game.pot() == 125);
        let payouts = game.settle().unwrap();
        let total: Chips = payouts.iter().map(|(_, c)| c).sum();
        assert!(total == 125);
    }

    #[test]
    fn conservation_of_chips() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(30));
        game.act(1, Action::Raise(30));
        game.act(2, Action::Call(60));
        game.act(0, Action::Call(30));
        assert!(game.phase() == Phase::Showdown);
        let before: Chips = game.stacks().iter().sum::<Chips>() + game.pot();
        game.settle().unwrap();
        let after: Chips = game.stacks().iter().sum();
        assert!(before == after);
        assert!(after == 600);
    }

    #[test]
    fn multiple_betting_rounds() {
        let mut rules = Rules::default();
        rules.rounds = 2;
        let mut game = Game::new(rules, &[200, 200], 0);
        let mut deck = Deck::seeded(9);
        game.begin(&mut deck);
        game.act(0, Action::Bet(10));
        game.act(1, Action::Call(10));
        assert!(game.phase() == Phase::Betting(2));
        // stakes reset between rounds; betting reopens from scratch
        assert!(game.high() == 0);
        assert!(game.turn() == Turn::Choice(0));
        game.act(0, Action::Check);
        game.act(1, Action::Bet(20));
        game.act(0, Action::Call(20));
        assert!(game.phase() == Phase::Showdown);
        assert!(game.pot() == 70);
    }

    #[test]
    fn tame_caps_oversized_raise_to_all_in() {
        let mut game = dealt(&[200, 100, 200], 0);
        game.act(0, Action::Bet(50));
        // seat 1 has 95 behind; raise of 95 would cost 50 + 95 = 145
        let (tamed, corrected) = game.tame(1, Action::Raise(95));
        assert!(tamed == Action::Raise(45));
        assert!(corrected);
        assert!(game.validate(1, &tamed).is_ok());
    }

    #[test]
    fn tame_downgrades_impossible_check() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(10));
        let (tamed, corrected) = game.tame(1, Action::Check);
        assert!(tamed == Action::Fold);
        assert!(corrected);
    }

    #[test]
    fn tame_turns_stray_call_into_check() {
        let game = dealt(&[200, 200, 200], 0);
        let (tamed, corrected) = game.tame(0, Action::Call(10));
        assert!(tamed == Action::Check);
        assert!(corrected);
    }

    #[test]
    fn tame_bumps_undersized_raise() {
        let mut rules = Rules::default();
        rules.min_raise = 10;
        let mut game = Game::new(rules, &[200, 200], 0);
        let mut deck = Deck::seeded(3);
        game.begin(&mut deck);
        game.act(0, Action::Bet(10));
        let (tamed, corrected) = game.tame(1, Action::Raise(2));
        assert!(tamed == Action::Raise(10));
        assert!(corrected);
    }

    #[test]
    fn tame_keeps_legal_actions_untouched() {
        let mut game = dealt(&[200, 200, 200], 0);
        game.act(0, Action::Bet(10));
        let (tamed, corrected) = game.tame(1, Action::Call(10));
        assert!(tamed == Action::Call(10));
        assert!(!corrected);
    }

    #[test]
    fn odd_chip_goes_to_earliest_in_turn_order() {
        // force a tie by dealing a stripped deck where seats 1 and 2 tie.
        // easier to test through settlements directly: see showdown tests.
        // here we check that turn order drives the settlement ordering.
        let mut game = dealt(&[200, 200, 200], 1);
        game.act(1, Action::Check);
        game.act(2, Action::Check);
        game.act(0, Action::Check);
        let entries = game.settlements();
        let seats: Vec<Position> = entries.iter().map(|e| e.seat()).collect();
        assert!(seats == vec![1, 2, 0]);
    }

    #[test]
    fn seeded_deals_are_reproducible() {
        let a = dealt(&[200, 200, 200], 0);
        let b = dealt(&[200, 200, 200], 0);
        let cards_a: Vec<_> = a.seats().iter().map(|s| s.card()).collect();
        let cards_b: Vec<_> = b.seats().iter().map(|s| s.card()).collect();
        assert!(cards_a == cards_b);
    }

    #[test]
    fn legal_lists_match_state() {
        let mut game = dealt(&[200, 200, 200], 0);
        assert!(game.legal().contains(&Action::Check));
        assert!(game.legal().iter().any(|a| matches!(a, Action::Bet(_))));
        game.act(0, Action::Bet(10));
        let legal = game.legal();
        assert!(!legal.contains(&Action::Check));
        assert!(legal.contains(&Action::Call(10)));
        assert!(legal.contains(&Action::Fold));
    }
}
