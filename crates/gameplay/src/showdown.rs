use crate::Settlement;
use bmb_cards::Rank;
use bmb_core::Chips;
use bmb_core::Position;

/// Ranks revealed cards into win-tiers, strongest first.
///
/// Pure: single-card Indian Poker compares rank only, suits never break
/// ties, so equal ranks land in the same tier and split.
pub fn tiers(reveals: &[(Position, Rank)]) -> Vec<Vec<Position>> {
    let mut sorted = reveals.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    let mut tiers: Vec<Vec<Position>> = Vec::new();
    let mut last: Option<Rank> = None;
    for (seat, rank) in sorted {
        match last {
            Some(r) if r == rank => tiers.last_mut().expect("tier exists").push(seat),
            _ => tiers.push(vec![seat]),
        }
        last = Some(rank);
    }
    tiers
}

/// Computes chip distributions at showdown.
///
/// Handles the edge cases of settlement: side pots from all-ins, split pots
/// between equal ranks, and folded or sat-out seats receiving nothing. The
/// algorithm iterates by rank tier, carving each tier's winnings into layers
/// capped at the contributors' all-in amounts.
///
/// # Algorithm
///
/// 1. Rank contending seats into win-tiers with [`tiers`], strongest first
/// 2. For each tier, compute the side-pot layer its members are eligible for
/// 3. Split that layer among the tier, remainder to the earliest entry
/// 4. Repeat until chips collected equal chips distributed
///
/// Entry order is tie-break priority: the caller passes settlements in the
/// order that should receive indivisible remainders.
pub struct Showdown {
    payouts: Vec<Settlement>,
    distributing: Chips,
    distributed: Chips,
    best: Option<Rank>,
}

impl From<Vec<Settlement>> for Showdown {
    fn from(payouts: Vec<Settlement>) -> Self {
        Self {
            payouts,
            distributing: 0,
            distributed: 0,
            best: None,
        }
    }
}

impl Showdown {
    /// Distributes all chips and returns final settlements.
    pub fn settle(mut self) -> Vec<Settlement> {
        let reveals = self
            .payouts
            .iter()
            .filter(|p| p.contends())
            .map(|p| (p.seat(), p.rank()))
            .collect::<Vec<_>>();
        'winners: for tier in tiers(&reveals) {
            self.best = tier
                .first()
                .and_then(|seat| reveals.iter().find(|(s, _)| s == seat))
                .map(|(_, rank)| *rank);
            'pots: while let Some(amount) = self.remaining() {
                self.distributing = amount;
                self.distribute();
                if self.is_complete() {
                    break 'winners;
                } else {
                    continue 'pots;
                }
            }
        }
        self.payouts
    }
    fn remaining(&mut self) -> Option<Chips> {
        self.distributed = self.distributing;
        self.payouts
            .iter()
            .filter(|p| Some(p.rank()) == self.best)
            .filter(|p| p.contends())
            .filter(|p| p.risked() > self.distributed)
            .map(|p| p.risked())
            .min()
    }
    fn winnings(&self) -> Chips {
        self.payouts
            .iter()
            .map(|p| p.risked().min(self.distributing))
            .map(|r| (r - self.distributed).max(0))
            .sum()
    }
    fn distribute(&mut self) {
        let chips = self.winnings();
        let best = self.best;
        let distributed = self.distributed;
        let mut winners = self
            .payouts
            .iter_mut()
            .filter(|p| Some(p.rank()) == best)
            .filter(|p| p.contends())
            .filter(|p| p.risked() > distributed)
            .collect::<Vec<&mut Settlement>>();
        let n = winners.len() as Chips;
        let share = chips / n;
        let bonus = chips % n;
        for winner in winners.iter_mut() {
            winner.add(share);
        }
        for winner in winners.iter_mut().take(bonus as usize) {
            winner.add(1);
        }
    }
    fn is_complete(&self) -> bool {
        let staked = self.payouts.iter().map(|p| p.risked()).sum::<Chips>();
        let reward = self.payouts.iter().map(|p| p.reward()).sum::<Chips>();
        staked == reward
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::State;

    fn entry(seat: Position, risked: Chips, status: State, rank: Rank) -> Settlement {
        Settlement::from((seat, risked, status, rank))
    }

    #[test]
    fn heads_up_winner_takes_all() {
        let settlement = Showdown::from(vec![
            entry(0, 100, State::Betting, Rank::King),
            entry(1, 100, State::Betting, Rank::Nine),
        ])
        .settle();
        assert!(settlement[0].reward() == 200);
        assert!(settlement[1].reward() == 0);
    }

    #[test]
    fn folded_high_card_wins_nothing() {
        let settlement = Showdown::from(vec![
            entry(0, 50, State::Folding, Rank::Ace),
            entry(1, 100, State::Betting, Rank::Seven),
            entry(2, 100, State::Betting, Rank::Five),
        ])
        .settle();
        assert!(settlement[0].reward() == 0);
        assert!(settlement[1].reward() == 250);
        assert!(settlement[2].reward() == 0);
    }

    #[test]
    fn tie_splits_evenly() {
        let settlement = Showdown::from(vec![
            entry(0, 100, State::Betting, Rank::Queen),
            entry(1, 100, State::Betting, Rank::Queen),
            entry(2, 100, State::Betting, Rank::Two),
        ])
        .settle();
        assert!(settlement[0].reward() == 150);
        assert!(settlement[1].reward() == 150);
        assert!(settlement[2].reward() == 0);
    }

    #[test]
    fn odd_chip_goes_to_earliest_entry() {
        // pot of 3, two-way tie: first entry in tie-break order gets 2.
        let settlement = Showdown::from(vec![
            entry(0, 1, State::Betting, Rank::Jack),
            entry(1, 1, State::Betting, Rank::Jack),
            entry(2, 1, State::Folding, Rank::Ace),
        ])
        .settle();
        assert!(settlement[0].reward() == 2);
        assert!(settlement[1].reward() == 1);
        assert!(settlement[2].reward() == 0);
    }

    #[test]
    fn all_in_wins_only_its_capped_layer() {
        // seat 0 all-in for 10; seats 1 and 2 continue to 50 each.
        // seat 0 holds the best card but wins only 3x10; the 80 above the
        // cap goes to the next-best live seat.
        let settlement = Showdown::from(vec![
            entry(0, 10, State::Shoving, Rank::Ace),
            entry(1, 50, State::Betting, Rank::King),
            entry(2, 50, State::Betting, Rank::Three),
        ])
        .settle();
        assert!(settlement[0].reward() == 30);
        assert!(settlement[1].reward() == 80);
        assert!(settlement[2].reward() == 0);
    }

    #[test]
    fn uneven_all_in_ladder() {
        let settlement = Showdown::from(vec![
            entry(0, 150, State::Shoving, Rank::Ace),
            entry(1, 200, State::Shoving, Rank::King),
            entry(2, 350, State::Shoving, Rank::Queen),
            entry(3, 50, State::Shoving, Rank::Jack),
        ])
        .settle();
        assert!(settlement[0].reward() == 500);
        assert!(settlement[1].reward() == 100);
        assert!(settlement[2].reward() == 150);
        assert!(settlement[3].reward() == 0);
    }

    #[test]
    fn sat_out_seats_are_ignored() {
        let settlement = Showdown::from(vec![
            entry(0, 100, State::Betting, Rank::Ten),
            entry(1, 0, State::Out, Rank::Two),
            entry(2, 100, State::Betting, Rank::Four),
        ])
        .settle();
        assert!(settlement[0].reward() == 200);
        assert!(settlement[1].reward() == 0);
        assert!(settlement[2].reward() == 0);
    }

    #[test]
    fn conservation_holds() {
        let settlement = Showdown::from(vec![
            entry(0, 37, State::Shoving, Rank::Nine),
            entry(1, 81, State::Betting, Rank::Nine),
            entry(2, 81, State::Betting, Rank::Eight),
            entry(3, 12, State::Folding, Rank::Ace),
        ])
        .settle();
        let staked = settlement.iter().map(|s| s.risked()).sum::<Chips>();
        let reward = settlement.iter().map(|s| s.reward()).sum::<Chips>();
        assert!(staked == reward);
    }

    #[test]
    fn tiers_group_equal_ranks() {
        let ranking = tiers(&[
            (0, Rank::King),
            (1, Rank::Ace),
            (2, Rank::King),
            (3, Rank::Two),
        ]);
        assert!(ranking == vec![vec![1], vec![0, 2], vec![3]]);
    }
}
