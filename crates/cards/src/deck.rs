use super::card::Card;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// A shuffled deck of the 52 distinct cards, consumed without replacement.
///
/// Recreated at the start of every hand. [`Deck::seeded`] produces the same
/// order for the same seed, which is the determinism contract replay tests
/// rely on; [`Deck::shuffled`] draws entropy from the OS.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// All 52 cards in sorted order. Mostly useful for tests.
    pub fn ordered() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    /// A deck shuffled from OS entropy.
    pub fn shuffled() -> Self {
        Self::from_rng(&mut SmallRng::from_os_rng())
    }
    /// A deck shuffled deterministically from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(&mut SmallRng::seed_from_u64(seed))
    }
    fn from_rng(rng: &mut SmallRng) -> Self {
        let mut deck = Self::ordered();
        deck.0.shuffle(rng);
        deck
    }
    /// Remove and return the top card. Panics on an empty deck; a hand
    /// never deals more than the seat count.
    pub fn draw(&mut self) -> Card {
        self.0.pop().expect("deal from non-empty deck")
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}
