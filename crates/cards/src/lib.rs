//! Card primitives for single-card Indian Poker.
//!
//! Each hand deals exactly one [`Card`] per seat. Only [`Rank`] matters for
//! showdown comparison; [`Suit`] is carried for display and wire encoding.
//! [`Deck`] produces the 52 distinct cards in a shuffled order that is
//! reproducible from a seed, which is what makes replay tests deterministic.
mod card;
mod deck;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use rank::*;
pub use suit::*;
