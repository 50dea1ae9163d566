//! Indian Poker game engine: betting state, action handling, and settlement.
//!
//! One hand of Indian Poker deals a single card per seat, visible to every
//! seat except its holder, then runs one or more betting rounds before the
//! highest revealed rank takes the pot. This module is the authority for
//! what is legal at any moment and for the chip accounting that follows.
//!
//! ## State Representation
//!
//! - [`Game`] — One hand in progress: seats, phase, pot, and acting pointer
//! - [`Seat`] — Stack, dealt card, round stake, and hand-total risked chips
//! - [`Phase`] — `Ante → Betting(r) → Showdown → Settled`
//! - [`Turn`] — Whose action it is, or terminal
//!
//! ## Actions
//!
//! - [`Action`] — A decision: fold, check, bet, call, raise (or a posted ante)
//! - [`Play`] — A recorded action with its seat and correction flag
//!
//! ## Resolution
//!
//! - [`Showdown`] — Pot distribution with side pots, splits, and odd chips
//! - [`Settlement`] — Per-seat ledger entry consumed by the showdown
//! - [`tiers`] — Pure ranking of revealed cards into win-tiers
//!
//! ## Information Boundary
//!
//! - [`Observation`] — The restricted view handed to strategies; never
//!   contains the acting seat's own card
mod action;
mod error;
mod game;
mod observation;
mod rules;
mod seat;
mod settlement;
mod showdown;
mod turn;

pub use action::*;
pub use error::*;
pub use game::*;
pub use observation::*;
pub use rules::*;
pub use seat::*;
pub use settlement::*;
pub use showdown::*;
pub use turn::*;
