//! Async runtime for live Indian Poker tables.
//!
//! This module orchestrates multi-seat sessions, coordinating between the
//! game engine and pluggable decision-makers (strategies in their own tasks,
//! humans submitting over a channel) through message passing.
//!
//! ## Architecture
//!
//! - [`Room`] — Table coordinator driving hands from ante to settlement
//! - [`Actor`] — Async task wrapper for a single strategy's decision loop
//! - [`Table`] — Seat occupancy and event fan-out
//! - [`Timer`] — Deadline tracking for decisions
//!
//! ## Events
//!
//! - [`Event`] — Messages from room to seat (deal, turn, result)
//! - [`Player`] — Trait for pluggable decision-makers
//! - [`Submission`] — An externally submitted action awaiting validation
//!
//! ## Wire
//!
//! - [`ServerMessage`] / [`Protocol`] — JSON encoding at the client seam
mod actor;
mod config;
mod context;
mod event;
mod message;
mod player;
mod protocol;
mod room;
mod submission;
mod table;
mod timer;

pub use actor::*;
pub use config::*;
pub use context::*;
pub use event::*;
pub use message::*;
pub use player::*;
pub use protocol::*;
pub use room::*;
pub use submission::*;
pub use table::*;
pub use timer::*;
