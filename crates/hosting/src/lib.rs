//! Hosting infrastructure for concurrent tables.
//!
//! - [`Casino`] — Opens, tracks, and tears down rooms
//! - [`RoomHandle`] — Channel endpoints for talking to a running room
//! - [`Seating`] — How each seat of a new room is filled
mod casino;
mod handle;

pub use casino::*;
pub use handle::*;
