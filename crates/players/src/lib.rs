//! Strategy implementations that can sit at a table.
//!
//! - [`Fish`] — Chooses uniformly from the representative legal actions
//! - [`Rock`] — Never puts a chip in voluntarily; the safe fallback
//! - [`CallStation`] — Pays to see every showdown
//! - [`Script`] — An external process speaking JSON over stdin/stdout
//! - [`Loader`] — Resolves strategy names into seated players
mod fish;
mod loader;
mod rock;
mod script;
mod station;

pub use fish::*;
pub use loader::*;
pub use rock::*;
pub use script::*;
pub use station::*;
