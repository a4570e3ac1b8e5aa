//! Game session: state ownership and the round lifecycle.
//!
//! The session is the only mutable owner of game state. It applies the
//! processing guard, draws from its RNG streams, and calls the pure
//! `RoundEngine`. Animation pacing belongs to the presentation layer,
//! which may pause between `begin_round` and `finish_round`.

mod manager;
mod phase;

pub use manager::{PendingRound, RoundReport, Session};
pub use phase::RoundPhase;
