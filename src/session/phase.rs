//! Round lifecycle phases.

use serde::{Deserialize, Serialize};

/// Where the current round is in its lifecycle.
///
/// `Idle -> OpponentSelecting -> Resolved -> Idle`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Waiting for the user's move.
    #[default]
    Idle,
    /// Opponent move decided; the presentation layer may be animating.
    OpponentSelecting,
    /// Outcome and scores committed; the result is on display.
    Resolved,
}

impl RoundPhase {
    /// Is a round in flight? New moves are ignored while this holds.
    #[must_use]
    pub const fn is_processing(self) -> bool {
        matches!(self, RoundPhase::OpponentSelecting)
    }

    /// Can a new round begin?
    #[must_use]
    pub const fn accepts_move(self) -> bool {
        !self.is_processing()
    }
}
