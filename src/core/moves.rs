//! Moves, the dominance relation, and round outcomes.
//!
//! ## Dominance
//!
//! The three moves form a fixed 3-cycle under standard rules:
//! rock beats scissors, scissors beats paper, paper beats rock.
//!
//! ```
//! use rps_engine::core::Move;
//!
//! assert!(Move::Rock.beats(Move::Scissors));
//! assert_eq!(Move::Rock.beaten_by(), Move::Paper);
//! assert_eq!(Move::Rock.beats_move(), Move::Scissors);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;

/// One of the three selectable hand signs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves in fixed priority order.
    ///
    /// Anything that needs a deterministic tie-break between moves
    /// (frequency counting, uniform draws by index) uses this order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Position of this move in `Move::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }

    /// The move this one defeats under standard rules.
    #[must_use]
    pub const fn beats_move(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// The move that defeats this one under standard rules.
    #[must_use]
    pub const fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// Does this move defeat `other` under standard rules?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.beats_move() == other
    }

    /// Map one of the three fixed digit keys to a move.
    ///
    /// `'1'` is rock, `'2'` paper, `'3'` scissors.
    pub fn from_key(key: char) -> Result<Move, EngineError> {
        match key {
            '1' => Ok(Move::Rock),
            '2' => Ok(Move::Paper),
            '3' => Ok(Move::Scissors),
            other => Err(EngineError::InvalidInput {
                input: other.to_string(),
            }),
        }
    }

    /// Lower-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Display glyph.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Move::Rock => "🪨",
            Move::Paper => "📄",
            Move::Scissors => "✂️",
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::InvalidInput {
                input: s.to_string(),
            })
    }
}

/// Result of a round from the user's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Swap winner and loser. Ties stay ties.
    #[must_use]
    pub const fn inverted(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }

    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
            Outcome::Tie => "Tie",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
