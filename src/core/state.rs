//! Session state: scores, round history, and special-round slots.
//!
//! ## ScoreState
//!
//! Running totals. Scores are unsigned, so the zero floor a steal round
//! must respect cannot be broken by construction.
//!
//! ## History
//!
//! Most-recent-first record of completed rounds, optionally capped.
//! Backed by `im::Vector` so snapshots of a session are O(1) to clone.
//!
//! ## SessionState
//!
//! Everything the engine needs to resolve the next round. Created at game
//! start, reset on request, never persisted.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::{Move, Outcome};
use super::special::SpecialModifier;

/// A completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub user_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
    /// Modifier that was active for this round.
    pub modifier: SpecialModifier,
}

impl RoundRecord {
    #[must_use]
    pub fn new(user_move: Move, computer_move: Move, outcome: Outcome, modifier: SpecialModifier) -> Self {
        Self {
            user_move,
            computer_move,
            outcome,
            modifier,
        }
    }
}

/// Most-recent-first round history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    rounds: Vector<RoundRecord>,
    limit: Option<usize>,
}

impl History {
    /// Create an empty history with an optional cap.
    #[must_use]
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            rounds: Vector::new(),
            limit,
        }
    }

    /// Create an unbounded history.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Build a history from records listed most-recent-first.
    ///
    /// The cap is applied, dropping the oldest entries.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = RoundRecord>, limit: Option<usize>) -> Self {
        let mut rounds: Vector<RoundRecord> = records.into_iter().collect();
        if let Some(limit) = limit {
            rounds.truncate(limit.min(rounds.len()));
        }
        Self { rounds, limit }
    }

    /// Prepend a round, dropping the oldest one past the cap.
    pub fn record(&mut self, record: RoundRecord) {
        self.rounds.push_front(record);
        if let Some(limit) = self.limit {
            if self.rounds.len() > limit {
                self.rounds.truncate(limit);
            }
        }
    }

    /// Most recent round.
    #[must_use]
    pub fn latest(&self) -> Option<&RoundRecord> {
        self.rounds.front()
    }

    /// Iterate most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// How often the user played each move, indexed like `Move::ALL`.
    #[must_use]
    pub fn user_move_counts(&self) -> [u32; 3] {
        let mut counts = [0u32; 3];
        for round in &self.rounds {
            counts[round.user_move.index()] += 1;
        }
        counts
    }

    pub fn clear(&mut self) {
        self.rounds.clear();
    }
}

/// Running score totals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreState {
    pub user_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
}

impl ScoreState {
    #[must_use]
    pub const fn new(user_score: u32, computer_score: u32, rounds_played: u32) -> Self {
        Self {
            user_score,
            computer_score,
            rounds_played,
        }
    }

    /// Current standing from the user's perspective.
    #[must_use]
    pub fn standing(&self) -> Outcome {
        match self.user_score.cmp(&self.computer_score) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Everything owned by one game session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub scores: ScoreState,
    pub history: History,

    /// Modifier the next round will consume.
    pub pending_special: Option<SpecialModifier>,

    /// Drawn modifier still waiting to be armed (deferred schedules only).
    pub announced_special: Option<SpecialModifier>,

    /// Outcome of the most recent round.
    pub last_outcome: Option<Outcome>,
}

impl SessionState {
    /// Fresh state with the given history cap.
    #[must_use]
    pub fn new(history_limit: Option<usize>) -> Self {
        Self {
            scores: ScoreState::default(),
            history: History::new(history_limit),
            pending_special: None,
            announced_special: None,
            last_outcome: None,
        }
    }

    /// Modifier the next round will be played under.
    #[must_use]
    pub fn active_modifier(&self) -> SpecialModifier {
        self.pending_special.unwrap_or_default()
    }

    /// Is a modifier pending or announced?
    #[must_use]
    pub fn has_special_outstanding(&self) -> bool {
        self.pending_special.is_some() || self.announced_special.is_some()
    }

    /// Back to a fresh game, keeping the history cap.
    pub fn reset(&mut self) {
        *self = Self::new(self.history.limit());
    }
}
