//! Commentary collaborator.
//!
//! After a round is committed the presentation layer may ask a
//! `Commentator` for a short message and taunt. Commentary is
//! non-authoritative: it receives a copy of the round, never the session,
//! and any failure is swallowed by `fetch_commentary`. Callers invoke it
//! fire-and-forget, off the resolution path, after `finish_round` returns.

use serde::{Deserialize, Serialize};

use crate::core::{CommentaryError, Move, Outcome, RoundRecord, ScoreState, SpecialModifier};

/// Everything a commentator gets to see about a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentaryRequest {
    pub user_move: Move,
    pub computer_move: Move,
    pub outcome: Outcome,
    pub user_score: u32,
    pub computer_score: u32,
    pub modifier: SpecialModifier,
}

impl CommentaryRequest {
    /// Build a request from a committed round and the scores after it.
    #[must_use]
    pub fn new(record: &RoundRecord, scores: &ScoreState) -> Self {
        Self {
            user_move: record.user_move,
            computer_move: record.computer_move,
            outcome: record.outcome,
            user_score: scores.user_score,
            computer_score: scores.computer_score,
            modifier: record.modifier,
        }
    }
}

/// A short display message plus a taunt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    pub message: String,
    pub taunt: String,
}

/// Source of round commentary.
pub trait Commentator {
    fn comment(&self, request: &CommentaryRequest) -> Result<Commentary, CommentaryError>;
}

/// Offline commentator with a fixed placeholder.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubCommentator;

impl Commentator for StubCommentator {
    fn comment(&self, _request: &CommentaryRequest) -> Result<Commentary, CommentaryError> {
        Ok(Commentary {
            message: "Great game!".to_string(),
            taunt: "I'm ready for the next round.".to_string(),
        })
    }
}

/// Ask for commentary, degrading silently to `None` on failure.
pub fn fetch_commentary(commentator: &dyn Commentator, request: &CommentaryRequest) -> Option<Commentary> {
    match commentator.comment(request) {
        Ok(commentary) => Some(commentary),
        Err(err) => {
            log::debug!("commentary skipped: {}", err);
            None
        }
    }
}
