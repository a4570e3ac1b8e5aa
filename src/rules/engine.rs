//! Round resolution and scoring.
//!
//! `RoundEngine` is stateless. Every operation takes the state it works on
//! and either returns a new value or mutates only what it is handed:
//! - `resolve`: who won, given the active modifier
//! - `apply_score`: new totals, given the outcome and modifier
//! - `choose_opponent_move`: the computer's move, given history
//! - `play_round`: all of the above, committed to a `SessionState`

use crate::core::{
    EngineConfig, History, Move, Outcome, RandomSource, RoundRecord, ScoreState, SessionState,
    SpecialModifier,
};
use crate::opponent::{FrequencyCounter, OpponentPolicy};

/// Pure round-resolution logic.
#[derive(Clone, Copy, Debug, Default)]
pub struct RoundEngine;

impl RoundEngine {
    /// Decide a round from the user's perspective.
    ///
    /// Equal moves always tie. `Reverse` swaps winner and loser; `Double`
    /// and `Steal` only affect scoring.
    #[must_use]
    pub fn resolve(user: Move, computer: Move, modifier: SpecialModifier) -> Outcome {
        if user == computer {
            return Outcome::Tie;
        }

        let standard = if user.beats(computer) {
            Outcome::Win
        } else {
            Outcome::Loss
        };

        match modifier {
            SpecialModifier::Reverse => standard.inverted(),
            _ => standard,
        }
    }

    /// Score a resolved round.
    ///
    /// | outcome | None / Reverse | Double | Steal                      |
    /// |---------|----------------|--------|----------------------------|
    /// | Win     | user +1        | user +2| user +1, computer -1 (>= 0)|
    /// | Loss    | computer +1    | computer +2 | computer +1, user -1 (>= 0) |
    /// | Tie     | -              | -      | -                          |
    ///
    /// `rounds_played` always advances by one. Totals saturate at `u32::MAX`.
    #[must_use]
    pub fn apply_score(outcome: Outcome, modifier: SpecialModifier, scores: ScoreState) -> ScoreState {
        let mut next = ScoreState {
            rounds_played: scores.rounds_played.saturating_add(1),
            ..scores
        };

        let (winner, loser) = match outcome {
            Outcome::Win => (&mut next.user_score, &mut next.computer_score),
            Outcome::Loss => (&mut next.computer_score, &mut next.user_score),
            Outcome::Tie => return next,
        };

        match modifier {
            SpecialModifier::Double => *winner = winner.saturating_add(2),
            SpecialModifier::Steal => {
                *winner = winner.saturating_add(1);
                *loser = loser.saturating_sub(1);
            }
            SpecialModifier::None | SpecialModifier::Reverse => *winner = winner.saturating_add(1),
        }

        next
    }

    /// Choose the computer's move with the configured frequency counter.
    #[must_use]
    pub fn choose_opponent_move(history: &History, config: &EngineConfig, rng: &mut dyn RandomSource) -> Move {
        FrequencyCounter::from_config(config).choose_move(history, rng)
    }

    /// Resolve and commit one round.
    ///
    /// The pending modifier is taken (consumed) here, so it can never apply
    /// to two rounds.
    pub fn play_round(state: &mut SessionState, user: Move, computer: Move) -> RoundRecord {
        let modifier = state.pending_special.take().unwrap_or_default();
        let outcome = Self::resolve(user, computer, modifier);

        state.scores = Self::apply_score(outcome, modifier, state.scores);
        state.last_outcome = Some(outcome);

        let record = RoundRecord::new(user, computer, outcome, modifier);
        state.history.record(record);
        record
    }
}
