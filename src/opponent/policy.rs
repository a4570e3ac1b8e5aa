//! Opponent policies.
//!
//! - `UniformOpponent`: every move equally likely
//! - `FrequencyCounter`: sometimes counters the user's most frequent move
//!
//! Neither looks at the pending special modifier. The counter move is
//! always computed under standard dominance, even on a reversed round.

use crate::core::{EngineConfig, History, Move, RandomSource};

/// Policy for choosing the computer's move.
pub trait OpponentPolicy {
    /// Choose the computer's move for the next round.
    ///
    /// Always returns one of the three moves.
    fn choose_move(&self, history: &History, rng: &mut dyn RandomSource) -> Move;
}

// =============================================================================
// Uniform
// =============================================================================

/// Uniform random opponent.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_move(&self, _history: &History, rng: &mut dyn RandomSource) -> Move {
        Move::ALL[rng.next_index(Move::ALL.len())]
    }
}

// =============================================================================
// Frequency Counter
// =============================================================================

/// Mildly adaptive opponent.
///
/// Once history is longer than `min_history`, a draw below `probability`
/// plays the move that beats the user's most frequent move. Otherwise it
/// plays uniformly at random.
#[derive(Clone, Copy, Debug)]
pub struct FrequencyCounter {
    pub probability: f64,
    pub min_history: usize,
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl FrequencyCounter {
    #[must_use]
    pub fn new(probability: f64, min_history: usize) -> Self {
        Self {
            probability,
            min_history,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.heuristic_probability, config.min_history_for_heuristic)
    }
}

impl OpponentPolicy for FrequencyCounter {
    fn choose_move(&self, history: &History, rng: &mut dyn RandomSource) -> Move {
        if history.len() > self.min_history && rng.next_f64() < self.probability {
            if let Some(favourite) = most_frequent_user_move(history) {
                let counter = favourite.beaten_by();
                log::trace!("countering most frequent user move {} with {}", favourite, counter);
                return counter;
            }
        }
        UniformOpponent.choose_move(history, rng)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// The user's most frequently played move.
///
/// Ties go to the earlier move in `Move::ALL` (rock, then paper, then
/// scissors). Returns `None` for an empty history.
#[must_use]
pub fn most_frequent_user_move(history: &History) -> Option<Move> {
    if history.is_empty() {
        return None;
    }

    let counts = history.user_move_counts();
    let mut best = Move::ALL[0];
    for m in Move::ALL.into_iter().skip(1) {
        if counts[m.index()] > counts[best.index()] {
            best = m;
        }
    }
    Some(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, RoundRecord, ScriptedRng, SpecialModifier};

    fn history_of(user_moves: &[Move]) -> History {
        let mut history = History::unbounded();
        for &m in user_moves {
            history.record(RoundRecord::new(m, Move::Rock, Outcome::Tie, SpecialModifier::None));
        }
        history
    }

    #[test]
    fn test_uniform_maps_draws_to_moves() {
        let mut rng = ScriptedRng::new(vec![0.0, 0.4, 0.9]);
        let history = History::unbounded();
        let picks: Vec<_> = (0..3).map(|_| UniformOpponent.choose_move(&history, &mut rng)).collect();
        assert_eq!(picks, vec![Move::Rock, Move::Paper, Move::Scissors]);
    }

    #[test]
    fn test_most_frequent() {
        assert_eq!(most_frequent_user_move(&History::unbounded()), None);

        let history = history_of(&[Move::Paper, Move::Scissors, Move::Scissors]);
        assert_eq!(most_frequent_user_move(&history), Some(Move::Scissors));
    }

    #[test]
    fn test_most_frequent_tie_break_is_fixed_order() {
        let history = history_of(&[Move::Scissors, Move::Paper]);
        assert_eq!(most_frequent_user_move(&history), Some(Move::Paper));

        let history = history_of(&[Move::Scissors, Move::Paper, Move::Rock]);
        assert_eq!(most_frequent_user_move(&history), Some(Move::Rock));
    }

    #[test]
    fn test_counter_used_when_draw_crosses_threshold() {
        let policy = FrequencyCounter::new(0.3, 2);
        let history = history_of(&[Move::Rock, Move::Rock, Move::Paper]);

        // 0.1 < 0.3: counter strategy, paper beats rock
        let mut rng = ScriptedRng::new(vec![0.1]);
        assert_eq!(policy.choose_move(&history, &mut rng), Move::Paper);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_random_when_draw_misses_threshold() {
        let policy = FrequencyCounter::new(0.3, 2);
        let history = history_of(&[Move::Rock, Move::Rock, Move::Rock]);

        // 0.5 misses, then 0.0 selects rock uniformly
        let mut rng = ScriptedRng::new(vec![0.5, 0.0]);
        assert_eq!(policy.choose_move(&history, &mut rng), Move::Rock);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_short_history_skips_heuristic_draw() {
        let policy = FrequencyCounter::new(1.0, 2);
        let history = history_of(&[Move::Rock, Move::Rock]);

        let mut rng = ScriptedRng::new(vec![0.9]);
        assert_eq!(policy.choose_move(&history, &mut rng), Move::Scissors);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_from_config() {
        let policy = FrequencyCounter::from_config(&EngineConfig::adaptive());
        assert_eq!(policy.probability, 0.6);
        assert_eq!(policy.min_history, 2);
    }
}
