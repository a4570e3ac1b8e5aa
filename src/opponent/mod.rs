//! Computer opponent strategies.
//!
//! Heuristic, not adversarial: the opponent is mildly adaptive but
//! beatable. Randomness is always drawn from an injected `RandomSource`.

mod policy;

pub use policy::{most_frequent_user_move, FrequencyCounter, OpponentPolicy, UniformOpponent};
