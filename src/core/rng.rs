//! Random sources for opponent moves and special-round draws.
//!
//! ## Key Features
//!
//! - **Injectable**: All engine randomness goes through `RandomSource`
//! - **Deterministic**: `GameRng` with the same seed produces the same sequence
//! - **Context streams**: Independent sequences for different purposes
//! - **Scriptable**: `ScriptedRng` replays a fixed sequence for tests
//!
//! ## Usage
//!
//! ```
//! use rps_engine::core::{GameRng, RandomSource};
//!
//! let rng = GameRng::new(42);
//!
//! // Opponent moves and special draws use separate streams
//! let mut opponent = rng.for_context("opponent");
//! let mut special = rng.for_context("special");
//!
//! assert!(opponent.next_index(3) < 3);
//! assert!(special.next_f64() < 1.0);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Source of randomness for the engine.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `[0, len)`. Returns 0 when `len` is 0.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Deterministic RNG backed by ChaCha8.
///
/// Supports context-based independent streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position so capture and restore are O(1)
/// regardless of how many draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of draws.
///
/// Each draw consumes one value from the script, cycling when exhausted.
/// `next_index(len)` maps the value `v` to `floor(v * len)`, so `0.0`
/// picks the first element and `0.99` the last. An empty script always
/// yields `0.0`.
///
/// ```
/// use rps_engine::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new(vec![0.0, 0.5, 0.99]);
/// assert_eq!(rng.next_index(3), 0);
/// assert_eq!(rng.next_index(3), 1);
/// assert_eq!(rng.next_index(3), 2);
/// assert_eq!(rng.next_f64(), 0.0); // wrapped
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a script. Values are clamped into `[0, 1)`.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }

    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        let idx = (self.next_f64() * len as f64) as usize;
        idx.min(len - 1)
    }
}
