//! Engine configuration.
//!
//! Two play variants are provided as presets:
//! - `EngineConfig::quick_play()`: history capped at 10 rounds, 30% counter
//!   strategy, a special round announced every 4th round
//! - `EngineConfig::adaptive()`: unbounded history, 60% counter strategy,
//!   a special round pending right after every 5th round

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// When special rounds are scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialTrigger {
    /// No special rounds.
    Disabled,

    /// After every `every`-th completed round.
    ///
    /// With `deferred`, the drawn modifier is only announced; the
    /// presentation layer arms it once its banner animation is done.
    FixedInterval { every: u32, deferred: bool },

    /// After every `every`-th completed round, pending immediately.
    AfterRoundCount { every: u32 },
}

impl SpecialTrigger {
    /// Round interval, if enabled.
    #[must_use]
    pub const fn interval(self) -> Option<u32> {
        match self {
            SpecialTrigger::Disabled => None,
            SpecialTrigger::FixedInterval { every, .. } | SpecialTrigger::AfterRoundCount { every } => {
                Some(every)
            }
        }
    }

    /// Does a drawn modifier wait for `Session::arm_special`?
    #[must_use]
    pub const fn is_deferred(self) -> bool {
        matches!(self, SpecialTrigger::FixedInterval { deferred: true, .. })
    }
}

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum history entries kept (`None` = unbounded).
    /// The opponent heuristic only sees what is kept.
    pub history_limit: Option<usize>,

    /// Chance the counter strategy is used once enough history exists.
    pub heuristic_probability: f64,

    /// History must be strictly longer than this before the
    /// counter strategy is considered.
    pub min_history_for_heuristic: usize,

    /// Special round schedule.
    pub special_trigger: SpecialTrigger,

    /// Seed for the session RNG streams.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::quick_play()
    }
}

impl EngineConfig {
    /// Capped history, mostly random opponent, deferred specials every 4 rounds.
    #[must_use]
    pub fn quick_play() -> Self {
        Self {
            history_limit: Some(10),
            heuristic_probability: 0.3,
            min_history_for_heuristic: 2,
            special_trigger: SpecialTrigger::FixedInterval {
                every: 4,
                deferred: true,
            },
            seed: 42,
        }
    }

    /// Unbounded history, mostly adaptive opponent, specials after every 5 rounds.
    #[must_use]
    pub fn adaptive() -> Self {
        Self {
            history_limit: None,
            heuristic_probability: 0.6,
            min_history_for_heuristic: 2,
            special_trigger: SpecialTrigger::AfterRoundCount { every: 5 },
            seed: 42,
        }
    }

    /// Set the history cap (`None` = unbounded).
    #[must_use]
    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the counter-strategy probability.
    #[must_use]
    pub fn with_heuristic_probability(mut self, probability: f64) -> Self {
        self.heuristic_probability = probability;
        self
    }

    /// Set the minimum history length for the counter strategy.
    #[must_use]
    pub fn with_min_history(mut self, min: usize) -> Self {
        self.min_history_for_heuristic = min;
        self
    }

    /// Set the special round schedule.
    #[must_use]
    pub fn with_special_trigger(mut self, trigger: SpecialTrigger) -> Self {
        self.special_trigger = trigger;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.heuristic_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "heuristic_probability must be within [0, 1], got {}",
                self.heuristic_probability
            )));
        }
        if self.history_limit == Some(0) {
            return Err(EngineError::InvalidConfig(
                "history_limit must be positive when set".to_string(),
            ));
        }
        if self.special_trigger.interval() == Some(0) {
            return Err(EngineError::InvalidConfig(
                "special round interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
