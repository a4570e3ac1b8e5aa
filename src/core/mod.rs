//! Core engine types: moves, modifiers, state, RNG, configuration, errors.
//!
//! These are plain values. The logic that combines them lives in `rules`,
//! `opponent`, `special`, and `session`.

pub mod moves;
pub mod special;
pub mod state;
pub mod rng;
pub mod config;
pub mod error;

pub use moves::{Move, Outcome};
pub use special::SpecialModifier;
pub use state::{History, RoundRecord, ScoreState, SessionState};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::{EngineConfig, SpecialTrigger};
pub use error::{CommentaryError, EngineError, Result};
