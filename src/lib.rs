//! # rps-engine
//!
//! Rock-Paper-Scissors round engine with special-round modifiers and a
//! mildly adaptive computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `RoundEngine` decides outcomes and scores without
//!    owning state. Callers hand in what it works on.
//!
//! 2. **Injected Randomness**: Every random draw goes through a
//!    `RandomSource`, so tests can script the opponent and special rounds.
//!
//! 3. **Presentation Outside**: Timers, animation, theming, and rendering
//!    belong to the caller. The engine decides immediately.
//!
//! ## Round Lifecycle
//!
//! `Idle -> OpponentSelecting -> Resolved -> Idle`. A move submitted while a
//! round is in flight is ignored. The pending special modifier is consumed
//! by exactly one round.
//!
//! ## Modules
//!
//! - `core`: Moves, modifiers, state, RNG, configuration, errors
//! - `rules`: Outcome resolution and scoring
//! - `opponent`: Computer move policies
//! - `special`: Special-round scheduling
//! - `session`: Session holder and round lifecycle
//! - `commentary`: Optional, non-authoritative round commentary

pub mod core;
pub mod rules;
pub mod opponent;
pub mod special;
pub mod session;
pub mod commentary;

// Re-export commonly used types
pub use crate::core::{
    Move, Outcome, SpecialModifier,
    History, RoundRecord, ScoreState, SessionState,
    GameRng, GameRngState, RandomSource, ScriptedRng,
    EngineConfig, SpecialTrigger,
    CommentaryError, EngineError, Result,
};

pub use crate::rules::RoundEngine;

pub use crate::opponent::{most_frequent_user_move, FrequencyCounter, OpponentPolicy, UniformOpponent};

pub use crate::special::SpecialRoundScheduler;

pub use crate::session::{PendingRound, RoundPhase, RoundReport, Session};

pub use crate::commentary::{fetch_commentary, Commentary, CommentaryRequest, Commentator, StubCommentator};
