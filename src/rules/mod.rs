//! Round rules: outcome under the active modifier and score updates.
//!
//! Pure decision logic. Callers own all state and hand it in.

pub mod engine;

pub use engine::RoundEngine;
