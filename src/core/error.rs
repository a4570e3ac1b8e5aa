//! Error types.
//!
//! Nothing in the engine is fatal. Failures are either rejected input
//! (`EngineError`) or a degraded optional feature (`CommentaryError`),
//! which callers swallow.

use thiserror::Error;

/// Errors returned by the engine and session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unrecognized move input: {input:?}")]
    InvalidInput { input: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("session is not active. Call .start() before playing")]
    SessionInactive,
}

/// Errors from a commentary collaborator.
///
/// Never surfaced to the user; see `commentary::fetch_commentary`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommentaryError {
    #[error("commentary service unavailable: {0}")]
    Unavailable(String),

    #[error("commentary request timed out")]
    Timeout,

    #[error("malformed commentary response: {0}")]
    Malformed(String),
}

/// Engine result alias.
pub type Result<T> = std::result::Result<T, EngineError>;
