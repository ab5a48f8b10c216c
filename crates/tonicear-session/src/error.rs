//! Error types for session generation.

use thiserror::Error;
use tonicear_samples::SampleError;
use tonicear_theory::error::{CodedError, TheoryError};

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while generating a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Module id not present in the static catalog.
    #[error("unknown module '{0}'")]
    UnknownModule(String),

    /// More distinct notes were requested than the pool holds.
    ///
    /// This is a programming error in the caller, never a degraded draw;
    /// sampling fails loudly instead of truncating.
    #[error("note pool holds {available} notes but {requested} were requested")]
    PoolTooSmall {
        /// Number of distinct notes requested.
        requested: usize,
        /// Number of notes in the pool.
        available: usize,
    },

    /// Invalid tuning input (gender, key, temperament, level).
    #[error(transparent)]
    Theory(#[from] TheoryError),

    /// Sample mapping failure (instrument, manifest, tolerance).
    #[error(transparent)]
    Sample(#[from] SampleError),
}

impl CodedError for SessionError {
    fn code(&self) -> &'static str {
        match self {
            SessionError::UnknownModule(_) => "SESSION_001",
            SessionError::PoolTooSmall { .. } => "SESSION_002",
            SessionError::Theory(err) => err.code(),
            SessionError::Sample(err) => err.code(),
        }
    }

    fn category(&self) -> &'static str {
        "session"
    }
}
