//! Error types shared by the Tonic Ear core crates.

use thiserror::Error;

/// Common trait for errors raised by the core components.
///
/// Every component error type implements this trait so that callers (and the
/// CLI) can report errors uniformly:
/// - Stable error codes for programmatic handling
/// - Human-readable messages for users
/// - A category for grouping related errors
///
/// # Example
///
/// ```ignore
/// use tonicear_theory::error::CodedError;
///
/// fn report<E: CodedError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait CodedError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "THEORY_001" or "SAMPLE_002". These
    /// codes are stable across releases.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    ///
    /// Returns a category like "theory", "samples", "session".
    fn category(&self) -> &'static str;
}

/// Result type for theory operations.
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Errors raised when a request names an id outside the static catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Unknown voice gender id.
    #[error("unknown gender '{0}'")]
    UnknownGender(String),

    /// Unknown key id.
    #[error("unknown key '{0}'")]
    UnknownKey(String),

    /// Unknown or unsupported temperament id.
    #[error("unknown temperament '{0}'")]
    UnknownTemperament(String),

    /// Unknown difficulty level id.
    #[error("unknown level '{0}'")]
    UnknownLevel(String),

    /// Unknown note token.
    #[error("unknown note token '{0}'")]
    UnknownToken(String),
}

impl CodedError for TheoryError {
    fn code(&self) -> &'static str {
        match self {
            TheoryError::UnknownGender(_) => "THEORY_001",
            TheoryError::UnknownKey(_) => "THEORY_002",
            TheoryError::UnknownTemperament(_) => "THEORY_003",
            TheoryError::UnknownLevel(_) => "THEORY_004",
            TheoryError::UnknownToken(_) => "THEORY_005",
        }
    }

    fn category(&self) -> &'static str {
        "theory"
    }
}
