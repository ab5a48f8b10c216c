//! Error types for sample mapping.

use thiserror::Error;
use tonicear_theory::error::CodedError;

/// Result type for sample operations.
pub type SampleResult<T> = Result<T, SampleError>;

/// Errors that can occur while resolving frequencies to samples.
#[derive(Debug, Error)]
pub enum SampleError {
    /// Target frequency is non-finite or not positive.
    #[error("target frequency must be finite and positive, got {hz}")]
    InvalidTargetFrequency {
        /// The rejected frequency.
        hz: f64,
    },

    /// Manifest holds no samples.
    #[error("sample manifest is empty")]
    EmptyManifest,

    /// Manifest entry cannot be used for mapping.
    #[error("malformed manifest entry '{id}': {detail}")]
    MalformedEntry {
        /// Entry id (may be empty when the id itself is the problem).
        id: String,
        /// What is wrong with the entry.
        detail: String,
    },

    /// Unknown instrument id.
    #[error("unknown instrument '{0}'")]
    UnknownInstrument(String),

    /// Sample id not present in the manifest.
    #[error("unknown sample id '{0}'")]
    UnknownSampleId(String),

    /// The nearest sample is further away than the cents budget allows.
    #[error(
        "nearest sample '{sample_id}' is {cents_error:.2} cents away from {target_hz} Hz (budget {max_cents} cents)"
    )]
    ToleranceExceeded {
        /// The frequency that could not be represented.
        target_hz: f64,
        /// The sample that came closest.
        sample_id: String,
        /// Signed cents error of that sample.
        cents_error: f64,
        /// The configured budget.
        max_cents: f64,
    },

    /// No targets were supplied to a coverage survey.
    #[error("survey targets must not be empty")]
    EmptyTargets,

    /// Manifest JSON parsing error.
    #[error("manifest parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodedError for SampleError {
    fn code(&self) -> &'static str {
        match self {
            SampleError::InvalidTargetFrequency { .. } => "SAMPLE_001",
            SampleError::EmptyManifest => "SAMPLE_002",
            SampleError::MalformedEntry { .. } => "SAMPLE_003",
            SampleError::UnknownInstrument(_) => "SAMPLE_004",
            SampleError::UnknownSampleId(_) => "SAMPLE_005",
            SampleError::ToleranceExceeded { .. } => "SAMPLE_006",
            SampleError::EmptyTargets => "SAMPLE_007",
            SampleError::Json(_) => "SAMPLE_008",
        }
    }

    fn category(&self) -> &'static str {
        "samples"
    }
}
