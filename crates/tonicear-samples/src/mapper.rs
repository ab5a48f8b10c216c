//! Nearest-sample mapping in log-frequency space.
//!
//! Pitch perception is logarithmic, so the nearest neighbor is the one
//! minimizing the absolute cents error, not the absolute Hz difference.
//! A naive linear-Hz scan would bias mapping toward the upper end of any
//! gap between samples.

use serde::Serialize;

use crate::error::SampleError;
use crate::manifest::SampleManifest;

/// Default cents budget for the tolerance guard.
///
/// Deployments with sparser manifests run with 20.0 instead.
pub const DEFAULT_MAX_CENTS_ERROR: f64 = 10.0;

/// Resolved mapping from a target frequency to the nearest sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyMapping {
    /// The requested frequency.
    pub target_hz: f64,
    /// Id of the chosen sample.
    pub sample_id: String,
    /// Recorded pitch of the chosen sample.
    pub sample_hz: f64,
    /// Signed pitch error `1200 * log2(target / sample)` in cents.
    pub cents_error: f64,
    /// MIDI note of the chosen sample, when the manifest provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub midi: Option<u8>,
}

/// Signed distance from `sample_hz` up to `target_hz`, in cents.
pub fn cents_between(target_hz: f64, sample_hz: f64) -> f64 {
    1200.0 * (target_hz / sample_hz).log2()
}

/// Maps a target frequency to the closest available sample.
///
/// The scan is exhaustive and linear; manifests are small (tens of
/// entries) and carry no pre-sorted index. The first entry encountered at
/// a given distance wins, so ties resolve by manifest order.
///
/// # Errors
///
/// - [`SampleError::InvalidTargetFrequency`] for non-finite or
///   non-positive targets
/// - [`SampleError::EmptyManifest`] / [`SampleError::MalformedEntry`] for
///   unusable manifests
pub fn map_frequency(
    manifest: &SampleManifest,
    target_hz: f64,
) -> Result<FrequencyMapping, SampleError> {
    if !target_hz.is_finite() || target_hz <= 0.0 {
        return Err(SampleError::InvalidTargetFrequency { hz: target_hz });
    }
    manifest.validate()?;

    let mut best: Option<(usize, f64)> = None;
    for (index, entry) in manifest.samples.iter().enumerate() {
        let error = cents_between(target_hz, entry.hz);
        // Strict comparison keeps the first entry on exact ties.
        let closer = match best {
            Some((_, best_error)) => error.abs() < best_error.abs(),
            None => true,
        };
        if closer {
            best = Some((index, error));
        }
    }

    let (index, cents_error) = best.expect("validated manifest has at least one sample");
    let entry = &manifest.samples[index];
    Ok(FrequencyMapping {
        target_hz,
        sample_id: entry.id.clone(),
        sample_hz: entry.hz,
        cents_error,
        midi: entry.midi,
    })
}

/// Maps a target frequency and enforces the cents budget.
///
/// A sample played more than `max_cents` off the intended pitch would
/// corrupt the pitch relationship the trainer is teaching, so exceeding
/// the budget is a hard failure carrying full diagnostics, not something
/// to retry.
pub fn map_frequency_checked(
    manifest: &SampleManifest,
    target_hz: f64,
    max_cents: f64,
) -> Result<FrequencyMapping, SampleError> {
    let mapping = map_frequency(manifest, target_hz)?;
    if mapping.cents_error.abs() > max_cents {
        return Err(SampleError::ToleranceExceeded {
            target_hz,
            sample_id: mapping.sample_id,
            cents_error: mapping.cents_error,
            max_cents,
        });
    }
    Ok(mapping)
}
