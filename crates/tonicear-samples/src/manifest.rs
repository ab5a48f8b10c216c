//! Sample manifest types.
//!
//! A manifest is supplied by the external asset pipeline and lists every
//! playable sample with its recorded true pitch. The mapper treats the
//! manifest as read-only input; iteration order is the manifest's own
//! `samples` order and is what tie-breaking is defined against.

use serde::{Deserialize, Serialize};

use crate::error::SampleError;

/// One playable audio sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleEntry {
    /// Stable sample id (e.g. `"m069"`).
    pub id: String,
    /// Recorded true pitch of the sample, in Hz.
    pub hz: f64,
    /// Asset locator for the playback layer.
    pub file: String,
    /// MIDI note number of the recorded pitch, when the pipeline knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub midi: Option<u8>,
}

/// A set of samples plus optional pipeline metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleManifest {
    /// All samples. Order is preserved and meaningful for tie-breaking.
    pub samples: Vec<SampleEntry>,
    /// Common sample duration in milliseconds, if uniform.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Asset pipeline build identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_id: Option<String>,
}

impl SampleManifest {
    /// Creates a manifest from entries alone.
    pub fn new(samples: Vec<SampleEntry>) -> Self {
        Self {
            samples,
            duration_ms: None,
            build_id: None,
        }
    }

    /// Parses and validates a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self, SampleError> {
        let manifest: SampleManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Checks that the manifest is usable for mapping.
    ///
    /// Requires at least one entry, a non-empty id per entry, and a finite
    /// positive pitch per entry. Ordering and uniqueness of `hz` are not
    /// required; the nearest-neighbor scan tolerates both.
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.samples.is_empty() {
            return Err(SampleError::EmptyManifest);
        }
        for entry in &self.samples {
            if entry.id.is_empty() {
                return Err(SampleError::MalformedEntry {
                    id: String::new(),
                    detail: "empty sample id".to_string(),
                });
            }
            if !entry.hz.is_finite() || entry.hz <= 0.0 {
                return Err(SampleError::MalformedEntry {
                    id: entry.id.clone(),
                    detail: format!("invalid pitch {} Hz", entry.hz),
                });
            }
        }
        Ok(())
    }

    /// Looks up a sample by id.
    pub fn by_id(&self, sample_id: &str) -> Result<&SampleEntry, SampleError> {
        self.samples
            .iter()
            .find(|entry| entry.id == sample_id)
            .ok_or_else(|| SampleError::UnknownSampleId(sample_id.to_string()))
    }

    /// Lowest and highest recorded pitch across the manifest.
    pub fn hz_range(&self) -> Result<(f64, f64), SampleError> {
        self.validate()?;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for entry in &self.samples {
            min = min.min(entry.hz);
            max = max.max(entry.hz);
        }
        Ok((min, max))
    }

    /// Clamps a procedurally derived target into the representable range.
    ///
    /// This is the loose safety net for contexts that derive frequencies
    /// procedurally (e.g. a virtual keyboard); the cents-error guard in the
    /// mapper remains the strict one.
    pub fn clamp_to_range(&self, target_hz: f64) -> Result<f64, SampleError> {
        if !target_hz.is_finite() || target_hz <= 0.0 {
            return Err(SampleError::InvalidTargetFrequency { hz: target_hz });
        }
        let (min, max) = self.hz_range()?;
        Ok(target_hz.clamp(min, max))
    }
}
