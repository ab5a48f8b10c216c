//! Mapping-coverage survey.
//!
//! Before a manifest ships, every equal-tempered frequency the trainer can
//! request should map inside the cents budget. The survey enumerates those
//! targets and reports the worst mapping so asset-completeness problems
//! surface at build time instead of mid-session.

use tonicear_theory::key::KEY_OPTIONS;
use tonicear_theory::pitch::{do_frequency, note_frequency, Gender, Temperament};

use crate::error::SampleError;
use crate::manifest::SampleManifest;
use crate::mapper::{map_frequency, FrequencyMapping};

/// Floats closer than this are treated as the same target.
const DEDUPE_TOLERANCE: f64 = 1e-6;

/// Every distinct equal-tempered frequency reachable in the app.
///
/// 2 genders x 12 keys x 12 semitones, deduplicated; many combinations
/// coincide because the female register is exactly the male register one
/// octave up.
pub fn equal_temperament_targets() -> Vec<f64> {
    let mut frequencies = Vec::new();
    for gender in Gender::all() {
        for key in &KEY_OPTIONS {
            let do_hz = do_frequency(*gender, key.id).expect("static key table");
            for semitone in 0..12u8 {
                frequencies.push(note_frequency(
                    Temperament::EqualTemperament,
                    semitone,
                    do_hz,
                ));
            }
        }
    }
    dedupe_sorted(frequencies)
}

fn dedupe_sorted(mut values: Vec<f64>) -> Vec<f64> {
    values.sort_by(|a, b| a.partial_cmp(b).expect("finite frequencies"));
    let mut unique: Vec<f64> = Vec::with_capacity(values.len());
    for value in values {
        match unique.last() {
            Some(last) if (value - last).abs() <= DEDUPE_TOLERANCE => {}
            _ => unique.push(value),
        }
    }
    unique
}

/// Maps every target and returns the worst absolute cents error.
///
/// Pass `None` to survey the full equal-tempered target set.
pub fn worst_mapping_error(
    manifest: &SampleManifest,
    targets: Option<&[f64]>,
) -> Result<(f64, FrequencyMapping), SampleError> {
    let owned;
    let targets = match targets {
        Some(list) => list,
        None => {
            owned = equal_temperament_targets();
            &owned
        }
    };
    if targets.is_empty() {
        return Err(SampleError::EmptyTargets);
    }

    let mut worst: Option<FrequencyMapping> = None;
    for &target in targets {
        let mapping = map_frequency(manifest, target)?;
        let is_worse = match &worst {
            Some(current) => mapping.cents_error.abs() > current.cents_error.abs(),
            None => true,
        };
        if is_worse {
            worst = Some(mapping);
        }
    }

    let worst = worst.expect("targets checked non-empty");
    Ok((worst.cents_error.abs(), worst))
}
