//! End-to-end properties of the nearest-sample mapper against the builtin
//! manifests: round-trips, adjacency midpoints, tolerance enforcement, and
//! full-coverage surveys.

use pretty_assertions::assert_eq;

use tonicear_samples::builtin::{builtin_manifest, Instrument};
use tonicear_samples::manifest::{SampleEntry, SampleManifest};
use tonicear_samples::mapper::{
    cents_between, map_frequency, map_frequency_checked, DEFAULT_MAX_CENTS_ERROR,
};
use tonicear_samples::survey::{equal_temperament_targets, worst_mapping_error};
use tonicear_samples::SampleError;

fn small_manifest() -> SampleManifest {
    SampleManifest::new(
        [("s0", 110.0), ("s1", 220.0), ("s2", 440.0), ("s3", 880.0)]
            .iter()
            .map(|(id, hz)| SampleEntry {
                id: id.to_string(),
                hz: *hz,
                file: format!("{}.m4a", id),
                midi: None,
            })
            .collect(),
    )
}

#[test]
fn test_every_builtin_entry_self_maps_exactly() {
    for instrument in Instrument::all() {
        let manifest = builtin_manifest(*instrument);
        for entry in &manifest.samples {
            let mapping = map_frequency(&manifest, entry.hz).unwrap();
            assert_eq!(mapping.sample_id, entry.id);
            assert_eq!(mapping.cents_error, 0.0);
            assert_eq!(mapping.midi, entry.midi);
        }
    }
}

#[test]
fn test_between_adjacent_samples_closer_side_wins() {
    let manifest = small_manifest();
    for pair in manifest.samples.windows(2) {
        let (low, high) = (&pair[0], &pair[1]);
        // Just below and just above the logarithmic midpoint.
        let midpoint = (low.hz * high.hz).sqrt();
        let below = midpoint * 0.999;
        let above = midpoint * 1.001;

        assert_eq!(map_frequency(&manifest, below).unwrap().sample_id, low.id);
        assert_eq!(map_frequency(&manifest, above).unwrap().sample_id, high.id);
    }
}

#[test]
fn test_exact_log_midpoint_takes_first_iterated() {
    let manifest = small_manifest();
    let midpoint = (110.0f64 * 220.0).sqrt();
    let mapping = map_frequency(&manifest, midpoint).unwrap();
    assert_eq!(mapping.sample_id, "s0");
    // Sanity: both sides really are equidistant in cents.
    let low = cents_between(midpoint, 110.0).abs();
    let high = cents_between(midpoint, 220.0).abs();
    assert!((low - high).abs() < 1e-9);
}

#[test]
fn test_rejects_degenerate_targets() {
    let manifest = small_manifest();
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let result = map_frequency(&manifest, bad);
        assert!(
            matches!(result, Err(SampleError::InvalidTargetFrequency { .. })),
            "target {} was not rejected",
            bad
        );
    }
}

#[test]
fn test_builtin_survey_within_default_budget() {
    for instrument in Instrument::all() {
        let manifest = builtin_manifest(*instrument);
        let (worst_abs, _) = worst_mapping_error(&manifest, None).unwrap();
        assert!(worst_abs < DEFAULT_MAX_CENTS_ERROR);
    }
}

#[test]
fn test_all_app_targets_map_checked() {
    let manifest = builtin_manifest(Instrument::Piano);
    for target in equal_temperament_targets() {
        let mapping =
            map_frequency_checked(&manifest, target, DEFAULT_MAX_CENTS_ERROR).unwrap();
        assert!(mapping.cents_error.abs() <= DEFAULT_MAX_CENTS_ERROR);
    }
}

#[test]
fn test_sparse_manifest_fails_survey() {
    // One sample cannot cover almost three octaves of targets.
    let manifest = SampleManifest::new(vec![SampleEntry {
        id: "only".to_string(),
        hz: 261.626,
        file: "only.m4a".to_string(),
        midi: Some(60),
    }]);
    let (worst_abs, mapping) = worst_mapping_error(&manifest, None).unwrap();
    assert!(worst_abs > DEFAULT_MAX_CENTS_ERROR);
    assert_eq!(mapping.sample_id, "only");

    let err = map_frequency_checked(&manifest, 130.8, DEFAULT_MAX_CENTS_ERROR).unwrap_err();
    assert!(matches!(err, SampleError::ToleranceExceeded { .. }));
}

#[test]
fn test_clamp_then_map_keyboard_path() {
    // A virtual keyboard can ask for frequencies outside the manifest
    // entirely; clamping first keeps the request representable.
    let manifest = builtin_manifest(Instrument::Piano);
    let (min_hz, max_hz) = manifest.hz_range().unwrap();

    let clamped_low = manifest.clamp_to_range(20.0).unwrap();
    assert_eq!(clamped_low, min_hz);
    let mapping = map_frequency(&manifest, clamped_low).unwrap();
    assert_eq!(mapping.sample_id, "m038");

    let clamped_high = manifest.clamp_to_range(5000.0).unwrap();
    assert_eq!(clamped_high, max_hz);
    let mapping = map_frequency(&manifest, clamped_high).unwrap();
    assert_eq!(mapping.sample_id, "m083");
}
