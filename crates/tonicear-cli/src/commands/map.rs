//! Map command implementation
//!
//! Resolves one target frequency against a manifest and reports the
//! mapping with its cents error.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tonicear_samples::mapper::map_frequency_checked;

use super::{load_manifest, report_failure};

/// Run the map command.
///
/// With `clamp`, the target is first clamped into the manifest's pitch
/// range, the path a virtual keyboard takes for procedurally derived
/// frequencies.
pub fn run(
    hz: f64,
    instrument: &str,
    manifest_path: Option<&str>,
    max_cents: f64,
    clamp: bool,
) -> Result<ExitCode> {
    let manifest = load_manifest(instrument, manifest_path)?;

    let target = if clamp {
        match manifest.clamp_to_range(hz) {
            Ok(clamped) => {
                if (clamped - hz).abs() > f64::EPSILON {
                    eprintln!(
                        "{} {} Hz clamped to {} Hz",
                        "Note:".yellow().bold(),
                        hz,
                        clamped
                    );
                }
                clamped
            }
            Err(err) => {
                report_failure(&err);
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        hz
    };

    match map_frequency_checked(&manifest, target, max_cents) {
        Ok(mapping) => {
            eprintln!(
                "{} {} -> {} ({:.2} cents)",
                "Mapped:".cyan().bold(),
                target,
                mapping.sample_id,
                mapping.cents_error
            );
            println!("{}", serde_json::to_string_pretty(&mapping)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_failure(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}
