//! Survey command implementation
//!
//! Checks that every equal-tempered pitch the trainer can request maps
//! inside the cents budget, and reports the worst offender.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tonicear_samples::survey::worst_mapping_error;

use super::{load_manifest, report_failure};

/// Run the survey command.
///
/// Exits nonzero when the worst mapping exceeds the budget so asset
/// pipelines can gate on it.
pub fn run(instrument: &str, manifest_path: Option<&str>, max_cents: f64) -> Result<ExitCode> {
    let manifest = load_manifest(instrument, manifest_path)?;

    let (worst_abs, mapping) = match worst_mapping_error(&manifest, None) {
        Ok(result) => result,
        Err(err) => {
            report_failure(&err);
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", serde_json::to_string_pretty(&mapping)?);
    if worst_abs > max_cents {
        eprintln!(
            "{} worst mapping is {:.2} cents at {:.4} Hz (budget {} cents)",
            "Failed:".red().bold(),
            worst_abs,
            mapping.target_hz,
            max_cents
        );
        return Ok(ExitCode::FAILURE);
    }

    eprintln!(
        "{} worst mapping is {:.2} cents at {:.4} Hz (budget {} cents)",
        "Passed:".green().bold(),
        worst_abs,
        mapping.target_hz,
        max_cents
    );
    Ok(ExitCode::SUCCESS)
}
