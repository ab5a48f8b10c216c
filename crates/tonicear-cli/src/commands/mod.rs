//! Command implementations.

pub mod map;
pub mod meta;
pub mod session;
pub mod survey;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use colored::Colorize;
use tonicear_samples::builtin::{builtin_manifest, Instrument};
use tonicear_samples::manifest::SampleManifest;
use tonicear_theory::error::CodedError;

/// Prints a component error with its stable code and returns failure.
pub(crate) fn report_failure<E: CodedError>(err: &E) {
    eprintln!("{} [{}] {}", "Error:".red().bold(), err.code(), err.message());
}

/// Resolves the manifest to work against.
///
/// An explicit manifest file wins; otherwise the builtin manifest for the
/// requested instrument is used.
pub(crate) fn load_manifest(
    instrument: &str,
    manifest_path: Option<&str>,
) -> Result<SampleManifest> {
    match manifest_path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read manifest file: {}", path))?;
            let manifest = SampleManifest::from_json(&text)
                .with_context(|| format!("failed to parse manifest file: {}", path))?;
            Ok(manifest)
        }
        None => {
            let instrument = Instrument::from_str(instrument)?;
            Ok(builtin_manifest(instrument))
        }
    }
}

/// Writes JSON to a file or stdout.
pub(crate) fn write_output(json: &str, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(Path::new(path), json)
                .with_context(|| format!("failed to write output file: {}", path))?;
            eprintln!("{} {}", "Wrote:".cyan().bold(), path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
