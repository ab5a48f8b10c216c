//! Session command implementation
//!
//! Generates one training session and writes it as JSON.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use tonicear_session::generate::{generate_session, MappingConfig, SessionRequest};

use super::{load_manifest, report_failure, write_output};

/// Arguments for the session command.
pub struct SessionArgs<'a> {
    pub module: &'a str,
    pub gender: &'a str,
    pub key: &'a str,
    pub temperament: &'a str,
    pub instrument: &'a str,
    pub seed: Option<u32>,
    pub manifest: Option<&'a str>,
    pub no_mapping: bool,
    pub max_cents: Option<f64>,
    pub output: Option<&'a str>,
    pub compact: bool,
}

/// Run the session command.
pub fn run(args: SessionArgs<'_>) -> Result<ExitCode> {
    let request = SessionRequest {
        module_id: args.module.to_string(),
        gender: args.gender.to_string(),
        key: args.key.to_string(),
        temperament: args.temperament.to_string(),
        instrument: args.instrument.to_string(),
        seed: args.seed,
    };

    let manifest = if args.no_mapping {
        None
    } else {
        Some(load_manifest(args.instrument, args.manifest)?)
    };
    let mapping = manifest.as_ref().map(|manifest| {
        let config = MappingConfig::new(manifest);
        match args.max_cents {
            Some(max_cents) => config.with_max_cents(max_cents),
            None => config,
        }
    });

    let session = match generate_session(&request, mapping.as_ref()) {
        Ok(session) => session,
        Err(err) => {
            report_failure(&err);
            return Ok(ExitCode::FAILURE);
        }
    };

    eprintln!(
        "{} {} ({} questions, seed {})",
        "Session:".cyan().bold(),
        session.session_id,
        session.settings.question_count,
        session.settings.seed
    );

    let json = if args.compact {
        session.to_json()?
    } else {
        session.to_json_pretty()?
    };
    write_output(&json, args.output)?;
    Ok(ExitCode::SUCCESS)
}
