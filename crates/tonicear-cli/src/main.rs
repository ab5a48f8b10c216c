//! Tonic Ear CLI - deterministic ear-training session generation
//!
//! This binary provides commands for inspecting the option catalogs,
//! generating quiz sessions, and checking sample-mapping coverage.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

// Use modules from the library crate
use tonicear_cli::commands;
use tonicear_samples::mapper::DEFAULT_MAX_CENTS_ERROR;

/// Tonic Ear - Pitch and Interval Ear Training
#[derive(Parser)]
#[command(name = "tonicear")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the option catalogs and client defaults as JSON
    Meta {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Generate one training session as JSON
    Session {
        /// Module id (e.g. M2-L1; see `meta` for the catalog)
        #[arg(short, long)]
        module: String,

        /// Voice gender (male or female)
        #[arg(long, default_value = "male")]
        gender: String,

        /// Key id (e.g. C, F#/Gb)
        #[arg(long, default_value = "C")]
        key: String,

        /// Temperament id
        #[arg(long, default_value = "equal_temperament")]
        temperament: String,

        /// Instrument id (piano or guitar)
        #[arg(long, default_value = "piano")]
        instrument: String,

        /// Base seed for reproducible output (default: drawn from entropy)
        #[arg(long)]
        seed: Option<u32>,

        /// Sample manifest file (default: builtin manifest for the instrument)
        #[arg(long)]
        manifest: Option<String>,

        /// Skip sample mapping; payloads carry frequencies only
        #[arg(long)]
        no_mapping: bool,

        /// Cents budget for sample mapping
        #[arg(long)]
        max_cents: Option<f64>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Map a target frequency to the nearest sample
    Map {
        /// Target frequency in Hz
        #[arg(long)]
        hz: f64,

        /// Instrument id selecting the builtin manifest
        #[arg(long, default_value = "piano")]
        instrument: String,

        /// Sample manifest file (overrides --instrument)
        #[arg(long)]
        manifest: Option<String>,

        /// Cents budget for the tolerance guard
        #[arg(long, default_value_t = DEFAULT_MAX_CENTS_ERROR)]
        max_cents: f64,

        /// Clamp the target into the manifest's pitch range first
        #[arg(long)]
        clamp: bool,
    },

    /// Check worst-case mapping error across all reachable pitches
    Survey {
        /// Instrument id selecting the builtin manifest
        #[arg(long, default_value = "piano")]
        instrument: String,

        /// Sample manifest file (overrides --instrument)
        #[arg(long)]
        manifest: Option<String>,

        /// Cents budget the survey must stay inside
        #[arg(long, default_value_t = DEFAULT_MAX_CENTS_ERROR)]
        max_cents: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Meta { output, compact } => commands::meta::run(output.as_deref(), *compact),
        Commands::Session {
            module,
            gender,
            key,
            temperament,
            instrument,
            seed,
            manifest,
            no_mapping,
            max_cents,
            output,
            compact,
        } => commands::session::run(commands::session::SessionArgs {
            module,
            gender,
            key,
            temperament,
            instrument,
            seed: *seed,
            manifest: manifest.as_deref(),
            no_mapping: *no_mapping,
            max_cents: *max_cents,
            output: output.as_deref(),
            compact: *compact,
        }),
        Commands::Map {
            hz,
            instrument,
            manifest,
            max_cents,
            clamp,
        } => commands::map::run(*hz, instrument, manifest.as_deref(), *max_cents, *clamp),
        Commands::Survey {
            instrument,
            manifest,
            max_cents,
        } => commands::survey::run(instrument, manifest.as_deref(), *max_cents),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
