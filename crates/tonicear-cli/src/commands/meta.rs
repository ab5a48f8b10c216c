//! Meta command implementation
//!
//! Prints the option catalogs and client defaults as JSON.

use std::process::ExitCode;

use anyhow::Result;
use tonicear_session::meta::meta;

use super::write_output;

/// Run the meta command.
pub fn run(output: Option<&str>, compact: bool) -> Result<ExitCode> {
    let payload = meta();
    let json = if compact {
        serde_json::to_string(&payload)?
    } else {
        serde_json::to_string_pretty(&payload)?
    };
    write_output(&json, output)?;
    Ok(ExitCode::SUCCESS)
}
