//! Generate command implementation.
//!
//! Validates the tone length and digit string, synthesizes the sample
//! buffer and writes the WAV file.

use anyhow::{Context, Result};
use dialtone_audio::{generate, ToneConfig};
use std::process::ExitCode;

use crate::cli_args::Cli;
use crate::report::{self, GenerateReport};
use crate::usage;

/// Runs tone generation for parsed command-line arguments.
///
/// Validation failures print the usage text to standard output and exit 1,
/// like a wrong argument count does. I/O failures propagate to the caller.
///
/// # Returns
/// Exit code: 0 success, 1 validation failure
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let Ok(tone_seconds) = cli.tone_length.parse::<f64>() else {
        usage::print_usage();
        return Ok(ExitCode::FAILURE);
    };

    let config = ToneConfig::default();
    let result = match generate(&cli.digits, tone_seconds, &config) {
        Ok(result) => result,
        Err(_) => {
            usage::print_usage();
            return Ok(ExitCode::FAILURE);
        }
    };

    result
        .wav
        .write_to_file(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    let report = GenerateReport::new(&cli.output, &result);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report::print_human(&report);
    }

    Ok(ExitCode::SUCCESS)
}
