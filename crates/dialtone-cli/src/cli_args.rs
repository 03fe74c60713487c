//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Dialtone - DTMF wave file generator
#[derive(Debug, Parser)]
#[command(name = "dialtone")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the Wave file to create
    pub output: PathBuf,

    /// Duration (in seconds) of each dtmf tone, valid range is 0.1 - 1.0
    #[arg(allow_hyphen_values = true)]
    pub tone_length: String,

    /// String of digits to create tones for: 0-9, # and *, with - for a
    /// duration of silence (a string may start with -)
    #[arg(allow_hyphen_values = true)]
    pub digits: String,

    /// Output a machine-readable JSON report instead of the summary
    #[arg(long)]
    pub json: bool,
}
