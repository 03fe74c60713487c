//! Success reporting in human-readable and JSON form.

use colored::Colorize;
use dialtone_audio::GenerateResult;
use serde::Serialize;
use std::path::Path;

/// Machine-readable generation report.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Path the WAV file was written to.
    pub output: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Total sample count.
    pub num_samples: usize,
    /// Audio duration in seconds.
    pub duration_seconds: f64,
    /// Number of digits rendered.
    pub num_digits: usize,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

impl GenerateReport {
    /// Builds the report for a finished generation.
    pub fn new(output: &Path, result: &GenerateResult) -> Self {
        Self {
            output: output.display().to_string(),
            sample_rate: result.wav.sample_rate,
            num_samples: result.wav.num_samples,
            duration_seconds: result.wav.duration_seconds(),
            num_digits: result.num_digits,
            pcm_hash: result.wav.pcm_hash.clone(),
        }
    }
}

/// Prints the colored human-readable summary.
pub fn print_human(report: &GenerateReport) {
    println!("{} {}", "Wrote:".green().bold(), report.output);
    println!("  {} {}", "Digits:".dimmed(), report.num_digits);
    println!(
        "  {} {:.2}s ({} samples at {} Hz)",
        "Duration:".dimmed(),
        report.duration_seconds,
        report.num_samples,
        report.sample_rate
    );
    println!("  {} {}", "PCM hash:".dimmed(), report.pcm_hash);
}
