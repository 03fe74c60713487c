//! Main entry point for tone generation.
//!
//! Wires validation, synthesis and WAV serialization into one pure
//! function; the caller decides where the resulting bytes go.

use crate::config::ToneConfig;
use crate::error::{ToneError, ToneResult};
use crate::keypad;
use crate::synthesis::render_sequence;
use crate::wav::WavResult;

/// Shortest accepted tone length in seconds.
pub const MIN_TONE_SECONDS: f64 = 0.1;

/// Longest accepted tone length in seconds.
pub const MAX_TONE_SECONDS: f64 = 1.0;

/// Result of tone generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// WAV file data and PCM hash.
    pub wav: WavResult,
    /// Number of digits rendered.
    pub num_digits: usize,
}

/// Checks a tone length against the accepted closed interval.
pub fn validate_tone_seconds(tone_seconds: f64) -> ToneResult<f64> {
    if !(MIN_TONE_SECONDS..=MAX_TONE_SECONDS).contains(&tone_seconds) {
        return Err(ToneError::InvalidDuration {
            duration: tone_seconds,
        });
    }
    Ok(tone_seconds)
}

/// Generates the WAV image for a digit string.
///
/// # Arguments
/// * `digits` - Keypad characters: `0-9`, `*`, `#` and `-` for silence
/// * `tone_seconds` - Length of each digit block, in [0.1, 1.0]
/// * `config` - Generation parameters
///
/// # Returns
/// The assembled WAV bytes with PCM hash and metadata
pub fn generate(digits: &str, tone_seconds: f64, config: &ToneConfig) -> ToneResult<GenerateResult> {
    let tone_seconds = validate_tone_seconds(tone_seconds)?;
    let tokens = keypad::parse_digits(digits)?;

    let samples_per_digit = config.samples_per_digit(tone_seconds);
    let samples = render_sequence(&tokens, samples_per_digit, config);

    Ok(GenerateResult {
        wav: WavResult::from_mono(&samples, config.sample_rate),
        num_digits: tokens.len(),
    })
}
