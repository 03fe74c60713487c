//! Dual-sine additive synthesis.
//!
//! A digit block holds `amplitude * (sin(2π·f_low·n/rate) + sin(2π·f_high·n/rate))`
//! for each sample index `n` within the block. The phase restarts at every
//! digit, so repeated digits produce identical blocks.

use crate::config::ToneConfig;
use crate::keypad::DigitToken;

/// One full phase cycle.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Renders one digit block of `num_samples` normalized samples.
///
/// Silence blocks are exactly zero; tone blocks stay within
/// `[-2 * amplitude, 2 * amplitude]`.
pub fn render_digit(token: DigitToken, num_samples: usize, config: &ToneConfig) -> Vec<f64> {
    match token {
        DigitToken::Silence => vec![0.0; num_samples],
        DigitToken::Tone { low, high } => {
            let sample_rate = config.sample_rate as f64;
            (0..num_samples)
                .map(|n| {
                    let t = n as f64 / sample_rate;
                    config.amplitude * ((TWO_PI * low * t).sin() + (TWO_PI * high * t).sin())
                })
                .collect()
        }
    }
}

/// Renders the full sample buffer: one fixed-length block per token,
/// concatenated in input order.
pub fn render_sequence(
    tokens: &[DigitToken],
    samples_per_digit: usize,
    config: &ToneConfig,
) -> Vec<f64> {
    let mut buffer = Vec::with_capacity(samples_per_digit * tokens.len());
    for &token in tokens {
        buffer.extend(render_digit(token, samples_per_digit, config));
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_block_is_all_zero() {
        let config = ToneConfig::default();
        let block = render_digit(DigitToken::Silence, 1000, &config);
        assert_eq!(block.len(), 1000);
        assert!(block.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_tone_block_matches_dual_sine_formula() {
        let config = ToneConfig::default();
        let token = DigitToken::Tone { low: 770.0, high: 1336.0 };
        let block = render_digit(token, 500, &config);

        let rate = config.sample_rate as f64;
        for (n, &sample) in block.iter().enumerate() {
            let t = n as f64 / rate;
            let expected =
                config.amplitude * ((TWO_PI * 770.0 * t).sin() + (TWO_PI * 1336.0 * t).sin());
            assert_eq!(sample, expected, "sample {}", n);
        }
    }

    #[test]
    fn test_tone_block_starts_at_zero_phase() {
        let config = ToneConfig::default();
        let block = render_digit(DigitToken::Tone { low: 697.0, high: 1209.0 }, 10, &config);
        assert_eq!(block[0], 0.0);
    }

    #[test]
    fn test_tone_block_stays_inside_headroom() {
        let config = ToneConfig::default();
        let block = render_digit(DigitToken::Tone { low: 941.0, high: 1477.0 }, 44100, &config);
        let bound = 2.0 * config.amplitude;
        assert!(block.iter().all(|&s| s.abs() <= bound));
    }

    #[test]
    fn test_sequence_concatenates_blocks_in_order() {
        let config = ToneConfig::default();
        let tokens = [
            DigitToken::Tone { low: 697.0, high: 1209.0 },
            DigitToken::Silence,
        ];
        let buffer = render_sequence(&tokens, 100, &config);

        assert_eq!(buffer.len(), 200);
        assert_eq!(&buffer[0..100], &render_digit(tokens[0], 100, &config)[..]);
        assert!(buffer[100..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_repeated_digits_render_identically() {
        let config = ToneConfig::default();
        let token = DigitToken::Tone { low: 852.0, high: 1336.0 };
        let buffer = render_sequence(&[token, token], 250, &config);
        assert_eq!(&buffer[0..250], &buffer[250..500]);
    }
}
