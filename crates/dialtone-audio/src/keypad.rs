//! DTMF keypad layout and digit-string validation.
//!
//! Each keypad character is signaled as the sum of one row frequency and
//! one column frequency:
//!
//! ```text
//!          1209 Hz  1336 Hz  1477 Hz
//! 697 Hz      1        2        3
//! 770 Hz      4        5        6
//! 852 Hz      7        8        9
//! 941 Hz      *        0        #
//! ```
//!
//! `-` is not a key; it marks a block of silence between tones.

use crate::error::{ToneError, ToneResult};

/// Row frequencies of the keypad grid, in Hz.
pub const ROW_FREQUENCIES: [f64; 4] = [697.0, 770.0, 852.0, 941.0];

/// Column frequencies of the keypad grid, in Hz.
pub const COLUMN_FREQUENCIES: [f64; 3] = [1209.0, 1336.0, 1477.0];

/// One validated character of the input digit string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DigitToken {
    /// A keypad tone with its row (low) and column (high) frequency in Hz.
    Tone {
        /// Row frequency in Hz.
        low: f64,
        /// Column frequency in Hz.
        high: f64,
    },
    /// A block of silence (`-`).
    Silence,
}

impl DigitToken {
    /// Maps a character to its keypad token.
    ///
    /// Returns `None` for characters outside `0-9`, `*`, `#` and `-`.
    pub fn from_char(c: char) -> Option<Self> {
        let (row, col) = match c {
            '1' => (0, 0),
            '2' => (0, 1),
            '3' => (0, 2),
            '4' => (1, 0),
            '5' => (1, 1),
            '6' => (1, 2),
            '7' => (2, 0),
            '8' => (2, 1),
            '9' => (2, 2),
            '*' => (3, 0),
            '0' => (3, 1),
            '#' => (3, 2),
            '-' => return Some(Self::Silence),
            _ => return None,
        };
        Some(Self::Tone {
            low: ROW_FREQUENCIES[row],
            high: COLUMN_FREQUENCIES[col],
        })
    }
}

/// Validates a digit string and maps it to keypad tokens.
///
/// Fails on empty input and on the first character outside the keypad
/// alphabet; no tokens are produced for a rejected string.
pub fn parse_digits(digits: &str) -> ToneResult<Vec<DigitToken>> {
    if digits.is_empty() {
        return Err(ToneError::EmptyDigits);
    }

    digits
        .chars()
        .map(|c| DigitToken::from_char(c).ok_or(ToneError::InvalidDigit { digit: c }))
        .collect()
}
