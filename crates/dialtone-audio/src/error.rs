//! Error types for tone generation.

use thiserror::Error;

/// Result type for tone generation operations.
pub type ToneResult<T> = Result<T, ToneError>;

/// Errors that can occur while generating a DTMF wave file.
#[derive(Debug, Error)]
pub enum ToneError {
    /// Tone length outside the accepted range.
    #[error("invalid tone length: {duration} seconds (valid range is 0.1 - 1.0)")]
    InvalidDuration {
        /// The rejected tone length in seconds.
        duration: f64,
    },

    /// Character outside the DTMF keypad alphabet.
    #[error("invalid dtmf digit: '{digit}'")]
    InvalidDigit {
        /// The rejected character.
        digit: char,
    },

    /// Empty digit string.
    #[error("digit string is empty")]
    EmptyDigits,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
