//! Dialtone audio library
//!
//! This crate turns a string of telephone keypad digits into a canonical
//! PCM WAVE file image. Each digit becomes a fixed-length block of samples
//! holding the sum of the two DTMF sine frequencies for that key; `-`
//! produces a block of silence.
//!
//! # Determinism
//!
//! Generation is a pure function of the digit string, the tone length and
//! the [`ToneConfig`]. Identical inputs produce byte-identical output, and
//! the BLAKE3 hash of the PCM payload is reported alongside the WAV bytes
//! so callers can verify it.
//!
//! # Example
//!
//! ```ignore
//! use dialtone_audio::{generate, ToneConfig};
//!
//! let result = generate("123-3831", 0.3, &ToneConfig::default())?;
//! result.wav.write_to_file("wavy.wav")?;
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point for tone generation
//! - [`config`] - The immutable generation parameters
//! - [`keypad`] - DTMF keypad layout and digit-string validation
//! - [`synthesis`] - Dual-sine additive synthesis
//! - [`wav`] - Deterministic WAV file writer

pub mod config;
pub mod error;
pub mod generate;
pub mod keypad;
pub mod synthesis;
pub mod wav;

// Re-export main types at crate root
pub use config::ToneConfig;
pub use error::{ToneError, ToneResult};
pub use generate::{generate, GenerateResult};
pub use keypad::DigitToken;
pub use wav::{WavFormat, WavResult};
