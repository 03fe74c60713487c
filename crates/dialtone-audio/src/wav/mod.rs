//! Deterministic WAV file writer.
//!
//! This module writes canonical 16-bit PCM WAV files: a 44-byte header
//! followed by raw little-endian mono samples. Header fields are emitted
//! one by one with explicit widths and byte order, so the on-disk layout
//! never depends on struct layout or platform endianness. The BLAKE3 hash
//! of the PCM payload doubles as a determinism check.

mod format;
mod pcm;
mod result;
mod writer;


// Re-export public API
pub use format::{WavFormat, WaveHeader, HEADER_LEN};
pub use pcm::{compute_pcm_hash, extract_pcm_data};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
