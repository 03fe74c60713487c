//! PCM payload extraction and hashing.

use super::format::HEADER_LEN;

/// Extracts the PCM payload from a canonical-layout WAV buffer.
///
/// Only the single `fmt ` + `data` layout this crate writes is accepted:
/// the `data` chunk must start at byte 36.
///
/// # Returns
/// The PCM bytes, or `None` when the magic values are missing or the
/// declared payload size does not fit the buffer.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" || &wav_data[36..40] != b"data" {
        return None;
    }

    let data_size =
        u32::from_le_bytes([wav_data[40], wav_data[41], wav_data[42], wav_data[43]]) as usize;
    wav_data.get(HEADER_LEN..HEADER_LEN + data_size)
}

/// Computes the BLAKE3 hash of the PCM payload of a WAV buffer.
///
/// Used for comparing WAV files by their audio content only.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
