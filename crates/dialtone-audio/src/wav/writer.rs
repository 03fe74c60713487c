//! PCM quantization and WAV assembly.

use std::io::{self, Write};

use super::format::{WavFormat, WaveHeader, HEADER_LEN};

/// Converts normalized f64 samples to 16-bit PCM bytes.
///
/// Samples are expected in [-1.0, 1.0]; values outside saturate rather
/// than wrap.
///
/// # Arguments
/// * `samples` - Audio samples in f64 format
///
/// # Returns
/// PCM data as little-endian 16-bit samples
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }

    pcm
}

/// Writes a complete WAV file to a writer: header first, PCM payload
/// immediately after, no framing in between.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let header = WaveHeader::new(format, pcm_data.len() as u32);
    header.write_to(writer)?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Assembles a complete WAV file in memory.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}
