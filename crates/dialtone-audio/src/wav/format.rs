//! WAV format parameters and the canonical header layout.

use std::io::{self, Write};

/// Serialized size of [`WaveHeader`] in bytes.
pub const HEADER_LEN: usize = 44;

/// Size of the `fmt ` chunk body for integer PCM.
const FMT_CHUNK_LEN: u32 = 16;

/// Format tag for integer PCM.
const AUDIO_FORMAT_PCM: u16 = 1;

/// WAV sample format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono 16-bit format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    /// Calculates bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Calculates block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// The canonical RIFF/WAVE header for a single `fmt ` + `data` PCM file.
///
/// Fields are stored with their on-disk widths and written in declaration
/// order, little-endian, by [`WaveHeader::write_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
    /// `"RIFF"`.
    pub chunk_id: [u8; 4],
    /// Total file size minus 8.
    pub chunk_size: u32,
    /// `"WAVE"`.
    pub format: [u8; 4],
    /// `"fmt "`.
    pub subchunk1_id: [u8; 4],
    /// 16 for integer PCM.
    pub subchunk1_size: u32,
    /// 1 = integer PCM.
    pub audio_format: u16,
    /// Channel count.
    pub num_channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// `sample_rate * block_align`.
    pub byte_rate: u32,
    /// `num_channels * bytes_per_sample`.
    pub block_align: u16,
    /// Bits per sample.
    pub bits_per_sample: u16,
    /// `"data"`.
    pub subchunk2_id: [u8; 4],
    /// PCM payload byte count.
    pub subchunk2_size: u32,
}

impl WaveHeader {
    /// Builds the header for a PCM payload of `data_size` bytes.
    pub fn new(format: &WavFormat, data_size: u32) -> Self {
        Self {
            chunk_id: *b"RIFF",
            chunk_size: 4 + (8 + FMT_CHUNK_LEN) + (8 + data_size),
            format: *b"WAVE",
            subchunk1_id: *b"fmt ",
            subchunk1_size: FMT_CHUNK_LEN,
            audio_format: AUDIO_FORMAT_PCM,
            num_channels: format.channels,
            sample_rate: format.sample_rate,
            byte_rate: format.byte_rate(),
            block_align: format.block_align(),
            bits_per_sample: format.bits_per_sample,
            subchunk2_id: *b"data",
            subchunk2_size: data_size,
        }
    }

    /// Writes the 44 header bytes, field by field, little-endian.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.chunk_id)?;
        writer.write_all(&self.chunk_size.to_le_bytes())?;
        writer.write_all(&self.format)?;
        writer.write_all(&self.subchunk1_id)?;
        writer.write_all(&self.subchunk1_size.to_le_bytes())?;
        writer.write_all(&self.audio_format.to_le_bytes())?;
        writer.write_all(&self.num_channels.to_le_bytes())?;
        writer.write_all(&self.sample_rate.to_le_bytes())?;
        writer.write_all(&self.byte_rate.to_le_bytes())?;
        writer.write_all(&self.block_align.to_le_bytes())?;
        writer.write_all(&self.bits_per_sample.to_le_bytes())?;
        writer.write_all(&self.subchunk2_id)?;
        writer.write_all(&self.subchunk2_size.to_le_bytes())?;
        Ok(())
    }
}
