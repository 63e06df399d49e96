//! WAV input and output for the mix command.
//!
//! Integer PCM is normalized to [-1.0, 1.0); output is always 32-bit float.

use anyhow::{Context, Result};
use std::io::{Read, Seek, Write};
use std::path::Path;

/// Interleaved float audio loaded from (or destined for) a WAV file.
#[derive(Debug, Clone, PartialEq)]
pub struct WavAudio {
    /// Interleaved samples.
    pub samples: Vec<f32>,
    /// Channels per frame.
    pub channels: usize,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

impl WavAudio {
    /// Number of whole frames.
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels
        }
    }
}

/// Reads a WAV file from disk.
pub fn read_wav(path: &Path) -> Result<WavAudio> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    decode_wav(std::io::BufReader::new(file))
        .with_context(|| format!("failed to decode {}", path.display()))
}

/// Decodes WAV data from any reader.
pub fn decode_wav<R: Read>(reader: R) -> Result<WavAudio> {
    let reader = hound::WavReader::new(reader)?;
    let spec = reader.spec();

    let samples: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|s| s as f32 / max_val))
                .collect::<Result<_, _>>()?
        }
        hound::SampleFormat::Float => reader.into_samples::<f32>().collect::<Result<_, _>>()?,
    };

    Ok(WavAudio {
        samples,
        channels: usize::from(spec.channels),
        sample_rate: spec.sample_rate,
    })
}

/// Writes audio to disk as 32-bit float WAV.
pub fn write_wav(path: &Path, audio: &WavAudio) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    encode_wav(std::io::BufWriter::new(file), audio)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Encodes audio as 32-bit float WAV into any seekable writer.
pub fn encode_wav<W: Write + Seek>(writer: W, audio: &WavAudio) -> Result<()> {
    let channels = u16::try_from(audio.channels)
        .with_context(|| format!("{} channels do not fit in a WAV header", audio.channels))?;
    let spec = hound::WavSpec {
        channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::new(writer, spec)?;
    for &sample in &audio.samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
