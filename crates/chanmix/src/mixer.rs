//! Validated mixing front end.
//!
//! [`ChannelMixer`] pairs a stream with the mixer it feeds, checks every
//! precondition the core transforms assume, and picks the operation once.
//! After construction, [`ChannelMixer::process`] only has to check buffer
//! sizes.

use serde::Serialize;

use crate::buffer::{Interleaved, InterleavedMut};
use crate::decision::{should_downmix, should_upmix};
use crate::downmix::{downmix, downmix_method, DownmixMethod};
use crate::error::{MixError, MixResult};
use crate::layout::ChannelLayout;
use crate::params::StreamParams;
use crate::upmix::upmix;

/// What a mixer does to each buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MixOperation {
    /// Fewer (or reinterpreted) output channels.
    Downmix,
    /// More output channels.
    Upmix,
    /// Same channels; samples are copied unchanged.
    Passthrough,
}

impl std::fmt::Display for MixOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MixOperation::Downmix => write!(f, "downmix"),
            MixOperation::Upmix => write!(f, "upmix"),
            MixOperation::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// Outcome of one [`ChannelMixer::process`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MixReport {
    /// Frames written to the output.
    pub frames: usize,
    /// Operation performed.
    pub operation: MixOperation,
    /// Downmix strategy, for downmixes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<DownmixMethod>,
}

/// Converts float32 buffers from one stream configuration to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMixer {
    stream: StreamParams,
    mixer: StreamParams,
    operation: MixOperation,
}

impl ChannelMixer {
    /// Validates both parameter sets and decides the operation.
    ///
    /// # Errors
    /// - either side has zero channels or a count that contradicts its layout
    /// - either side is not float32
    /// - the sample rates differ
    /// - a downmix is needed but the stream layout is `Unsupported`
    pub fn new(stream: StreamParams, mixer: StreamParams) -> MixResult<Self> {
        stream.validate("stream")?;
        mixer.validate("mixer")?;

        for params in [&stream, &mixer] {
            if !params.format.is_float32() {
                return Err(MixError::UnsupportedSampleFormat {
                    format: params.format,
                });
            }
        }

        if stream.rate != mixer.rate {
            return Err(MixError::SampleRateMismatch {
                stream: stream.rate,
                mixer: mixer.rate,
            });
        }

        let operation = if should_downmix(&stream, &mixer) {
            if stream.layout == ChannelLayout::Unsupported {
                return Err(MixError::UnsupportedInputLayout);
            }
            MixOperation::Downmix
        } else if should_upmix(&stream, &mixer) {
            MixOperation::Upmix
        } else if stream.channels != mixer.channels {
            // Unsupported into Unsupported with fewer channels: the layouts
            // compare equal, so no downmix was chosen, yet one is needed.
            return Err(MixError::UnsupportedInputLayout);
        } else {
            MixOperation::Passthrough
        };

        Ok(Self {
            stream,
            mixer,
            operation,
        })
    }

    /// Input side.
    pub fn stream(&self) -> &StreamParams {
        &self.stream
    }

    /// Output side.
    pub fn mixer(&self) -> &StreamParams {
        &self.mixer
    }

    /// Operation every call to [`process`](Self::process) performs.
    pub fn operation(&self) -> MixOperation {
        self.operation
    }

    /// Downmix strategy that will run, for downmixes.
    pub fn downmix_method(&self) -> Option<DownmixMethod> {
        (self.operation == MixOperation::Downmix).then(|| {
            downmix_method(
                self.stream.channels,
                self.mixer.channels,
                self.stream.layout,
                self.mixer.layout,
            )
        })
    }

    /// Output samples needed for an input of `input_len` samples.
    pub fn output_len(&self, input_len: usize) -> usize {
        input_len / self.stream.channels * self.mixer.channels
    }

    /// Mixes all of `input` into `output`.
    ///
    /// # Errors
    /// - `input` is not a whole number of stream frames
    /// - `output` does not hold exactly the same number of mixer frames
    pub fn process(&self, input: &[f32], output: &mut [f32]) -> MixResult<MixReport> {
        let input = Interleaved::new(input, self.stream.channels)?;
        let frames = input.frames();

        let expected = frames * self.mixer.channels;
        if output.len() != expected {
            return Err(MixError::OutputSizeMismatch {
                expected,
                found: output.len(),
            });
        }
        let mut output = InterleavedMut::new(output, self.mixer.channels)?;

        let method = match self.operation {
            MixOperation::Downmix => Some(downmix(
                input.as_slice(),
                frames,
                output.as_mut_slice(),
                self.stream.channels,
                self.mixer.channels,
                self.stream.layout,
                self.mixer.layout,
            )),
            MixOperation::Upmix => {
                upmix(
                    input.as_slice(),
                    frames,
                    output.as_mut_slice(),
                    self.stream.channels,
                    self.mixer.channels,
                );
                None
            }
            MixOperation::Passthrough => {
                output.as_mut_slice().copy_from_slice(input.as_slice());
                None
            }
        };

        Ok(MixReport {
            frames,
            operation: self.operation,
            method,
        })
    }

    /// Mixes `input` into a newly allocated buffer.
    pub fn process_to_vec(&self, input: &[f32]) -> MixResult<(Vec<f32>, MixReport)> {
        let mut output = vec![0.0; self.output_len(input.len())];
        let report = self.process(input, &mut output)?;
        Ok((output, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SampleFormat;
    use pretty_assertions::assert_eq;

    const RATE: u32 = 48000;

    fn mixer(from: ChannelLayout, to: ChannelLayout) -> ChannelMixer {
        ChannelMixer::new(
            StreamParams::float(RATE, from),
            StreamParams::float(RATE, to),
        )
        .unwrap()
    }

    #[test]
    fn test_decides_operation() {
        let down = mixer(ChannelLayout::ThreeF2Lfe, ChannelLayout::Stereo);
        assert_eq!(down.operation(), MixOperation::Downmix);
        assert_eq!(down.downmix_method(), Some(DownmixMethod::Matrix));

        let up = mixer(ChannelLayout::Mono, ChannelLayout::Stereo);
        assert_eq!(up.operation(), MixOperation::Upmix);
        assert_eq!(up.downmix_method(), None);

        let same = mixer(ChannelLayout::DualMono, ChannelLayout::Stereo);
        assert_eq!(same.operation(), MixOperation::Passthrough);
    }

    #[test]
    fn test_process_upmix() {
        let m = mixer(ChannelLayout::Mono, ChannelLayout::TwoF2);
        let (output, report) = m.process_to_vec(&[7.0, 8.0]).unwrap();
        assert_eq!(output, vec![7.0, 7.0, 0.0, 0.0, 8.0, 8.0, 0.0, 0.0]);
        assert_eq!(
            report,
            MixReport {
                frames: 2,
                operation: MixOperation::Upmix,
                method: None,
            }
        );
    }

    #[test]
    fn test_process_downmix_reports_method() {
        let m = mixer(ChannelLayout::ThreeF3RLfe, ChannelLayout::TwoF1);
        let (output, report) = m
            .process_to_vec(&[2.0, 3.0, 4.0, 10.0, 8.0, 5.0, 6.0])
            .unwrap();
        assert_eq!(output, vec![2.0, 3.0, 8.0]);
        assert_eq!(report.method, Some(DownmixMethod::ChannelMap));
    }

    #[test]
    fn test_passthrough_copies() {
        let m = mixer(ChannelLayout::Stereo, ChannelLayout::DualMono);
        let (output, _) = m.process_to_vec(&[0.1, 0.2, 0.3, 0.4]).unwrap();
        assert_eq!(output, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_rejects_non_float() {
        let mut stream = StreamParams::float(RATE, ChannelLayout::Stereo);
        stream.format = SampleFormat::S16LE;
        let err = ChannelMixer::new(stream, StreamParams::float(RATE, ChannelLayout::Mono))
            .unwrap_err();
        assert_eq!(
            err,
            MixError::UnsupportedSampleFormat {
                format: SampleFormat::S16LE
            }
        );
    }

    #[test]
    fn test_rejects_rate_mismatch() {
        let err = ChannelMixer::new(
            StreamParams::float(44100, ChannelLayout::Stereo),
            StreamParams::float(48000, ChannelLayout::Mono),
        )
        .unwrap_err();
        assert_eq!(err.code(), "MIX_004");
    }

    #[test]
    fn test_rejects_downmix_from_unsupported() {
        let err = ChannelMixer::new(
            StreamParams::unsupported(RATE, 4),
            StreamParams::float(RATE, ChannelLayout::Stereo),
        )
        .unwrap_err();
        assert_eq!(err, MixError::UnsupportedInputLayout);
    }

    #[test]
    fn test_rejects_unsupported_to_narrower_unsupported() {
        let err = ChannelMixer::new(
            StreamParams::unsupported(RATE, 4),
            StreamParams::unsupported(RATE, 2),
        )
        .unwrap_err();
        assert_eq!(err, MixError::UnsupportedInputLayout);
    }

    #[test]
    fn test_upmix_from_unsupported_is_allowed() {
        let m = ChannelMixer::new(
            StreamParams::unsupported(RATE, 1),
            StreamParams::float(RATE, ChannelLayout::Stereo),
        )
        .unwrap();
        assert_eq!(m.operation(), MixOperation::Upmix);
    }

    #[test]
    fn test_rejects_misaligned_input() {
        let m = mixer(ChannelLayout::Stereo, ChannelLayout::Mono);
        let mut output = [0.0f32; 1];
        let err = m.process(&[1.0, 2.0, 3.0], &mut output).unwrap_err();
        assert_eq!(
            err,
            MixError::MisalignedBuffer {
                len: 3,
                channels: 2
            }
        );
    }

    #[test]
    fn test_rejects_wrong_output_size() {
        let m = mixer(ChannelLayout::Stereo, ChannelLayout::Mono);
        let mut output = [0.0f32; 3];
        let err = m.process(&[1.0, 2.0, 3.0, 4.0], &mut output).unwrap_err();
        assert_eq!(
            err,
            MixError::OutputSizeMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let m = mixer(ChannelLayout::ThreeF2Lfe, ChannelLayout::Mono);
        let (output, report) = m.process_to_vec(&[]).unwrap();
        assert!(output.is_empty());
        assert_eq!(report.frames, 0);
    }

    #[test]
    fn test_report_serializes_without_empty_method() {
        let report = MixReport {
            frames: 4,
            operation: MixOperation::Upmix,
            method: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"frames":4,"operation":"upmix"}"#);
    }
}
