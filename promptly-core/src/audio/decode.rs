//! Decoding for provider audio payloads.
//!
//! Payloads arrive base64-encoded. The decoded bytes are either a
//! self-describing container (WAV and friends) or headerless PCM16 at a
//! rate the caller asserts. The container probe runs first; every one of
//! its failures falls through to the PCM path, which cannot fail.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;
use tracing::debug;

/// Sample rate provider speech audio is produced at.
pub const DEFAULT_SAMPLE_RATE: u32 = 24_000;
/// Channel count of provider speech audio.
pub const DEFAULT_CHANNELS: u16 = 1;

/// Interleaved f32 samples with their playback metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioData {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl AudioData {
    /// Whole frames in the buffer.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f32 / self.sample_rate as f32
    }
}

/// Errors from the base64 layer. The sample decoder itself is total and
/// has no error type.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64 audio payload: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Decode the base64 audio payload carried in an execution result.
pub fn decode_base64(data: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(data)?)
}

/// Decode audio bytes into playable samples.
///
/// Container formats carry their own sample rate and channel layout and
/// win over the caller's parameters. Anything the probe rejects is
/// treated as raw little-endian PCM16 at `sample_rate`/`channels`.
pub fn decode_samples(bytes: &[u8], sample_rate: u32, channels: u16) -> AudioData {
    match decode_container(bytes) {
        Ok(audio) => {
            debug!(
                frames = audio.frames(),
                rate = audio.sample_rate,
                channels = audio.channels,
                "container decode succeeded"
            );
            audio
        }
        Err(e) => {
            debug!(error = %e, "container probe failed, treating bytes as raw pcm16");
            decode_pcm16(bytes, sample_rate, channels)
        }
    }
}

fn decode_container(bytes: &[u8]) -> Result<AudioData, SymphoniaError> {
    let source = Cursor::new(bytes.to_vec());
    let mss = MediaSourceStream::new(Box::new(source), Default::default());

    let probed = symphonia::default::get_probe().format(
        &Hint::new(),
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|track| track.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(SymphoniaError::Unsupported("no audio track"))?;

    let track_id = track.id;
    // The container must describe its own rate and layout, otherwise the
    // caller's PCM parameters are the better guess.
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(SymphoniaError::Unsupported("track missing sample rate"))?;
    let channels = track
        .codec_params
        .channels
        .map(|channels| channels.count())
        .ok_or(SymphoniaError::Unsupported("track missing channel layout"))?;

    let mut decoder =
        symphonia::default::get_codecs().make(&track.codec_params, &DecoderOptions::default())?;

    let mut samples = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => {
                decoder.reset();
                continue;
            }
            Err(e) => return Err(e),
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let needs_realloc = sample_buf
                    .as_ref()
                    .map_or(true, |buf| buf.capacity() < decoded.capacity() * channels);
                if needs_realloc {
                    sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, *decoded.spec()));
                }
                let buf = sample_buf.as_mut().expect("sample buffer was just allocated");
                buf.copy_interleaved_ref(decoded);
                samples.extend_from_slice(buf.samples());
            }
            Err(SymphoniaError::DecodeError(e)) => {
                debug!(error = %e, "skipping undecodable packet");
                continue;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(AudioData {
        samples,
        sample_rate,
        channels: channels as u16,
    })
}

/// Headerless little-endian PCM16. Total on any input: a trailing half
/// sample and a trailing partial frame are dropped, not errors.
fn decode_pcm16(bytes: &[u8], sample_rate: u32, channels: u16) -> AudioData {
    let channels = channels.max(1);

    let mut samples: Vec<f32> = bytes
        .chunks_exact(2)
        .map(|chunk| {
            let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
            sample as f32 / 32768.0
        })
        .collect();

    let whole_frames = samples.len() / channels as usize;
    samples.truncate(whole_frames * channels as usize);

    AudioData {
        samples,
        sample_rate,
        channels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pcm16_bytes(values: &[i16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(17)]
    #[case(1024)]
    fn base64_round_trips(#[case] len: usize) {
        let original: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let encoded = STANDARD.encode(&original);

        let decoded = decode_base64(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn malformed_base64_is_an_error() {
        let result = decode_base64("not!!valid@@base64");
        assert!(matches!(result, Err(DecodeError::Base64(_))));
    }

    #[test]
    fn pcm16_scales_against_32768() {
        let audio = decode_samples(&pcm16_bytes(&[16384]), DEFAULT_SAMPLE_RATE, 1);
        assert_eq!(audio.samples.len(), 1);
        assert!((audio.samples[0] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn pcm16_covers_the_full_signed_range() {
        let audio = decode_samples(
            &pcm16_bytes(&[i16::MIN, 0, i16::MAX]),
            DEFAULT_SAMPLE_RATE,
            1,
        );
        assert!((audio.samples[0] + 1.0).abs() < 1e-6);
        assert!(audio.samples[1].abs() < 1e-6);
        // i16::MAX lands just shy of 1.0.
        assert!(audio.samples[2] < 1.0);
        assert!((audio.samples[2] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn trailing_odd_byte_is_dropped() {
        // Five bytes mono: two whole samples, one dangling byte.
        let mut bytes = pcm16_bytes(&[1000, -1000]);
        bytes.push(0x7f);

        let audio = decode_samples(&bytes, DEFAULT_SAMPLE_RATE, 1);
        assert_eq!(audio.samples.len(), 2);
    }

    #[test]
    fn trailing_partial_frame_is_dropped_for_stereo() {
        // Three samples over two channels: one whole frame, one orphan.
        let bytes = pcm16_bytes(&[100, 200, 300]);

        let audio = decode_samples(&bytes, DEFAULT_SAMPLE_RATE, 2);
        assert_eq!(audio.samples.len(), 2);
        assert_eq!(audio.frames(), 1);
        assert_eq!(audio.channels, 2);
    }

    #[test]
    fn empty_input_decodes_to_silence() {
        let audio = decode_samples(&[], DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS);
        assert!(audio.samples.is_empty());
        assert_eq!(audio.sample_rate, DEFAULT_SAMPLE_RATE);
        assert_eq!(audio.frames(), 0);
        assert_eq!(audio.duration_secs(), 0.0);
    }

    #[test]
    fn zero_channels_is_clamped_to_mono() {
        let audio = decode_samples(&pcm16_bytes(&[1, 2, 3]), DEFAULT_SAMPLE_RATE, 0);
        assert_eq!(audio.channels, 1);
        assert_eq!(audio.samples.len(), 3);
    }

    #[test]
    fn caller_parameters_stick_to_the_pcm_path() {
        let audio = decode_samples(&pcm16_bytes(&[0; 48]), 16_000, 2);
        assert_eq!(audio.sample_rate, 16_000);
        assert_eq!(audio.channels, 2);
        assert_eq!(audio.frames(), 24);
    }

    #[test]
    fn wav_container_overrides_caller_parameters() {
        // An 8 kHz mono WAV decoded with 24 kHz asserted: the container's
        // own metadata must win.
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            for value in [16384i16, -16384, 0, 8192] {
                writer.write_sample(value).unwrap();
            }
            writer.finalize().unwrap();
        }
        let bytes = cursor.into_inner();

        let audio = decode_samples(&bytes, DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS);

        assert_eq!(audio.sample_rate, 8_000);
        assert_eq!(audio.channels, 1);
        assert_eq!(audio.samples.len(), 4);
        assert!((audio.samples[0] - 0.5).abs() < 1e-6);
        assert!((audio.samples[1] + 0.5).abs() < 1e-6);
    }

    #[test]
    fn stereo_wav_comes_back_interleaved() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
            // Left ramps up, right stays at zero.
            for frame in 0..4 {
                writer.write_sample((frame * 1000) as i16).unwrap();
                writer.write_sample(0i16).unwrap();
            }
            writer.finalize().unwrap();
        }
        let bytes = cursor.into_inner();

        let audio = decode_samples(&bytes, DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS);

        assert_eq!(audio.channels, 2);
        assert_eq!(audio.frames(), 4);
        for frame in 0..4 {
            let left = audio.samples[frame * 2];
            let right = audio.samples[frame * 2 + 1];
            assert!((left - (frame as f32 * 1000.0) / 32768.0).abs() < 1e-6);
            assert!(right.abs() < 1e-6);
        }
    }

    #[test]
    fn garbage_bytes_fall_back_to_pcm() {
        // Looks like nothing symphonia knows; every 2 bytes become one
        // sample.
        let bytes: Vec<u8> = (0u16..100).flat_map(|i| (i as i16).to_le_bytes()).collect();

        let audio = decode_samples(&bytes, DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS);
        assert_eq!(audio.samples.len(), 100);
        assert_eq!(audio.sample_rate, DEFAULT_SAMPLE_RATE);
    }
}
