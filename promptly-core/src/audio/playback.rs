//! Audio playback using cpal
//! Resamples from the decoded rate to the native device rate if needed

use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{
    Device, FromSample, SampleFormat, SizedSample, Stream, StreamConfig, SupportedStreamConfig,
};
use rubato::{FftFixedIn, Resampler};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::audio::decode::AudioData;

/// Plays decoded tool audio on the default output device.
pub struct AudioPlayer {
    device: Device,
    supported_config: SupportedStreamConfig,
}

/// Audio playback handle - dropping stops playback (RAII)
pub struct AudioPlayback {
    _stream: Stream,
    finished: Arc<AtomicBool>,
}

impl AudioPlayback {
    /// Check if playback has finished
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    /// Wait for playback to complete
    pub async fn wait(&self) {
        while !self.is_finished() {
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }
    }
}

impl AudioPlayer {
    /// Create a new audio player using the default output device
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .context("no output device available")?;

        let supported_config = device
            .default_output_config()
            .context("failed to get default output config")?;

        Ok(Self {
            device,
            supported_config,
        })
    }

    /// Play audio data, returns handle that stops on drop
    pub fn play(&self, audio: &AudioData) -> Result<AudioPlayback> {
        let native_rate = self.supported_config.sample_rate().0;
        let native_channels = self.supported_config.channels() as usize;
        let sample_format = self.supported_config.sample_format();
        let config: StreamConfig = self.supported_config.clone().into();

        // The pipeline runs mono: multi-channel input is averaged down,
        // resampled once, then expanded to the device layout.
        let mono = downmix_to_mono(&audio.samples, audio.channels);
        let resampled = if audio.sample_rate == native_rate {
            mono
        } else {
            resample(&mono, audio.sample_rate, native_rate)?
        };

        let samples = if native_channels > 1 {
            expand_to_channels(&resampled, native_channels)
        } else {
            resampled
        };

        let samples = Arc::new(samples);
        let position = Arc::new(AtomicUsize::new(0));
        let finished = Arc::new(AtomicBool::new(false));

        let stream = match sample_format {
            SampleFormat::F32 => {
                self.build_stream::<f32>(&config, samples, position, finished.clone())?
            }
            SampleFormat::I16 => {
                self.build_stream::<i16>(&config, samples, position, finished.clone())?
            }
            format => anyhow::bail!("unsupported sample format: {:?}", format),
        };

        stream.play().context("failed to start playback stream")?;

        Ok(AudioPlayback {
            _stream: stream,
            finished,
        })
    }

    fn build_stream<T>(
        &self,
        config: &StreamConfig,
        samples: Arc<Vec<f32>>,
        position: Arc<AtomicUsize>,
        finished: Arc<AtomicBool>,
    ) -> Result<Stream>
    where
        T: SizedSample + FromSample<f32> + Default + Send + 'static,
    {
        self.device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    let pos = position.load(Ordering::SeqCst);
                    let remaining = samples.len().saturating_sub(pos);

                    if remaining == 0 {
                        data.fill(T::default());
                        finished.store(true, Ordering::SeqCst);
                        return;
                    }

                    let to_copy = remaining.min(data.len());
                    for (i, &sample) in samples[pos..pos + to_copy].iter().enumerate() {
                        data[i] = T::from_sample(sample);
                    }

                    if to_copy < data.len() {
                        data[to_copy..].fill(T::default());
                    }

                    position.store(pos + to_copy, Ordering::SeqCst);
                },
                move |err| {
                    tracing::error!(error = ?err, "playback stream error");
                },
                None,
            )
            .context("failed to build output stream")
    }
}

fn downmix_to_mono(samples: &[f32], channels: u16) -> Vec<f32> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks(channels as usize)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

fn resample(samples: &[f32], source_rate: u32, target_rate: u32) -> Result<Vec<f32>> {
    let chunk_size = 1024;
    let mut resampler =
        FftFixedIn::<f32>::new(source_rate as usize, target_rate as usize, chunk_size, 2, 1)
            .context("failed to create resampler")?;

    let mut output = Vec::new();
    let mut pos = 0;

    while pos < samples.len() {
        let frames_needed = resampler.input_frames_next();
        let end = (pos + frames_needed).min(samples.len());

        let mut input_chunk = samples[pos..end].to_vec();
        if input_chunk.len() < frames_needed {
            input_chunk.resize(frames_needed, 0.0);
        }

        let input = vec![input_chunk];
        match resampler.process(&input, None) {
            Ok(resampled) => {
                if let Some(chunk) = resampled.into_iter().next() {
                    output.extend(chunk);
                }
            }
            Err(e) => {
                anyhow::bail!("resampling failed: {:?}", e);
            }
        }

        pos = end;
        if end == samples.len() {
            break;
        }
    }

    Ok(output)
}

fn expand_to_channels(samples: &[f32], channels: usize) -> Vec<f32> {
    let mut output = Vec::with_capacity(samples.len() * channels);
    for &sample in samples {
        for _ in 0..channels {
            output.push(sample);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downmix_averages_each_frame() {
        let stereo = [1.0, 0.0, 0.5, 0.5, -1.0, 1.0];
        assert_eq!(downmix_to_mono(&stereo, 2), vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn downmix_passes_mono_through() {
        let mono = [0.25, -0.25];
        assert_eq!(downmix_to_mono(&mono, 1), mono.to_vec());
    }

    #[test]
    fn expand_duplicates_each_sample() {
        assert_eq!(
            expand_to_channels(&[0.1, 0.2], 2),
            vec![0.1, 0.1, 0.2, 0.2]
        );
    }
}
