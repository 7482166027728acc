pub mod decode;
#[cfg(feature = "playback")]
pub mod playback;

pub use decode::{
    decode_base64, decode_samples, AudioData, DecodeError, DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE,
};
#[cfg(feature = "playback")]
pub use playback::{AudioPlayback, AudioPlayer};
