use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use promptly_core::audio::{self, AudioData, DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE};
use promptly_core::{catalog, ExecutionResult, GeminiClient, KeyStore, SettingsManager};
use tracing::info;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Tool identifier, as shown by `promptly list`
    tool: String,

    /// The prompt text; read from stdin when omitted
    prompt: Option<String>,

    /// Read the prompt from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "prompt")]
    file: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Write decoded audio to a WAV file
    #[arg(long, value_name = "PATH")]
    audio_out: Option<PathBuf>,

    /// Skip audio playback
    #[arg(long)]
    no_play: bool,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let Some(tool) = catalog::find(&args.tool) else {
        return Err(anyhow!(
            "unknown tool '{}'; run `promptly list` to see what is available",
            args.tool
        ));
    };

    let prompt = read_prompt(&args)?;
    if prompt.trim().is_empty() {
        return Err(anyhow!("the prompt is empty"));
    }

    let settings_manager = SettingsManager::new()?;
    let settings = settings_manager.settings();

    let mut keys = KeyStore::new();
    keys.resolve(settings.api_key.as_deref());

    let mut client = GeminiClient::new(settings.request_timeout());
    if let Some(base_url) = &settings.api_base_url {
        client = client.with_base_url(base_url.clone());
    }

    let spinner = start_spinner(&args, tool.name);
    let result = client.execute(tool, &prompt, keys.current()).await;
    spinner.finish_and_clear();

    if let Some(error) = &result.error {
        if error.is_auth_failure() {
            keys.invalidate();
            if settings.api_key.is_some() {
                settings_manager.update_setting(|settings| settings.api_key = None);
                settings_manager.save()?;
            }
            eprintln!("The provider rejected the API key; the stored key has been cleared.");
            eprintln!("Store a fresh one with `promptly key set` or set GEMINI_API_KEY.");
        }

        if args.json {
            print_json(&result)?;
        }
        return Err(anyhow!("{error}"));
    }

    info!(tool = tool.id, "execution succeeded");

    if args.json {
        print_json(&result)?;
    } else if !result.content.is_empty() {
        println!("{}", result.content);
    }

    if let Some(encoded) = &result.audio_data {
        handle_audio(encoded, &args).await?;
    } else if args.audio_out.is_some() {
        eprintln!("No audio in the response; nothing written.");
    }

    Ok(())
}

fn read_prompt(args: &RunArgs) -> Result<String> {
    if let Some(prompt) = &args.prompt {
        return Ok(prompt.clone());
    }

    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read prompt from {path:?}"));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(anyhow!(
            "no prompt given; pass one as an argument, via --file, or on stdin"
        ));
    }

    let mut prompt = String::new();
    stdin.read_to_string(&mut prompt)?;
    Ok(prompt)
}

fn start_spinner(args: &RunArgs, tool_name: &str) -> ProgressBar {
    if args.json || !std::io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid spinner template"),
    );
    spinner.set_message(format!("Running {tool_name}..."));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_json(result: &ExecutionResult) -> Result<()> {
    let value = serde_json::json!({
        "content": result.content,
        "audioData": result.audio_data,
        "error": result.error.as_ref().map(|error| error.to_string()),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

async fn handle_audio(encoded: &str, args: &RunArgs) -> Result<()> {
    let bytes = audio::decode_base64(encoded).context("Failed to decode the audio payload")?;
    let audio = tokio::task::spawn_blocking(move || {
        audio::decode_samples(&bytes, DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS)
    })
    .await?;

    info!(
        frames = audio.frames(),
        secs = audio.duration_secs(),
        "decoded audio payload"
    );

    if let Some(path) = &args.audio_out {
        write_wav(path, &audio)?;
        println!("Audio written to {}", path.display());
    }

    if !args.no_play {
        play(&audio).await?;
    }

    Ok(())
}

fn write_wav(path: &Path, audio: &AudioData) -> Result<()> {
    let spec = hound::WavSpec {
        channels: audio.channels,
        sample_rate: audio.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    for &sample in &audio.samples {
        let clamped = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
        writer.write_sample(clamped)?;
    }
    writer.finalize()?;

    Ok(())
}

#[cfg(feature = "playback")]
async fn play(audio: &AudioData) -> Result<()> {
    use promptly_core::audio::AudioPlayer;

    let player = AudioPlayer::new()?;
    let playback = player.play(audio)?;
    playback.wait().await;
    Ok(())
}

#[cfg(not(feature = "playback"))]
async fn play(audio: &AudioData) -> Result<()> {
    eprintln!(
        "Decoded {:.1}s of audio. Rebuild with --features playback to hear it, or pass --audio-out to save it.",
        audio.duration_secs()
    );
    Ok(())
}
