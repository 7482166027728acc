use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use promptly_core::{ApiKey, KeyStore, SettingsManager};

#[derive(Args, Debug)]
pub struct KeyArgs {
    #[command(subcommand)]
    command: KeyCommand,
}

#[derive(Subcommand, Debug)]
enum KeyCommand {
    /// Store an API key in the settings file
    Set {
        /// The key value; prompted for when omitted
        key: Option<String>,
    },
    /// Show where the active key comes from
    Show,
    /// Remove the stored key
    Clear,
}

pub fn run(args: KeyArgs) -> Result<()> {
    let settings_manager = SettingsManager::new()?;

    match args.command {
        KeyCommand::Set { key } => set_key(&settings_manager, key),
        KeyCommand::Show => show_key(&settings_manager),
        KeyCommand::Clear => clear_key(&settings_manager),
    }
}

fn set_key(settings_manager: &SettingsManager, key: Option<String>) -> Result<()> {
    let raw = match key {
        Some(key) => key,
        None => prompt_for_key()?,
    };

    let key = ApiKey::new(&raw).context("The key cannot be empty")?;

    settings_manager.update_setting(|settings| {
        settings.api_key = Some(key.reveal().to_string());
    });
    settings_manager.save()?;

    println!(
        "Stored key {} in {:?}",
        key.masked(),
        settings_manager.path()
    );
    Ok(())
}

fn prompt_for_key() -> Result<String> {
    print!("Gemini API key: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn show_key(settings_manager: &SettingsManager) -> Result<()> {
    let settings = settings_manager.settings();
    let stored = settings.api_key.as_deref().and_then(ApiKey::new);

    let mut keys = KeyStore::new();
    match keys.resolve(settings.api_key.as_deref()) {
        Some(key) => {
            let source = if stored.is_some() {
                format!("settings file {:?}", settings_manager.path())
            } else {
                "environment".to_string()
            };
            println!("Active key: {} (from {source})", key.masked());
        }
        None => {
            println!("No API key configured.");
            println!("Set GEMINI_API_KEY, or store one with `promptly key set`.");
        }
    }
    Ok(())
}

fn clear_key(settings_manager: &SettingsManager) -> Result<()> {
    settings_manager.update_setting(|settings| settings.api_key = None);
    settings_manager.save()?;

    println!("Stored key removed. Environment variables still apply if set.");
    Ok(())
}
