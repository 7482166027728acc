use crate::settings::config::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Loads, shares, and persists [`Settings`]. Cloning hands out the same
/// underlying instance, so every part of the process sees one consistent
/// view of the configuration.
#[derive(Clone)]
pub struct SettingsManager {
    settings_path: PathBuf,
    inner: Arc<Mutex<Settings>>,
}

impl SettingsManager {
    /// Create a settings manager at the default location.
    pub fn new() -> Result<Self> {
        let settings_path = Self::default_settings_path()?;

        if let Some(parent) = settings_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }

        Self::from_path(settings_path)
    }

    /// Create a settings manager from a specific path.
    pub fn from_path(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            let default_settings = Settings::default();
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {parent:?}"))?;
            }
            let contents = toml::to_string_pretty(&default_settings)
                .context("Failed to serialize default settings")?;
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write default settings to {path:?}"))?;
        }

        let loaded = Self::load_from_file_with_backup(&path)?;

        Ok(Self {
            settings_path: path,
            inner: Arc::new(Mutex::new(loaded)),
        })
    }

    /// The default settings path (~/.promptly/settings.toml).
    fn default_settings_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home.join(".promptly").join("settings.toml"))
    }

    /// Load settings from a TOML file, moving an unparseable file aside
    /// and starting over from defaults rather than refusing to run.
    fn load_from_file_with_backup(path: &Path) -> Result<Settings> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {path:?}"))?;

        match toml::from_str(&contents) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                let backup_path = path.with_extension("toml.backup");
                warn!(?backup_path, error = %e, "settings file is unreadable, moving it aside");
                fs::rename(path, &backup_path).with_context(|| {
                    format!("Failed to backup corrupted settings to {backup_path:?}")
                })?;

                let default_settings = Settings::default();
                let contents = toml::to_string_pretty(&default_settings)
                    .context("Failed to serialize default settings")?;
                fs::write(path, contents)
                    .with_context(|| format!("Failed to write default settings to {path:?}"))?;

                Ok(default_settings)
            }
        }
    }

    /// Get the in-memory settings.
    pub fn settings(&self) -> Settings {
        self.inner.lock().unwrap().clone()
    }

    /// Update in-memory settings with a closure. Nothing is written to
    /// disk until [`SettingsManager::save`] is called.
    pub fn update_setting<F>(&self, updater: F)
    where
        F: FnOnce(&mut Settings),
    {
        let mut guard = self.inner.lock().unwrap();
        updater(guard.deref_mut());
    }

    /// Save provided settings.
    pub fn save_settings(&self, settings: Settings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {parent:?}"))?;
        }

        let contents = toml::to_string_pretty(&settings).context("Failed to serialize settings")?;

        fs::write(&self.settings_path, contents)
            .with_context(|| format!("Failed to write settings to {:?}", self.settings_path))?;
        *self.inner.lock().unwrap() = settings;

        Ok(())
    }

    /// Explicitly persist in-memory settings to disk.
    pub fn save(&self) -> Result<()> {
        self.save_settings(self.settings())
    }

    /// Get the settings file path.
    pub fn path(&self) -> &Path {
        &self.settings_path
    }
}
