use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Forecast days requested when nothing is configured.
pub const DEFAULT_FORECAST_DAYS: u8 = 5;
/// The provider serves at most five forecast days.
pub const MAX_FORECAST_DAYS: u8 = 5;

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Location used when a command is invoked without one, e.g. "Milan"
    /// or "45.46,9.19".
    pub default_location: Option<String>,

    /// How many forecast days to request (1..=5).
    pub forecast_days: Option<u8>,
}

impl Config {
    /// Return the default location, or a hint-carrying error when none is
    /// configured.
    pub fn default_location(&self) -> Result<&str> {
        self.default_location.as_deref().ok_or_else(|| {
            anyhow!(
                "No location given and no default configured.\n\
                 Hint: run `wearcast configure` to set a default location."
            )
        })
    }

    pub fn set_default_location(&mut self, location: String) {
        self.default_location = Some(location);
    }

    /// Configured forecast length clamped to the provider's 1..=5 range.
    pub fn effective_forecast_days(&self) -> u8 {
        self.forecast_days
            .unwrap_or(DEFAULT_FORECAST_DAYS)
            .clamp(1, MAX_FORECAST_DAYS)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wearcast", "wearcast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
