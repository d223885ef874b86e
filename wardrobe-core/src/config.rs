use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// City used when nothing has been stored yet.
pub const DEFAULT_CITY: &str = "London";

/// Preferences stored on disk: the OpenWeather API key and the last city
/// that successfully resolved to a weather reading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Preferences {
    pub api_key: Option<String>,
    pub last_city: Option<String>,
}

impl Preferences {
    /// API key, or an error with a hint on how to configure one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `wardrobe configure` and enter your OpenWeather API key."
            )
        })
    }

    /// Last remembered city, or the built-in default.
    pub fn city_or_default(&self) -> &str {
        self.last_city.as_deref().unwrap_or(DEFAULT_CITY)
    }

    pub fn remember_city(&mut self, city: &str) {
        self.last_city = Some(city.to_string());
    }

    /// Load preferences from disk, or return an empty default if the file
    /// doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read preferences file: {}", path.display()))?;

        let prefs: Preferences = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences file: {}", path.display()))?;

        Ok(prefs)
    }

    /// Save preferences to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize preferences to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write preferences file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the preferences file.
    pub fn file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-wardrobe", "wardrobe")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("preferences.toml"))
    }
}
