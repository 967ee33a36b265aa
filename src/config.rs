//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::{is_valid_hex, DisplayFormat, Theme};

/// Theme used when the store holds no saved preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Follow the OS theme (dark/light)
    #[default]
    Auto,
    /// Start in dark theme
    Dark,
    /// Start in light theme
    Light,
}

impl ThemeMode {
    /// Resolves to a concrete theme, asking the OS when set to `Auto`.
    #[must_use]
    pub fn resolve(self) -> Theme {
        match self {
            Self::Dark => Theme::Dark,
            Self::Light => Theme::Light,
            Self::Auto => match dark_light::detect() {
                Ok(dark_light::Mode::Dark) => Theme::Dark,
                // Unspecified or undetectable falls back to the light default
                Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => {
                    Theme::Light
                }
            },
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// JSON data file backing the key-value store (history, palettes, preferences).
    /// Defaults to `data.json` next to `config.toml`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme used until the user toggles one
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Format used when a command prints a single color
    #[serde(default)]
    pub default_format: DisplayFormat,
    /// Color selected when nothing has been picked yet
    #[serde(default = "default_initial_color")]
    pub initial_color: String,
}

fn default_initial_color() -> String {
    "#ff0000".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            default_format: DisplayFormat::default(),
            initial_color: default_initial_color(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Key used for the color in Tailwind snippets
    #[serde(default = "default_tailwind_name")]
    pub tailwind_name: String,
}

fn default_tailwind_name() -> String {
    "primary".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tailwind_name: default_tailwind_name(),
        }
    }
}

/// True for a non-empty key of letters, digits, `-` or `_`.
#[must_use]
pub fn is_valid_color_key(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Huepick/config.toml`
/// - macOS: `~/Library/Application Support/Huepick/config.toml`
/// - Windows: `%APPDATA%\Huepick\config.toml`
///
/// `HUEPICK_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - `initial_color` must be `#RRGGBB`
/// - `tailwind_name` must be non-empty and contain only letters, digits, `-` or `_`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// - Linux: `~/.config/Huepick/`
    /// - macOS: `~/Library/Application Support/Huepick/`
    /// - Windows: `%APPDATA%\Huepick\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path of the data file, honoring `paths.data_file`.
    pub fn data_file_path(&self) -> Result<PathBuf> {
        match &self.paths.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("data.json")),
        }
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !is_valid_hex(&self.ui.initial_color) {
            anyhow::bail!(
                "Invalid initial color '{}': expected #RRGGBB",
                self.ui.initial_color
            );
        }

        let name = &self.export.tailwind_name;
        if !is_valid_color_key(name) {
            anyhow::bail!(
                "Invalid Tailwind color name '{name}': use letters, digits, '-' or '_'"
            );
        }

        Ok(())
    }
}
