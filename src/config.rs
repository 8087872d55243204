//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::compiler::SpecFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "STYLESPEC_CONFIG_DIR";

/// Default autosave debounce delay in milliseconds.
pub const DEFAULT_AUTOSAVE_DELAY_MS: u64 = 1500;

/// Spec export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Format used when `--format` is not given
    pub default_format: SpecFormat,
    /// Directory for generated files when `--output` is a bare file name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Autosave settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutosaveConfig {
    /// Debounce delay in milliseconds
    pub delay_ms: u64,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_AUTOSAVE_DELAY_MS,
        }
    }
}

impl AutosaveConfig {
    /// Debounce delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Randomizer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RandomizerConfig {
    /// Fixed seed for reproducible shuffles; entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/StyleSpec/config.toml`
/// - macOS: `~/Library/Application Support/StyleSpec/config.toml`
/// - Windows: `%APPDATA%\StyleSpec\config.toml`
///
/// `STYLESPEC_CONFIG_DIR` replaces the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Export settings
    pub export: ExportConfig,
    /// Autosave settings
    pub autosave: AutosaveConfig,
    /// Randomizer settings
    pub randomizer: RandomizerConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `STYLESPEC_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `StyleSpec`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("StyleSpec");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to load config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - autosave delay is non-zero
    /// - `output_dir`, if set, is not an existing regular file
    pub fn validate(&self) -> Result<()> {
        if self.autosave.delay_ms == 0 {
            anyhow::bail!("Autosave delay must be greater than 0 ms");
        }

        if let Some(dir) = &self.export.output_dir {
            if dir.is_file() {
                anyhow::bail!("Export output directory is a file: {}", dir.display());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching the process environment must not interleave
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.export.default_format, SpecFormat::Markdown);
        assert_eq!(config.autosave.delay_ms, 1500);
        assert_eq!(config.autosave.delay(), Duration::from_millis(1500));
        assert!(config.randomizer.seed.is_none());
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.autosave.delay_ms = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("greater than 0"));
    }

    #[test]
    fn test_config_validate_output_dir_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        let mut config = Config::new();
        config.export.output_dir = Some(file);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config = Config::from_toml("[export]\ndefault_format = \"css\"\n").unwrap();
        assert_eq!(config.export.default_format, SpecFormat::Css);
        assert_eq!(config.autosave.delay_ms, DEFAULT_AUTOSAVE_DELAY_MS);

        assert!(Config::from_toml("[autosave]\ndelay_ms = 0\n").is_err());
        assert!(Config::from_toml("[export]\ndefault_format = \"yaml\"\n").is_err());
    }

    #[test]
    fn test_config_save_and_load() {
        let _guard = ENV_LOCK.lock().unwrap();
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());

        assert!(!Config::exists());
        assert_eq!(Config::load().unwrap(), Config::default());

        let mut config = Config::new();
        config.export.default_format = SpecFormat::Json;
        config.autosave.delay_ms = 250;
        config.randomizer.seed = Some(42);
        config.save().unwrap();

        assert!(Config::exists());
        assert!(!temp_dir.path().join("config.toml.tmp").exists());
        assert_eq!(Config::load().unwrap(), config);

        std::env::remove_var(CONFIG_DIR_ENV);
    }
}
