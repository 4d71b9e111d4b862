//! Configuration file support for colorpick.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/colorpick/config.toml`. Settings include the default color,
//! adjustment amounts, shade strip layout, history size and clipboard behaviour.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{AdjustConfig, ClipboardConfig, HistoryConfig, PickerConfig, ShadesConfig};

use crate::history::ColorHistory;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [picker]
/// default_color = "orange"
/// placeholder = "N/A"
///
/// [adjust]
/// amount = 0.2
///
/// [shades]
/// steps = 4
/// step = 0.1
///
/// [history]
/// capacity = 20
/// seed_palette = true
///
/// [clipboard]
/// copy_notice_ms = 2000
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Picker defaults (initial color, placeholder text)
    #[serde(default)]
    pub picker: PickerConfig,

    /// Lighten/darken settings
    #[serde(default)]
    pub adjust: AdjustConfig,

    /// Shade strip layout
    #[serde(default)]
    pub shades: ShadesConfig,

    /// Recent color history
    #[serde(default)]
    pub history: HistoryConfig,

    /// Clipboard behaviour
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `adjust.amount`: 0.0 - 1.0
    /// - `shades.steps`: 1 - 10
    /// - `shades.step`: 0.01 - 1.0
    /// - `history.capacity`: 1 - 100
    /// - `clipboard.copy_notice_ms`: 100 - 60000
    fn validate_and_clamp(&mut self) {
        if !(0.0..=1.0).contains(&self.adjust.amount) {
            log::warn!(
                "Invalid adjust amount {:.3}, clamping to 0.0-1.0 range",
                self.adjust.amount
            );
            self.adjust.amount = if self.adjust.amount.is_nan() {
                crate::color::DEFAULT_ADJUST_AMOUNT
            } else {
                self.adjust.amount.clamp(0.0, 1.0)
            };
        }

        if !(1..=10).contains(&self.shades.steps) {
            log::warn!(
                "Invalid shades steps {}, clamping to 1-10 range",
                self.shades.steps
            );
            self.shades.steps = self.shades.steps.clamp(1, 10);
        }

        if !(0.01..=1.0).contains(&self.shades.step) {
            log::warn!(
                "Invalid shades step {:.3}, clamping to 0.01-1.0 range",
                self.shades.step
            );
            self.shades.step = if self.shades.step.is_nan() {
                crate::color::DEFAULT_SHADE_STEP
            } else {
                self.shades.step.clamp(0.01, 1.0)
            };
        }

        if !(1..=100).contains(&self.history.capacity) {
            log::warn!(
                "Invalid history capacity {}, clamping to 1-100 range",
                self.history.capacity
            );
            self.history.capacity = self.history.capacity.clamp(1, 100);
        }

        if !(100..=60_000).contains(&self.clipboard.copy_notice_ms) {
            log::warn!(
                "Invalid copy_notice_ms {}, clamping to 100-60000 range",
                self.clipboard.copy_notice_ms
            );
            self.clipboard.copy_notice_ms = self.clipboard.copy_notice_ms.clamp(100, 60_000);
        }

        if self.picker.placeholder.trim().is_empty() {
            log::warn!("Empty placeholder, falling back to 'N/A'");
            self.picker.placeholder = "N/A".to_string();
        }
    }

    /// Builds an empty or palette-seeded history sized by the config.
    pub fn new_history(&self) -> ColorHistory {
        if self.history.seed_palette {
            ColorHistory::seeded(self.history.capacity)
        } else {
            ColorHistory::with_capacity(self.history.capacity)
        }
    }

    /// Copy notice duration.
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.clipboard.copy_notice_ms)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/colorpick/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("colorpick");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it doesn't exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory
    /// and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}
