//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::color::{DEFAULT_ADJUST_AMOUNT, DEFAULT_SHADE_STEP, DEFAULT_SHADE_STEPS};
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::picker::DEFAULT_NOTICE_DURATION;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Picker defaults.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PickerConfig {
    /// Color used when none is given on the command line - a palette name, hex code,
    /// rgb() function, or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Text shown in place of a format that cannot be computed
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            placeholder: default_placeholder(),
        }
    }
}

/// Lighten/darken settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AdjustConfig {
    /// Amount used by `--lighter`/`--darker` without an explicit value (valid range: 0.0 - 1.0)
    #[serde(default = "default_adjust_amount")]
    pub amount: f64,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            amount: default_adjust_amount(),
        }
    }
}

/// Shade strip settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ShadesConfig {
    /// Swatches on each side of the current color (valid range: 1 - 10)
    #[serde(default = "default_shade_steps")]
    pub steps: u32,

    /// Channel offset between neighbouring swatches (valid range: 0.01 - 1.0)
    #[serde(default = "default_shade_step")]
    pub step: f64,
}

impl Default for ShadesConfig {
    fn default() -> Self {
        Self {
            steps: default_shade_steps(),
            step: default_shade_step(),
        }
    }
}

/// Recent color history settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of remembered colors (valid range: 1 - 100)
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,

    /// Start the history with the built-in palette
    #[serde(default = "default_seed_palette")]
    pub seed_palette: bool,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
            seed_palette: default_seed_palette(),
        }
    }
}

/// Clipboard settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ClipboardConfig {
    /// How long the "Copied" notice stays visible, in milliseconds
    #[serde(default = "default_copy_notice_ms")]
    pub copy_notice_ms: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            copy_notice_ms: default_copy_notice_ms(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_placeholder() -> String {
    "N/A".to_string()
}

fn default_adjust_amount() -> f64 {
    DEFAULT_ADJUST_AMOUNT
}

fn default_shade_steps() -> u32 {
    DEFAULT_SHADE_STEPS
}

fn default_shade_step() -> f64 {
    DEFAULT_SHADE_STEP
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_seed_palette() -> bool {
    true
}

fn default_copy_notice_ms() -> u64 {
    DEFAULT_NOTICE_DURATION.as_millis() as u64
}
