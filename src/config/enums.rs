//! Configuration enum types.

use crate::color::{Color, WHITE};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either color text or RGB values.
///
/// # Examples
/// ```toml
/// # Palette name, hex code or rgb() function
/// default_color = "orange"
/// default_color = "#3366CC"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (white, black, red, green, blue, orange, purple, pink, yellow, gray),
    /// hex code or rgb()/rgba() function
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Text is parsed with the regular color parser. Unparseable text defaults to
    /// white with a warning. RGB arrays are converted from 0-255 range to 0.0-1.0
    /// range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(text) => text.parse::<Color>().unwrap_or_else(|err| {
                warn!("Invalid color '{}' ({}), using white", text, err);
                WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}
