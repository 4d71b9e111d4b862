//! Boundary normalisation for colors handed in from outside the core.
//!
//! An external color may not expose channel data at all (pattern-backed or
//! unresolved dynamic colors). Conversions at this boundary therefore return
//! `Option`, and callers substitute a placeholder via [`display_or`].

use super::format::ColorFormat;
use super::value::Color;

/// A color as received from an external source.
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalColor {
    /// Raw channel components: `[r, g, b]` or `[r, g, b, a]`.
    Components(Vec<f64>),
    /// A color with no extractable channel data, described by its source.
    Pattern(String),
}

impl From<Color> for ExternalColor {
    fn from(color: Color) -> Self {
        ExternalColor::Components(vec![color.r, color.g, color.b, color.a])
    }
}

impl ExternalColor {
    /// Normalises into a [`Color`].
    ///
    /// Requires at least three components; alpha defaults to 1.0 when absent.
    pub fn resolve(&self) -> Option<Color> {
        match self {
            ExternalColor::Components(c) if c.len() >= 3 => {
                let a = c.get(3).copied().unwrap_or(1.0);
                Some(Color::new(c[0], c[1], c[2], a))
            }
            ExternalColor::Components(c) => {
                log::debug!("External color has only {} component(s)", c.len());
                None
            }
            ExternalColor::Pattern(source) => {
                log::debug!("External color '{}' has no channel data", source);
                None
            }
        }
    }

    pub fn to_hex(&self) -> Option<String> {
        self.resolve().map(|c| c.to_hex())
    }

    pub fn to_rgb_string(&self) -> Option<String> {
        self.resolve().map(|c| c.to_rgb_string())
    }

    pub fn to_hsl_string(&self) -> Option<String> {
        self.resolve().map(|c| c.to_hsl_string())
    }

    pub fn to_cmyk_string(&self) -> Option<String> {
        self.resolve().map(|c| c.to_cmyk_string())
    }

    /// Renders in `format`, if channel data is available.
    pub fn render(&self, format: ColorFormat) -> Option<String> {
        self.resolve().map(|c| format.render(&c))
    }

    /// Adjusts a resolvable color; anything else is returned unchanged.
    pub fn adjust(&self, percentage: f64) -> ExternalColor {
        match self.resolve() {
            Some(color) => color.adjust(percentage).into(),
            None => self.clone(),
        }
    }

    pub fn lighter(&self, percentage: f64) -> ExternalColor {
        self.adjust(percentage.abs())
    }

    pub fn darker(&self, percentage: f64) -> ExternalColor {
        self.adjust(-percentage.abs())
    }
}

/// Returns the value or the placeholder when no textual representation exists.
pub fn display_or(value: Option<String>, placeholder: &str) -> String {
    value.unwrap_or_else(|| placeholder.to_string())
}
