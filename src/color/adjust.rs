//! Lighten/darken adjustments and the shade strip.

use super::value::Color;

/// Default amount used by [`Color::lighter`] and [`Color::darker`] callers.
pub const DEFAULT_ADJUST_AMOUNT: f64 = 0.2;

/// Number of swatches on each side of the current color in the shade strip.
pub const DEFAULT_SHADE_STEPS: u32 = 4;

/// Channel offset between neighbouring shade-strip swatches.
pub const DEFAULT_SHADE_STEP: f64 = 0.1;

impl Color {
    /// Adds `percentage` to red, green and blue, clamping each to 0.0-1.0.
    ///
    /// Alpha passes through unchanged. Negative percentages darken.
    pub fn adjust(&self, percentage: f64) -> Color {
        Color {
            r: (self.r + percentage).clamp(0.0, 1.0),
            g: (self.g + percentage).clamp(0.0, 1.0),
            b: (self.b + percentage).clamp(0.0, 1.0),
            a: self.a,
        }
    }

    /// Lightens by `|percentage|`.
    pub fn lighter(&self, percentage: f64) -> Color {
        self.adjust(percentage.abs())
    }

    /// Darkens by `|percentage|`.
    pub fn darker(&self, percentage: f64) -> Color {
        self.adjust(-percentage.abs())
    }

    /// Builds the shade/tint strip around this color.
    ///
    /// Returns `2 * steps + 1` colors adjusted by `i * step` for `i` in
    /// `-steps..=steps`, darkest first. The middle entry is `self.adjust(0.0)`.
    pub fn shade_strip(&self, steps: u32, step: f64) -> Vec<Color> {
        let steps = steps as i64;
        (-steps..=steps)
            .map(|i| self.adjust(i as f64 * step))
            .collect()
    }
}
