//! Textual color representations (HEX, RGB, HSL, CMYK).

use super::value::{Color, channel_to_byte};

/// The four text formats shown by the picker, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ColorFormat {
    /// `#RRGGBB`
    Hex,
    /// `rgb(R, G, B)`
    Rgb,
    /// `hsl(H, S%, L%)`
    Hsl,
    /// `cmyk(C%, M%, Y%, K%)`
    Cmyk,
}

impl ColorFormat {
    /// Every format, in the order the picker lists them.
    pub const ALL: [ColorFormat; 4] = [Self::Hex, Self::Rgb, Self::Hsl, Self::Cmyk];

    /// Short row label ("HEX", "RGB", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Cmyk => "CMYK",
        }
    }

    /// Renders `color` in this format.
    pub fn render(&self, color: &Color) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Rgb => color.to_rgb_string(),
            Self::Hsl => color.to_hsl_string(),
            Self::Cmyk => color.to_cmyk_string(),
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rounds to the nearest integer, ties away from zero.
fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

impl Color {
    /// Formats the color as `#RRGGBB` (uppercase, alpha ignored).
    ///
    /// Channels are scaled by 255, rounded half away from zero and clamped to 0-255.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b)
        )
    }

    /// Formats the color as `rgb(R, G, B)` (alpha ignored).
    ///
    /// Unlike [`Color::to_hex`], channels are scaled by 255 and truncated toward
    /// zero, so `#808080` (0.5 gray) reads back as `rgb(127, 127, 127)`.
    pub fn to_rgb_string(&self) -> String {
        let r = (self.r * 255.0) as i64;
        let g = (self.g * 255.0) as i64;
        let b = (self.b * 255.0) as i64;

        format!("rgb({}, {}, {})", r, g, b)
    }

    /// Returns `(hue, saturation, lightness)`, each in 0.0-1.0.
    ///
    /// Achromatic colors report hue and saturation 0. When two channels tie for
    /// the maximum, red wins over green and green over blue.
    pub fn to_hsl(&self) -> (f64, f64, f64) {
        let (r, g, b) = (self.r, self.g, self.b);
        let max_v = r.max(g).max(b);
        let min_v = r.min(g).min(b);
        let l = (max_v + min_v) / 2.0;

        if max_v == min_v {
            return (0.0, 0.0, l);
        }

        let d = max_v - min_v;
        let s = if l > 0.5 {
            d / (2.0 - max_v - min_v)
        } else {
            d / (max_v + min_v)
        };

        let h = if max_v == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max_v == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s, l)
    }

    /// Formats the color as `hsl(H, S%, L%)` with whole degrees and percents.
    pub fn to_hsl_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        let hue = (h * 360.0).round() as i64;

        format!("hsl({}, {}%, {}%)", hue, percent(s), percent(l))
    }

    /// Formats the color as `cmyk(C%, M%, Y%, K%)`.
    ///
    /// Pure black short-circuits to `cmyk(0%, 0%, 0%, 100%)`.
    pub fn to_cmyk_string(&self) -> String {
        let k = 1.0 - self.r.max(self.g).max(self.b);
        if k == 1.0 {
            return "cmyk(0%, 0%, 0%, 100%)".to_string();
        }

        let c = (1.0 - self.r - k) / (1.0 - k);
        let m = (1.0 - self.g - k) / (1.0 - k);
        let y = (1.0 - self.b - k) / (1.0 - k);

        format!(
            "cmyk({}%, {}%, {}%, {}%)",
            percent(c),
            percent(m),
            percent(y),
            percent(k)
        )
    }
}
