//! RGBA color type and predefined palette constants.

/// Represents an RGBA color with floating-point components.
///
/// All components are nominally in the range 0.0 (minimum) to 1.0 (maximum).
/// Construction does not validate; every color produced by an adjustment is
/// clamped back into range.
///
/// # Examples
///
/// ```
/// use colorpick::color::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
/// let semi_transparent_blue = Color::new(0.0, 0.0, 1.0, 0.5);
/// assert_eq!(red.to_hex(), "#FF0000");
/// assert_eq!(semi_transparent_blue.a, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Default for Color {
    fn default() -> Self {
        WHITE
    }
}

impl Color {
    /// Creates a new color from RGBA components.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates an opaque color from 8-bit channels (0-255).
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Returns the 8-bit channel triplet using the same rounding as [`Color::to_hex`].
    pub fn to_rgb8(&self) -> [u8; 3] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        ]
    }
}

/// Scales a channel to 0-255, rounding half away from zero.
pub(crate) fn channel_to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

// ============================================================================
// Predefined Color Constants (picker starter palette)
// ============================================================================

/// Predefined white color (R=1.0, G=1.0, B=1.0)
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color (R=0.0, G=0.0, B=0.0)
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined red color (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined green color (R=0.0, G=1.0, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined blue color (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined orange color (R=1.0, G=0.5, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 0.5,
    b: 0.0,
    a: 1.0,
};

/// Predefined purple color (R=0.5, G=0.0, B=0.5)
pub const PURPLE: Color = Color {
    r: 0.5,
    g: 0.0,
    b: 0.5,
    a: 1.0,
};

/// Predefined pink color (R=1.0, G=0.75, B=0.75)
pub const PINK: Color = Color {
    r: 1.0,
    g: 0.75,
    b: 0.75,
    a: 1.0,
};

/// Predefined yellow color (R=1.0, G=1.0, B=0.0)
pub const YELLOW: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

/// Predefined gray color (R=0.5, G=0.5, B=0.5)
pub const GRAY: Color = Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// Starter palette shown in the history before the user picks anything.
pub const STARTER_PALETTE: [Color; 8] = [RED, GREEN, BLUE, ORANGE, PURPLE, PINK, YELLOW, GRAY];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_round_trips_exact_multiples() {
        for value in [0u8, 1, 17, 127, 128, 200, 254, 255] {
            let color = Color::from_rgb8(value, 255 - value, value / 2);
            assert_eq!(color.to_rgb8(), [value, 255 - value, value / 2]);
        }
    }

    #[test]
    fn channel_to_byte_rounds_half_away_from_zero_and_clamps() {
        assert_eq!(channel_to_byte(0.5), 128); // 127.5 -> 128
        assert_eq!(channel_to_byte(1.5), 255);
        assert_eq!(channel_to_byte(-0.3), 0);
    }

    #[test]
    fn default_is_opaque_white() {
        assert_eq!(Color::default(), WHITE);
    }
}
