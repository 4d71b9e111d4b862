//! Palette name lookups.
//!
//! Maps the picker's starter palette to and from human-readable names.

use crate::color::{BLACK, BLUE, Color, GRAY, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};

/// Named palette entries in lookup order.
const PALETTE: [(&str, Color); 10] = [
    ("White", WHITE),
    ("Black", BLACK),
    ("Red", RED),
    ("Green", GREEN),
    ("Blue", BLUE),
    ("Orange", ORANGE),
    ("Purple", PURPLE),
    ("Pink", PINK),
    ("Yellow", YELLOW),
    ("Gray", GRAY),
];

/// Maps color name strings to Color values.
///
/// Used by the parser and the configuration system.
///
/// # Supported Names (case-insensitive)
/// - "white", "black", "red", "green", "blue", "orange", "purple", "pink",
///   "yellow", "gray" (also "grey")
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim().to_lowercase();
    let name = if name == "grey" { "gray" } else { name.as_str() };
    PALETTE
        .iter()
        .find(|(label, _)| label.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// Maps a Color value to its palette name.
///
/// Channels match when they are within 0.02 of the palette entry, so
/// `#808080` still reads as "Gray". Alpha is ignored.
///
/// # Returns
/// A static string with the color name, or "Custom" if the color doesn't
/// match any palette color.
pub fn color_to_name(color: &Color) -> &'static str {
    const TOLERANCE: f64 = 0.02;
    PALETTE
        .iter()
        .find(|(_, entry)| {
            (entry.r - color.r).abs() <= TOLERANCE
                && (entry.g - color.g).abs() <= TOLERANCE
                && (entry.b - color.b).abs() <= TOLERANCE
        })
        .map(|(label, _)| *label)
        .unwrap_or("Custom")
}
