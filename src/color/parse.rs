//! Parsing colors from user-supplied text.
//!
//! Accepted forms:
//! * `#RGB`, `#RRGGBB`, `#RRGGBBAA`
//! * `rgb(R, G, B)` with 0-255 channels, `rgba(R, G, B, A)` with alpha 0.0-1.0
//! * palette names (`red`, `orange`, `gray`, ...)
//! * comma-separated floats `r,g,b[,a]` in 0.0-1.0

use super::external::ExternalColor;
use super::value::Color;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while parsing color text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex length {0} (expected 3, 6 or 8 digits)")]
    InvalidLength(usize),

    #[error("invalid hex digits in '{0}'")]
    InvalidHex(String),

    #[error("invalid {0}() function: {1}")]
    InvalidFunction(&'static str, String),

    #[error("invalid component '{0}'")]
    InvalidComponent(String),

    #[error("component {0} out of range")]
    OutOfRange(f64),

    #[error("expected 3 or 4 components, got {0}")]
    ComponentCount(usize),

    #[error("unknown color name '{0}'")]
    UnknownName(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = input.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            return parse_rgb_function(args, "rgba");
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return parse_rgb_function(args, "rgb");
        }

        if input.contains(',') {
            let components = parse_components(input)?;
            return match components[..] {
                [r, g, b] => Ok(Color::rgb(r, g, b)),
                [r, g, b, a] => Ok(Color::new(r, g, b, a)),
                _ => Err(ColorParseError::ComponentCount(components.len())),
            };
        }

        crate::util::name_to_color(input)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }
}

/// Parses text into an [`ExternalColor`].
///
/// Float lists of up to four components are kept as given, so a short list
/// parses successfully but does not resolve to a [`Color`]. Longer lists are
/// rejected. Every other form is parsed as a [`Color`].
pub fn parse_external(input: &str) -> Result<ExternalColor, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.contains(',') && !trimmed.contains('(') {
        let components = parse_components(trimmed)?;
        if components.len() > 4 {
            return Err(ColorParseError::ComponentCount(components.len()));
        }
        return Ok(ExternalColor::Components(components));
    }
    trimmed.parse::<Color>().map(ExternalColor::from)
}

fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(hex.to_string()));
    }

    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|n| n * 17);
    let invalid = |_| ColorParseError::InvalidHex(hex.to_string());

    match hex.len() {
        3 => Ok(Color::from_rgb8(
            nibble(0).map_err(invalid)?,
            nibble(1).map_err(invalid)?,
            nibble(2).map_err(invalid)?,
        )),
        6 | 8 => {
            let mut color = Color::from_rgb8(
                byte(0).map_err(invalid)?,
                byte(2).map_err(invalid)?,
                byte(4).map_err(invalid)?,
            );
            if hex.len() == 8 {
                color.a = byte(6).map_err(invalid)? as f64 / 255.0;
            }
            Ok(color)
        }
        n => Err(ColorParseError::InvalidLength(n)),
    }
}

fn parse_rgb_function(args: &str, name: &'static str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if name == "rgba" { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::InvalidFunction(
            name,
            format!("expected {} arguments, got {}", expected, parts.len()),
        ));
    }

    let mut channels = [0.0; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value = parse_number(part)?;
        if !(0.0..=255.0).contains(&value) {
            return Err(ColorParseError::OutOfRange(value));
        }
        *slot = value / 255.0;
    }

    let alpha = match parts.get(3) {
        Some(part) => unit_component(part)?,
        None => 1.0,
    };

    Ok(Color::new(channels[0], channels[1], channels[2], alpha))
}

fn parse_components(input: &str) -> Result<Vec<f64>, ColorParseError> {
    input.split(',').map(|part| unit_component(part.trim())).collect()
}

fn unit_component(part: &str) -> Result<f64, ColorParseError> {
    let value = parse_number(part)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorParseError::OutOfRange(value));
    }
    Ok(value)
}

fn parse_number(part: &str) -> Result<f64, ColorParseError> {
    part.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorParseError::InvalidComponent(part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{GRAY, ORANGE, RED, WHITE};

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), RED);
        assert_eq!("#fff".parse::<Color>().unwrap(), WHITE);
        let translucent: Color = "#FF000080".parse().unwrap();
        assert_eq!(translucent.to_hex(), "#FF0000");
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn hex_round_trip_reproduces_integer_triplet() {
        for triplet in [[0u8, 0, 0], [1, 2, 3], [18, 52, 86], [171, 205, 239], [255, 254, 253]] {
            let color = Color::from_rgb8(triplet[0], triplet[1], triplet[2]);
            let decoded: Color = color.to_hex().parse().unwrap();
            assert_eq!(decoded.to_rgb8(), triplet);
        }
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidLength(5))
        );
        assert!(matches!(
            "#GG0000".parse::<Color>(),
            Err(ColorParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!("rgb(255, 0, 0)".parse::<Color>().unwrap(), RED);
        assert_eq!("RGB(255,255,255)".parse::<Color>().unwrap(), WHITE);
        let color: Color = "rgba(255, 128, 0, 0.5)".parse().unwrap();
        assert_eq!(color.to_hex(), "#FF8000");
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn rejects_bad_rgb_functions() {
        assert!(matches!(
            "rgb(1, 2)".parse::<Color>(),
            Err(ColorParseError::InvalidFunction("rgb", _))
        ));
        assert_eq!(
            "rgb(256, 0, 0)".parse::<Color>(),
            Err(ColorParseError::OutOfRange(256.0))
        );
        assert!(matches!(
            "rgb(red, 0, 0)".parse::<Color>(),
            Err(ColorParseError::InvalidComponent(_))
        ));
    }

    #[test]
    fn parses_names_and_float_lists() {
        assert_eq!("Orange".parse::<Color>().unwrap(), ORANGE);
        assert_eq!("0.5, 0.5, 0.5".parse::<Color>().unwrap(), GRAY);
        assert_eq!(
            "1,0,0,0.25".parse::<Color>().unwrap(),
            Color::new(1.0, 0.0, 0.0, 0.25)
        );
        assert_eq!(
            "0.5,0.5".parse::<Color>(),
            Err(ColorParseError::ComponentCount(2))
        );
        assert_eq!(
            "1.5,0,0".parse::<Color>(),
            Err(ColorParseError::OutOfRange(1.5))
        );
        assert_eq!(
            "chartreuse".parse::<Color>(),
            Err(ColorParseError::UnknownName("chartreuse".into()))
        );
        assert_eq!("   ".parse::<Color>(), Err(ColorParseError::Empty));
    }

    #[test]
    fn parse_external_keeps_short_component_lists() {
        let external = parse_external("0.2, 0.4").unwrap();
        assert_eq!(external, ExternalColor::Components(vec![0.2, 0.4]));
        assert_eq!(external.resolve(), None);

        assert_eq!(parse_external("red").unwrap().resolve(), Some(RED));
        assert_eq!(
            parse_external("rgb(255, 0, 0)").unwrap().resolve(),
            Some(RED)
        );
    }

    #[test]
    fn parse_external_rejects_more_than_four_components() {
        assert_eq!(
            parse_external("0.1,0.2,0.3,0.4,0.9"),
            Err(ColorParseError::ComponentCount(5))
        );
        assert_eq!(
            parse_external("0.1,0.2,0.3,0.4"),
            Ok(ExternalColor::Components(vec![0.1, 0.2, 0.3, 0.4]))
        );
    }
}
