//! Color model core: value type, palette, text formats and adjustments.
//!
//! This module defines the core color types used by the picker:
//! - [`Color`]: RGBA color representation with predefined palette constants
//! - [`ColorFormat`]: the four textual representations (HEX, RGB, HSL, CMYK)
//! - Lighten/darken/shade-strip adjustments
//! - [`ExternalColor`]: boundary normalisation for colors that may lack channel data
//!
//! Everything here is pure: no I/O and no shared state.

pub mod adjust;
pub mod external;
pub mod format;
pub mod parse;
pub mod value;

// Re-export commonly used types at module level
pub use adjust::{DEFAULT_ADJUST_AMOUNT, DEFAULT_SHADE_STEP, DEFAULT_SHADE_STEPS};
pub use external::{ExternalColor, display_or};
pub use format::ColorFormat;
pub use parse::ColorParseError;
pub use value::Color;

pub use value::{BLACK, BLUE, GRAY, GREEN, ORANGE, PINK, PURPLE, RED, WHITE, YELLOW};
