//! Library exports for reusing colorpick subsystems.
//!
//! Exposes the color model core alongside the picker state, history and
//! configuration so that other front ends can share conversion logic and
//! settings with the main binary.

pub mod clipboard;
pub mod color;
pub mod config;
pub mod history;
pub mod picker;
pub mod util;

pub use color::{Color, ColorFormat};
pub use config::Config;
pub use picker::PickerState;
