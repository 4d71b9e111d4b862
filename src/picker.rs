//! Picker state: the selected color, its history and the copy notice.
//!
//! Front ends own a [`PickerState`] and drive it explicitly; the color core
//! never touches it.

use crate::clipboard::{ClipboardError, ClipboardSink};
use crate::color::{Color, ColorFormat, WHITE};
use crate::history::ColorHistory;
use std::time::{Duration, Instant};

/// How long the "Copied X!" notice stays visible by default.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Transient confirmation shown after a successful copy.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyNotice {
    pub format: ColorFormat,
    pub value: String,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl CopyNotice {
    /// Message shown to the user, e.g. `Copied HEX!`.
    pub fn message(&self) -> String {
        format!("Copied {}!", self.format.label())
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.duration
    }
}

/// Mutable picker state owned by the front end.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub selected: Color,
    pub history: ColorHistory,
    pub notice_duration: Duration,
    notice: Option<CopyNotice>,
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new(WHITE, ColorHistory::default())
    }
}

impl PickerState {
    pub fn new(initial: Color, history: ColorHistory) -> Self {
        Self {
            selected: initial,
            history,
            notice_duration: DEFAULT_NOTICE_DURATION,
            notice: None,
        }
    }

    /// Makes `color` the current color, recording it in the history when it changed.
    ///
    /// Returns `true` if the selection changed.
    pub fn select(&mut self, color: Color) -> bool {
        if color == self.selected {
            return false;
        }
        self.selected = color;
        if self.history.push(color) {
            log::debug!("Added {} to history", color.to_hex());
        }
        true
    }

    /// The four format rows (HEX, RGB, HSL, CMYK) for the current color.
    pub fn format_rows(&self) -> Vec<(ColorFormat, String)> {
        ColorFormat::ALL
            .iter()
            .map(|format| (*format, format.render(&self.selected)))
            .collect()
    }

    /// Shade strip of the current color.
    pub fn shades(&self, steps: u32, step: f64) -> Vec<Color> {
        self.selected.shade_strip(steps, step)
    }

    /// Selects swatch `index` of the current shade strip.
    pub fn pick_shade(&mut self, index: usize, steps: u32, step: f64) -> Option<Color> {
        let color = self.shades(steps, step).get(index).copied()?;
        self.select(color);
        Some(color)
    }

    /// Selects history entry `index`.
    pub fn pick_recent(&mut self, index: usize) -> Option<Color> {
        let color = self.history.get(index)?;
        self.select(color);
        Some(color)
    }

    /// Copies the current color in `format` and raises the copy notice.
    pub fn copy(
        &mut self,
        format: ColorFormat,
        sink: &mut dyn ClipboardSink,
        now: Instant,
    ) -> Result<&CopyNotice, ClipboardError> {
        let value = format.render(&self.selected);
        sink.set_text(&value)?;

        let notice: &CopyNotice = self.notice.insert(CopyNotice {
            format,
            value,
            shown_at: now,
            duration: self.notice_duration,
        });
        Ok(notice)
    }

    /// The copy notice, while it is still visible.
    pub fn notice(&self, now: Instant) -> Option<&CopyNotice> {
        self.notice.as_ref().filter(|notice| notice.is_visible(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, GRAY, RED};

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Command("offline".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn default_state_is_white_with_seeded_history() {
        let state = PickerState::default();
        assert_eq!(state.selected, WHITE);
        assert_eq!(state.history.len(), 8);
    }

    #[test]
    fn select_records_new_colors_once() {
        let mut state = PickerState::default();
        assert!(state.select(BLACK));
        assert_eq!(state.history.get(0), Some(BLACK));

        assert!(!state.select(BLACK));
        assert!(state.select(RED));
        // RED is already in the seeded history, so BLACK stays in front.
        assert_eq!(state.history.get(0), Some(BLACK));
        assert_eq!(state.history.len(), 9);
    }

    #[test]
    fn format_rows_follow_display_order() {
        let mut state = PickerState::default();
        state.select(RED);
        let rows = state.format_rows();
        assert_eq!(
            rows,
            vec![
                (ColorFormat::Hex, "#FF0000".to_string()),
                (ColorFormat::Rgb, "rgb(255, 0, 0)".to_string()),
                (ColorFormat::Hsl, "hsl(0, 100%, 50%)".to_string()),
                (ColorFormat::Cmyk, "cmyk(0%, 100%, 100%, 0%)".to_string()),
            ]
        );
    }

    #[test]
    fn picking_a_shade_selects_it() {
        let mut state = PickerState::new(GRAY, ColorHistory::with_capacity(4));
        let darkest = state.pick_shade(0, 4, 0.1).unwrap();
        assert_eq!(darkest, GRAY.adjust(-4.0 * 0.1));
        assert_eq!(state.selected, darkest);
        assert!(state.pick_shade(9, 4, 0.1).is_none());
    }

    #[test]
    fn picking_from_history_selects_entry() {
        let mut state = PickerState::default();
        assert_eq!(state.pick_recent(1), Some(crate::color::GREEN));
        assert_eq!(state.selected, crate::color::GREEN);
        assert_eq!(state.pick_recent(99), None);
    }

    #[test]
    fn copy_writes_value_and_shows_notice_until_expiry() {
        let mut state = PickerState::default();
        state.select(RED);
        let mut clipboard = MemoryClipboard::default();
        let start = Instant::now();

        let notice = state.copy(ColorFormat::Hex, &mut clipboard, start).unwrap();
        assert_eq!(notice.message(), "Copied HEX!");
        assert_eq!(clipboard.contents.as_deref(), Some("#FF0000"));

        assert!(state.notice(start + Duration::from_millis(1999)).is_some());
        assert!(state.notice(start + DEFAULT_NOTICE_DURATION).is_none());
    }

    #[test]
    fn failed_copy_leaves_no_notice() {
        let mut state = PickerState::default();
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let now = Instant::now();
        assert!(state.copy(ColorFormat::Rgb, &mut clipboard, now).is_err());
        assert!(state.notice(now).is_none());
    }
}
