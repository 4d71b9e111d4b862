//! Recently used colors.

use crate::color::Color;
use crate::color::value::STARTER_PALETTE;

/// Default number of colors kept in the history.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Ordered list of distinct colors, most recent first.
///
/// Colors are compared by value. Re-adding a color that is already present
/// leaves the list untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorHistory {
    entries: Vec<Color>,
    capacity: usize,
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::seeded(DEFAULT_HISTORY_CAPACITY)
    }
}

impl ColorHistory {
    /// Creates an empty history. A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates a history pre-filled with the starter palette.
    pub fn seeded(capacity: usize) -> Self {
        let mut history = Self::with_capacity(capacity);
        history.entries = STARTER_PALETTE.iter().copied().take(history.capacity).collect();
        history
    }

    /// Records `color` at the front unless an equal color is already present.
    ///
    /// Returns `true` if the color was inserted. The oldest entries are dropped
    /// once the capacity is exceeded.
    pub fn push(&mut self, color: Color) -> bool {
        if self.contains(&color) {
            log::trace!("History already contains {}", color.to_hex());
            return false;
        }

        self.entries.insert(0, color);
        if self.entries.len() > self.capacity {
            self.entries.truncate(self.capacity);
        }
        true
    }

    pub fn contains(&self, color: &Color) -> bool {
        self.entries.contains(color)
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
