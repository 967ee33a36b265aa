//! Bounded, most-recent-first history of picked colors.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Number of colors kept in the history.
pub const HISTORY_CAPACITY: usize = 10;

/// Distinct colors, newest first, at most [`HISTORY_CAPACITY`] entries.
///
/// Persisted as a plain array of hex strings. Loading deduplicates and
/// truncates, so a hand-edited store cannot break the invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<RgbColor>", into = "Vec<RgbColor>")]
pub struct ColorHistory {
    colors: Vec<RgbColor>,
}

impl ColorHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// Records `color` at the front.
    ///
    /// A color that is already present is left where it is and nothing
    /// changes. Returns whether the history was modified.
    pub fn push(&mut self, color: RgbColor) -> bool {
        if self.colors.contains(&color) {
            return false;
        }

        self.colors.insert(0, color);
        self.colors.truncate(HISTORY_CAPACITY);
        true
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.colors.clear();
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl Iterator<Item = &RgbColor> {
        self.colors.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Newest entry.
    #[must_use]
    pub fn latest(&self) -> Option<&RgbColor> {
        self.colors.first()
    }
}

impl From<Vec<RgbColor>> for ColorHistory {
    fn from(colors: Vec<RgbColor>) -> Self {
        let mut kept = Vec::with_capacity(HISTORY_CAPACITY);
        for color in colors {
            if kept.len() == HISTORY_CAPACITY {
                break;
            }
            if !kept.contains(&color) {
                kept.push(color);
            }
        }
        Self { colors: kept }
    }
}

impl From<ColorHistory> for Vec<RgbColor> {
    fn from(history: ColorHistory) -> Self {
        history.colors
    }
}
