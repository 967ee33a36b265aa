//! Per-channel blend modes for combining two colors.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// How two colors are combined channel by channel.
///
/// Unrecognized mode names map to `Passthrough`, which returns the first color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// `a * b / 255`
    #[default]
    Multiply,
    /// `255 - (255 - a) * (255 - b) / 255`
    Screen,
    /// Multiply for dark bases, screen for light bases
    Overlay,
    /// `min(a, b)`
    Darken,
    /// `max(a, b)`
    Lighten,
    /// Returns the first color unchanged
    Passthrough,
}

impl BlendMode {
    /// The named modes, excluding the `Passthrough` fallback.
    pub const NAMED: [Self; 5] = [
        Self::Multiply,
        Self::Screen,
        Self::Overlay,
        Self::Darken,
        Self::Lighten,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Passthrough => "passthrough",
        }
    }

    fn channel(&self, a: u8, b: u8) -> u8 {
        let (c1, c2) = (f64::from(a), f64::from(b));
        let value = match self {
            Self::Multiply => c1 * c2 / 255.0,
            Self::Screen => 255.0 - (255.0 - c1) * (255.0 - c2) / 255.0,
            Self::Overlay => {
                if c1 < 128.0 {
                    2.0 * c1 * c2 / 255.0
                } else {
                    255.0 - 2.0 * (255.0 - c1) * (255.0 - c2) / 255.0
                }
            }
            Self::Darken => return a.min(b),
            Self::Lighten => return a.max(b),
            Self::Passthrough => return a,
        };
        value.round().clamp(0.0, 255.0) as u8
    }
}

impl From<&str> for BlendMode {
    fn from(name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Passthrough)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blends `a` with `b` using `mode`, one channel at a time.
///
/// # Examples
///
/// ```
/// use huepick::models::{blend, BlendMode, RgbColor};
///
/// let result = blend(&RgbColor::WHITE, &RgbColor::BLACK, BlendMode::Screen);
/// assert_eq!(result, RgbColor::WHITE);
/// ```
#[must_use]
pub fn blend(a: &RgbColor, b: &RgbColor, mode: BlendMode) -> RgbColor {
    RgbColor::new(
        mode.channel(a.r, b.r),
        mode.channel(a.g, b.g),
        mode.channel(a.b, b.b),
    )
}
