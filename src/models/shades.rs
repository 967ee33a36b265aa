//! Tint and shade preview around a base color.

use super::RgbColor;

/// Lightness steps of the preview strip, darkest first.
pub const PREVIEW_STEPS: [i16; 5] = [-30, -15, 0, 15, 30];

/// Five-color preview from darkest to lightest with the base in the middle.
///
/// Lightness is shifted in HSL and clamped into `0..=100`; hue and
/// saturation are held.
///
/// # Examples
///
/// ```
/// use huepick::models::{preview_series, RgbColor};
///
/// let red = RgbColor::new(255, 0, 0);
/// let series = preview_series(&red);
/// assert_eq!(series[2], red);
/// assert_eq!(series[4].to_hex(), "#ff9999");
/// ```
#[must_use]
pub fn preview_series(base: &RgbColor) -> [RgbColor; 5] {
    let hsl = base.to_hsl();
    PREVIEW_STEPS.map(|step| {
        if step == 0 {
            *base
        } else {
            hsl.shift_lightness(step).to_rgb()
        }
    })
}
