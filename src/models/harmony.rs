//! Color harmonies: sets of hues at fixed angles around the color wheel.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Kind of harmony to derive from a base color.
///
/// `Single` is the fallback for names that are not recognized and yields
/// just the base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyKind {
    /// Base and its opposite
    #[default]
    Complementary,
    /// Neighbours 30° either side of the base
    Analogous,
    /// Three hues 120° apart
    Triadic,
    /// Four hues 90° apart
    Tetradic,
    /// Base plus the two hues adjacent to its complement
    Split,
    /// Base color only
    Single,
}

impl HarmonyKind {
    /// The named harmonies, excluding the `Single` fallback.
    pub const NAMED: [Self; 5] = [
        Self::Complementary,
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::Split,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Split => "split",
            Self::Single => "single",
        }
    }

    /// Hue offsets in output order; `0` marks the base color itself.
    #[must_use]
    pub const fn offsets(&self) -> &'static [i32] {
        match self {
            Self::Complementary => &[0, 180],
            Self::Analogous => &[-30, 0, 30],
            Self::Triadic => &[0, 120, 240],
            Self::Tetradic => &[0, 90, 180, 270],
            Self::Split => &[0, 150, 210],
            Self::Single => &[0],
        }
    }
}

impl From<&str> for HarmonyKind {
    fn from(name: &str) -> Self {
        Self::NAMED
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Single)
    }
}

impl fmt::Display for HarmonyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rotates the hue of `color` by `degrees`, keeping saturation and lightness.
#[must_use]
pub fn hue_rotate(color: &RgbColor, degrees: i32) -> RgbColor {
    color.to_hsl().rotate(degrees).to_rgb()
}

/// Generates the harmony set for `base`.
///
/// The base is returned unchanged at its slot; the other members are
/// rebuilt from the base's rounded HSL with the hue rotated.
///
/// # Examples
///
/// ```
/// use huepick::models::{generate_harmony, HarmonyKind, RgbColor};
///
/// let red = RgbColor::new(255, 0, 0);
/// let colors = generate_harmony(&red, HarmonyKind::Complementary);
/// assert_eq!(colors, vec![red, RgbColor::new(0, 255, 255)]);
/// ```
#[must_use]
pub fn generate_harmony(base: &RgbColor, kind: HarmonyKind) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    kind.offsets()
        .iter()
        .map(|&offset| {
            if offset == 0 {
                *base
            } else {
                hsl.rotate(offset).to_rgb()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexes(colors: &[RgbColor]) -> Vec<String> {
        colors.iter().map(RgbColor::to_hex).collect()
    }

    #[test]
    fn test_complementary_red() {
        let red = RgbColor::new(255, 0, 0);
        let colors = generate_harmony(&red, HarmonyKind::Complementary);
        assert_eq!(hexes(&colors), vec!["#ff0000", "#00ffff"]);
        assert_eq!(colors[1], hue_rotate(&red, 180));
    }

    #[test]
    fn test_triadic_red() {
        let red = RgbColor::new(255, 0, 0);
        let colors = generate_harmony(&red, HarmonyKind::Triadic);
        assert_eq!(hexes(&colors), vec!["#ff0000", "#00ff00", "#0000ff"]);
    }

    #[test]
    fn test_analogous_order() {
        let red = RgbColor::new(255, 0, 0);
        let colors = generate_harmony(&red, HarmonyKind::Analogous);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[1], red);
        assert_eq!(colors[0].to_hsl().h, 330);
        assert_eq!(colors[2].to_hsl().h, 30);
    }

    #[test]
    fn test_member_counts() {
        let base = RgbColor::new(40, 120, 200);
        assert_eq!(generate_harmony(&base, HarmonyKind::Complementary).len(), 2);
        assert_eq!(generate_harmony(&base, HarmonyKind::Analogous).len(), 3);
        assert_eq!(generate_harmony(&base, HarmonyKind::Triadic).len(), 3);
        assert_eq!(generate_harmony(&base, HarmonyKind::Tetradic).len(), 4);
        assert_eq!(generate_harmony(&base, HarmonyKind::Split).len(), 3);
        assert_eq!(generate_harmony(&base, HarmonyKind::Single), vec![base]);
    }

    #[test]
    fn test_unknown_kind_is_single() {
        assert_eq!(HarmonyKind::from("monochrome"), HarmonyKind::Single);
        assert_eq!(HarmonyKind::from("Triadic"), HarmonyKind::Triadic);
        assert_eq!(HarmonyKind::from(" split "), HarmonyKind::Split);
    }

    #[test]
    fn test_double_complement_returns_hue() {
        let base = RgbColor::new(255, 0, 0);
        let back = hue_rotate(&hue_rotate(&base, 180), 180);
        assert_eq!(back, base);
    }

    #[test]
    fn test_gray_harmony_stays_gray() {
        let gray = RgbColor::new(128, 128, 128);
        for color in generate_harmony(&gray, HarmonyKind::Tetradic) {
            assert_eq!(color, gray);
        }
    }
}
