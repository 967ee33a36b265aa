//! Built-in swatch collections and color names.
//!
//! These are fixed sets offered for quick selection: basic colors, the
//! web-safe cube, a few material shades, trending colors, seasonal palettes
//! and popular combinations.

use super::RgbColor;

/// Sixteen basic colors.
pub const BASIC_COLORS: [&str; 16] = [
    "#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff", "#000000", "#ffffff",
    "#808080", "#c0c0c0", "#800000", "#808000", "#008000", "#800080", "#008080", "#000080",
];

/// Material design shades, grouped by hue (light to saturated).
pub const MATERIAL_COLORS: [(&str, [&str; 6]); 3] = [
    (
        "red",
        ["#ffebee", "#ffcdd2", "#ef9a9a", "#e57373", "#ef5350", "#f44336"],
    ),
    (
        "blue",
        ["#e3f2fd", "#bbdefb", "#90caf9", "#64b5f6", "#42a5f5", "#2196f3"],
    ),
    (
        "green",
        ["#e8f5e9", "#c8e6c9", "#a5d6a7", "#81c784", "#66bb6a", "#4caf50"],
    ),
];

/// Currently popular colors.
pub const TRENDING_COLORS: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B9B9B", "#E9D985",
    "#799FCB", "#9055A2",
];

/// Five-color palettes per season.
pub const SEASONAL_PALETTES: [(Season, [&str; 5]); 4] = [
    (
        Season::Spring,
        ["#FF9AA2", "#FFB7B2", "#FFDAC1", "#E2F0CB", "#B5EAD7"],
    ),
    (
        Season::Summer,
        ["#FF69B4", "#FFD700", "#87CEEB", "#98FB98", "#DDA0DD"],
    ),
    (
        Season::Autumn,
        ["#D35400", "#C0392B", "#F39C12", "#F1C40F", "#935116"],
    ),
    (
        Season::Winter,
        ["#2980B9", "#2C3E50", "#95A5A6", "#BDC3C7", "#ECF0F1"],
    ),
];

/// Popular five-color combinations.
pub const POPULAR_COMBINATIONS: [[&str; 5]; 3] = [
    ["#2C3E50", "#E74C3C", "#ECF0F1", "#3498DB", "#2980B9"],
    ["#2ECC71", "#27AE60", "#F1C40F", "#E67E22", "#E74C3C"],
    ["#1ABC9C", "#16A085", "#2ECC71", "#27AE60", "#3498DB"],
];

const NAMED_COLORS: [(RgbColor, &str); 8] = [
    (RgbColor::new(255, 0, 0), "Red"),
    (RgbColor::new(0, 255, 0), "Green"),
    (RgbColor::new(0, 0, 255), "Blue"),
    (RgbColor::new(255, 255, 0), "Yellow"),
    (RgbColor::new(255, 0, 255), "Magenta"),
    (RgbColor::new(0, 255, 255), "Cyan"),
    (RgbColor::new(0, 0, 0), "Black"),
    (RgbColor::new(255, 255, 255), "White"),
];

/// Label used for colors without a name.
pub const CUSTOM_COLOR_NAME: &str = "Custom Color";

/// Season of a seasonal palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// Pastels
    Spring,
    /// Bright
    Summer,
    /// Warm earth tones
    Autumn,
    /// Cool, muted
    Winter,
}

impl Season {
    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }
}

/// Exact-match name for the primary, secondary and achromatic extremes.
#[must_use]
pub fn color_name(color: &RgbColor) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(named, _)| named == color)
        .map(|(_, name)| *name)
}

/// Name for display, falling back to "Custom Color".
#[must_use]
pub fn display_name(color: &RgbColor) -> &'static str {
    color_name(color).unwrap_or(CUSTOM_COLOR_NAME)
}

fn parse_all(hexes: &[&str]) -> Vec<RgbColor> {
    hexes.iter().map(|hex| RgbColor::sanitized(hex)).collect()
}

/// The sixteen basic colors.
#[must_use]
pub fn basic_colors() -> Vec<RgbColor> {
    parse_all(&BASIC_COLORS)
}

/// The 216-color web-safe cube, channels stepping by 51, blue varying fastest.
#[must_use]
pub fn web_safe_colors() -> Vec<RgbColor> {
    let steps = [0u8, 51, 102, 153, 204, 255];
    let mut colors = Vec::with_capacity(216);
    for r in steps {
        for g in steps {
            for b in steps {
                colors.push(RgbColor::new(r, g, b));
            }
        }
    }
    colors
}

/// Material shades flattened in group order.
#[must_use]
pub fn material_colors() -> Vec<RgbColor> {
    MATERIAL_COLORS
        .iter()
        .flat_map(|(_, shades)| parse_all(shades))
        .collect()
}

/// Trending colors.
#[must_use]
pub fn trending_colors() -> Vec<RgbColor> {
    parse_all(&TRENDING_COLORS)
}

/// Palette for one season.
#[must_use]
pub fn seasonal_palette(season: Season) -> Vec<RgbColor> {
    SEASONAL_PALETTES
        .iter()
        .find(|(s, _)| *s == season)
        .map(|(_, colors)| parse_all(colors))
        .unwrap_or_default()
}

/// Popular combinations, each as an ordered list.
#[must_use]
pub fn popular_combinations() -> Vec<Vec<RgbColor>> {
    POPULAR_COMBINATIONS.iter().map(|combo| parse_all(combo)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_names() {
        assert_eq!(color_name(&RgbColor::new(255, 0, 0)), Some("Red"));
        assert_eq!(color_name(&RgbColor::WHITE), Some("White"));
        assert_eq!(color_name(&RgbColor::new(1, 2, 3)), None);
        assert_eq!(display_name(&RgbColor::new(1, 2, 3)), "Custom Color");
    }

    #[test]
    fn test_web_safe_cube() {
        let colors = web_safe_colors();
        assert_eq!(colors.len(), 216);
        assert_eq!(colors[0].to_hex(), "#000000");
        assert_eq!(colors[1].to_hex(), "#000033");
        assert_eq!(colors[215].to_hex(), "#ffffff");
    }

    #[test]
    fn test_collections_parse_cleanly() {
        assert_eq!(basic_colors().len(), 16);
        assert_eq!(material_colors().len(), 18);
        assert_eq!(trending_colors()[0], RgbColor::new(0xff, 0x6b, 0x6b));
        assert_eq!(seasonal_palette(Season::Winter).len(), 5);
        assert_eq!(popular_combinations().len(), 3);

        // every literal is a valid hex, so nothing degrades to the fallback
        let all = BASIC_COLORS
            .iter()
            .chain(TRENDING_COLORS.iter())
            .chain(POPULAR_COMBINATIONS.iter().flatten())
            .chain(SEASONAL_PALETTES.iter().flat_map(|(_, c)| c.iter()))
            .chain(MATERIAL_COLORS.iter().flat_map(|(_, c)| c.iter()));
        for hex in all {
            assert!(RgbColor::from_hex(hex).is_ok(), "{hex}");
        }
    }
}
