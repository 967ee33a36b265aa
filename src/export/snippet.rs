//! Copy-ready code snippets for a single color.

use std::fmt;

use crate::models::RgbColor;

/// Snippet language for a single color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorExport {
    /// CSS rule with hex, rgb and hsl declarations
    Css,
    /// SASS variables with usage notes
    Sass,
    /// Tailwind `colors` entry
    Tailwind,
}

impl ColorExport {
    /// All snippet kinds.
    pub const ALL: [Self; 3] = [Self::Css, Self::Sass, Self::Tailwind];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Sass => "sass",
            Self::Tailwind => "tailwind",
        }
    }
}

impl fmt::Display for ColorExport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ColorExport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "sass" | "scss" => Ok(Self::Sass),
            "tailwind" => Ok(Self::Tailwind),
            _ => anyhow::bail!("Unknown export format '{s}'. Use css, sass or tailwind"),
        }
    }
}

/// Renders `color` as a snippet. `tailwind_name` keys the Tailwind entry.
///
/// # Examples
///
/// ```
/// use huepick::export::{color_snippet, ColorExport};
/// use huepick::models::RgbColor;
///
/// let snippet = color_snippet(&RgbColor::new(255, 0, 0), ColorExport::Tailwind, "brand");
/// assert!(snippet.contains("'brand': '#ff0000'"));
/// ```
#[must_use]
pub fn color_snippet(color: &RgbColor, kind: ColorExport, tailwind_name: &str) -> String {
    let hex = color.to_hex();
    let [r, g, b] = color.channels();
    let hsl = color.to_hsl();

    match kind {
        ColorExport::Css => format!(
            ".color {{\n  /* HEX */\n  color: {hex};\n\n  /* RGB */\n  color: rgb({r}, {g}, {b});\n\n  /* HSL */\n  color: hsl({}, {}%, {}%);\n}}",
            hsl.h, hsl.s, hsl.l
        ),
        ColorExport::Sass => format!(
            "$color: {hex};\n$color-rgb: ({r}, {g}, {b});\n$color-hsl: ({}, {}, {});\n\n\
             // Usage:\n\
             // color: $color;\n\
             // color: rgb(#{{nth($color-rgb, 1)}}, #{{nth($color-rgb, 2)}}, #{{nth($color-rgb, 3)}});\n\
             // color: hsl(#{{nth($color-hsl, 1)}}, #{{nth($color-hsl, 2)}}%, #{{nth($color-hsl, 3)}}%);",
            hsl.h, hsl.s, hsl.l
        ),
        ColorExport::Tailwind => format!(
            "colors: {{\n  '{tailwind_name}': '{hex}',\n  // Add to your tailwind.config.js\n}}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_snippet() {
        let css = color_snippet(&RgbColor::new(255, 0, 0), ColorExport::Css, "primary");
        assert_eq!(
            css,
            ".color {\n  /* HEX */\n  color: #ff0000;\n\n  /* RGB */\n  color: rgb(255, 0, 0);\n\n  /* HSL */\n  color: hsl(0, 100%, 50%);\n}"
        );
    }

    #[test]
    fn test_sass_snippet() {
        let sass = color_snippet(&RgbColor::new(0, 0, 255), ColorExport::Sass, "primary");
        let mut lines = sass.lines();
        assert_eq!(lines.next(), Some("$color: #0000ff;"));
        assert_eq!(lines.next(), Some("$color-rgb: (0, 0, 255);"));
        assert_eq!(lines.next(), Some("$color-hsl: (240, 100, 50);"));
        assert!(sass.contains("// color: rgb(#{nth($color-rgb, 1)}"));
    }

    #[test]
    fn test_tailwind_snippet() {
        let tw = color_snippet(&RgbColor::new(0, 128, 255), ColorExport::Tailwind, "primary");
        assert_eq!(
            tw,
            "colors: {\n  'primary': '#0080ff',\n  // Add to your tailwind.config.js\n}"
        );
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("CSS".parse::<ColorExport>().unwrap(), ColorExport::Css);
        assert_eq!("scss".parse::<ColorExport>().unwrap(), ColorExport::Sass);
        assert!("less".parse::<ColorExport>().is_err());
    }
}
