//! File exports of the saved palette collection.
//!
//! Every format renders the whole collection in palette order. JSON-based
//! formats are pretty-printed with two-space indentation.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

use crate::models::{Palette, RgbColor};

/// Palette collection output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteExport {
    /// `{name, colors: [{name, colors}]}`
    Json,
    /// Swatch-exchange style JSON document
    Ase,
    /// Sketch palette plugin format
    SketchPalette,
    /// CSS custom properties in `:root`
    Css,
    /// SCSS variables grouped by palette
    Scss,
    /// Figma color styles
    Figma,
    /// The raw palette list, restorable as-is
    Backup,
}

impl PaletteExport {
    /// All formats.
    pub const ALL: [Self; 7] = [
        Self::Json,
        Self::Ase,
        Self::SketchPalette,
        Self::Css,
        Self::Scss,
        Self::Figma,
        Self::Backup,
    ];

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ase => "ase",
            Self::SketchPalette => "sketchpalette",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Figma => "figma",
            Self::Backup => "backup",
        }
    }

    /// Default download file name.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "colors.json",
            Self::Ase => "colors.ase",
            Self::SketchPalette => "colors.sketchpalette",
            Self::Css => "colors.css",
            Self::Scss => "colors.scss",
            Self::Figma => "figma-colors.json",
            Self::Backup => "color-palettes.json",
        }
    }
}

impl std::fmt::Display for PaletteExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaletteExport {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == wanted)
            .with_context(|| {
                let names: Vec<_> = Self::ALL.iter().map(Self::as_str).collect();
                format!("Unknown palette format '{s}'. Use one of: {}", names.join(", "))
            })
    }
}

#[derive(Serialize)]
struct NamedColors<'a> {
    name: &'a str,
    colors: &'a [RgbColor],
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    name: &'static str,
    colors: Vec<NamedColors<'a>>,
}

#[derive(Serialize)]
struct AseBlock<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    model: &'static str,
    color: [f64; 3],
}

#[derive(Serialize)]
struct AseDocument<'a> {
    signature: &'static str,
    version: &'static str,
    blocks: Vec<AseBlock<'a>>,
}

#[derive(Serialize)]
struct SketchColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SketchDocument {
    compatible_version: &'static str,
    plugin_version: &'static str,
    colors: Vec<SketchColor>,
}

#[derive(Serialize)]
struct FigmaStyle {
    name: String,
    #[serde(rename = "type")]
    kind: &'static str,
    color: [f64; 3],
}

#[derive(Serialize)]
struct FigmaDocument {
    name: &'static str,
    styles: Vec<FigmaStyle>,
}

/// Variable stem for a palette: lowercase ASCII letters, digits, `-` and `_`.
///
/// Every run of other characters becomes a single `-`. Names with nothing
/// usable fall back to `palette`.
fn variable_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('-') {
            stem.push('-');
        }
    }

    let stem = stem.trim_end_matches('-');
    if stem.is_empty() {
        "palette".to_string()
    } else {
        stem.to_string()
    }
}

/// Palette name for a one-line comment; line breaks would end the comment.
fn comment_text(name: &str) -> String {
    name.chars().map(|c| if c.is_control() { ' ' } else { c }).collect()
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize palette export")
}

/// Renders `palettes` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn export_palettes(palettes: &[Palette], format: PaletteExport) -> Result<String> {
    let swatches = || {
        palettes
            .iter()
            .flat_map(|palette| palette.colors.iter().enumerate().map(move |(i, c)| (palette, i, c)))
    };

    match format {
        PaletteExport::Json => to_pretty_json(&JsonDocument {
            name: "Color Palette",
            colors: palettes
                .iter()
                .map(|p| NamedColors {
                    name: &p.name,
                    colors: &p.colors,
                })
                .collect(),
        }),
        PaletteExport::Ase => to_pretty_json(&AseDocument {
            signature: "ASEF",
            version: "1.0",
            blocks: swatches()
                .map(|(palette, _, color)| AseBlock {
                    kind: "color",
                    name: &palette.name,
                    model: "RGB",
                    color: color.unit_channels(),
                })
                .collect(),
        }),
        PaletteExport::SketchPalette => to_pretty_json(&SketchDocument {
            compatible_version: "2.0",
            plugin_version: "2.0",
            colors: swatches()
                .map(|(_, _, color)| {
                    let [red, green, blue] = color.unit_channels();
                    SketchColor {
                        red,
                        green,
                        blue,
                        alpha: 1.0,
                    }
                })
                .collect(),
        }),
        PaletteExport::Figma => to_pretty_json(&FigmaDocument {
            name: "Color Styles",
            styles: swatches()
                .map(|(palette, i, color)| FigmaStyle {
                    name: format!("{}/{}", palette.name, i + 1),
                    kind: "SOLID",
                    color: color.unit_channels(),
                })
                .collect(),
        }),
        PaletteExport::Backup => to_pretty_json(&palettes),
        PaletteExport::Css => {
            let mut css = String::from(":root {\n");
            for (palette, i, color) in swatches() {
                let _ = writeln!(css, "  --{}-{}: {color};", variable_stem(&palette.name), i + 1);
            }
            css.push('}');
            Ok(css)
        }
        PaletteExport::Scss => {
            let mut scss = String::from("// Color Variables\n");
            for palette in palettes {
                let stem = variable_stem(&palette.name);
                let _ = write!(scss, "\n// {}\n", comment_text(&palette.name));
                for (i, color) in palette.colors.iter().enumerate() {
                    let _ = writeln!(scss, "${stem}-{}: {color};", i + 1);
                }
            }
            Ok(scss)
        }
    }
}
