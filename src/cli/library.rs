//! Built-in swatch listing command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::models::library::{self, SEASONAL_PALETTES};
use crate::models::RgbColor;
use clap::Args;
use serde::Serialize;

/// List built-in color sets
#[derive(Debug, Clone, Args)]
pub struct LibraryArgs {
    /// basic, web-safe, material, trending, seasonal or combinations
    #[arg(short, long, value_name = "SET", default_value = "basic")]
    pub set: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SeasonalPalette {
    season: &'static str,
    colors: Vec<RgbColor>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Swatches {
    Flat(Vec<RgbColor>),
    Seasonal(Vec<SeasonalPalette>),
    Combinations(Vec<Vec<RgbColor>>),
}

impl LibraryArgs {
    /// Execute the library command
    pub fn execute(&self) -> CliResult<()> {
        let swatches = match self.set.trim().to_lowercase().as_str() {
            "basic" => Swatches::Flat(library::basic_colors()),
            "web-safe" | "websafe" => Swatches::Flat(library::web_safe_colors()),
            "material" => Swatches::Flat(library::material_colors()),
            "trending" => Swatches::Flat(library::trending_colors()),
            "seasonal" => Swatches::Seasonal(
                SEASONAL_PALETTES
                    .iter()
                    .map(|(season, _)| SeasonalPalette {
                        season: season.as_str(),
                        colors: library::seasonal_palette(*season),
                    })
                    .collect(),
            ),
            "combinations" => Swatches::Combinations(library::popular_combinations()),
            other => {
                return Err(CliError::validation(format!(
                    "Unknown color set '{other}'. Use basic, web-safe, material, trending, seasonal or combinations"
                )))
            }
        };

        if self.json {
            return print_json(&swatches);
        }

        match swatches {
            Swatches::Flat(colors) => {
                for color in colors {
                    match library::color_name(&color) {
                        Some(name) => println!("{color}  {name}"),
                        None => println!("{color}"),
                    }
                }
            }
            Swatches::Seasonal(palettes) => {
                for palette in &palettes {
                    print_row(palette.season, &palette.colors);
                }
            }
            Swatches::Combinations(combos) => {
                for (i, colors) in combos.iter().enumerate() {
                    print_row(&format!("#{}", i + 1), colors);
                }
            }
        }
        Ok(())
    }
}

fn print_row(label: &str, colors: &[RgbColor]) {
    let hexes: Vec<String> = colors.iter().map(ToString::to_string).collect();
    println!("{label:<8} {}", hexes.join(" "));
}
