//! Blend command.

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::models::{blend, BlendMode, RgbColor};
use clap::Args;
use serde::Serialize;

/// Blend two colors
#[derive(Debug, Clone, Args)]
pub struct BlendArgs {
    /// First color (#RRGGBB or rgb(r, g, b))
    #[arg(value_name = "A")]
    pub first: String,

    /// Second color (#RRGGBB or rgb(r, g, b))
    #[arg(value_name = "B")]
    pub second: String,

    /// multiply, screen, overlay, darken or lighten; anything else returns A unchanged
    #[arg(short, long, value_name = "MODE", default_value = "multiply")]
    pub mode: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BlendResponse {
    first: RgbColor,
    second: RgbColor,
    mode: &'static str,
    result: RgbColor,
    rgb: String,
}

impl BlendArgs {
    /// Execute the blend command
    pub fn execute(&self) -> CliResult<()> {
        let first = parse_color(&self.first)?;
        let second = parse_color(&self.second)?;
        let mode = BlendMode::from(self.mode.as_str());
        let result = blend(&first, &second, mode);

        if self.json {
            print_json(&BlendResponse {
                first,
                second,
                mode: mode.as_str(),
                result,
                rgb: result.to_rgb_string(),
            })
        } else {
            println!("{result}");
            Ok(())
        }
    }
}
