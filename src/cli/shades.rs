//! Tint/shade preview command.

use crate::cli::common::{parse_color, print_json, CliResult};
use crate::models::preview_series;
use crate::models::shades::PREVIEW_STEPS;
use clap::Args;

/// Show darker and lighter variants of a color
#[derive(Debug, Clone, Args)]
pub struct ShadesArgs {
    /// Color as #RRGGBB or rgb(r, g, b)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShadesArgs {
    /// Execute the shades command
    pub fn execute(&self) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let series = preview_series(&color);

        if self.json {
            return print_json(&series);
        }

        for (step, shade) in PREVIEW_STEPS.iter().zip(series) {
            println!("{step:>+4}  {shade}");
        }
        Ok(())
    }
}
