//! Color conversion command.

use crate::cli::common::{copy_to_clipboard, parse_color, print_json, CliContext, CliError, CliResult};
use crate::models::{ColorInfo, DisplayFormat};
use clap::Args;

/// Convert a color between notations
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Color as #RRGGBB or rgb(r, g, b)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output format: hex, rgb, hsl, hsb, hwb or cmyk (defaults to ui.default_format)
    #[arg(short, long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Print every notation with the color name
    #[arg(long, conflicts_with = "format")]
    pub all: bool,

    /// Output every notation as JSON
    #[arg(long)]
    pub json: bool,

    /// Copy the converted value to the clipboard
    #[arg(long, conflicts_with_all = ["json", "all"])]
    pub copy: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let info = ColorInfo::of(&color);

        if self.json {
            return print_json(&info);
        }

        if self.all {
            println!("{}", info.name);
            for (label, value) in info.rows() {
                println!("  {label:<5} {value}");
            }
            return Ok(());
        }

        let format = match &self.format {
            Some(name) => name
                .parse::<DisplayFormat>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => ctx.config.ui.default_format,
        };

        let value = format.format(&color);
        println!("{value}");

        if self.copy {
            copy_to_clipboard(&value)?;
        }

        Ok(())
    }
}
