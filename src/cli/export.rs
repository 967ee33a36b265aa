//! Single-color snippet export command.

use crate::cli::common::{copy_to_clipboard, parse_color, CliContext, CliError, CliResult};
use crate::config::is_valid_color_key;
use crate::export::{color_snippet, ColorExport};
use clap::Args;

/// Export a color as a CSS, SASS or Tailwind snippet
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Color as #RRGGBB or rgb(r, g, b)
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// css, sass or tailwind
    #[arg(short, long, value_name = "FORMAT", default_value = "css")]
    pub format: String,

    /// Tailwind color key (defaults to export.tailwind_name)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Copy the snippet to the clipboard
    #[arg(long)]
    pub copy: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let kind = self
            .format
            .parse::<ColorExport>()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let name = self
            .name
            .as_deref()
            .unwrap_or(&ctx.config.export.tailwind_name);
        if !is_valid_color_key(name) {
            return Err(CliError::validation(format!(
                "Invalid Tailwind color name '{name}': use letters, digits, '-' or '_'"
            )));
        }

        let snippet = color_snippet(&color, kind, name);
        println!("{snippet}");

        if self.copy {
            copy_to_clipboard(&snippet)?;
        }
        Ok(())
    }
}
