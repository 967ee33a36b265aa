//! Saved palette commands.

use crate::cli::common::{
    copy_to_clipboard, parse_color, print_json, save_failed, CliContext, CliError, CliResult,
};
use crate::export::{export_palettes, PaletteExport};
use crate::models::Palette;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Manage saved palettes
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Palette subcommand
    #[command(subcommand)]
    pub command: PaletteCommand,
}

/// Palette subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PaletteCommand {
    /// List saved palettes
    List(ListPalettesArgs),
    /// Save a new palette
    Create(CreatePaletteArgs),
    /// Delete a palette
    Delete(DeletePaletteArgs),
    /// Print a palette's colors as a comma-separated list
    Copy(CopyPaletteArgs),
    /// Export all palettes to a file
    Export(ExportPalettesArgs),
}

/// List saved palettes
#[derive(Debug, Clone, Args)]
pub struct ListPalettesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Save a new palette
#[derive(Debug, Clone, Args)]
pub struct CreatePaletteArgs {
    /// Palette name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Colors to include (defaults to the current color)
    #[arg(value_name = "COLOR")]
    pub colors: Vec<String>,
}

/// Delete a palette
#[derive(Debug, Clone, Args)]
pub struct DeletePaletteArgs {
    /// Palette id or name
    #[arg(value_name = "PALETTE")]
    pub palette: String,
}

/// Print a palette's colors
#[derive(Debug, Clone, Args)]
pub struct CopyPaletteArgs {
    /// Palette id or name
    #[arg(value_name = "PALETTE")]
    pub palette: String,

    /// Also place the colors on the clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Export all palettes
#[derive(Debug, Clone, Args)]
pub struct ExportPalettesArgs {
    /// json, ase, sketchpalette, css, scss, figma or backup
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: String,

    /// Output file or directory; prints to stdout when omitted
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct PaletteItem<'a> {
    id: &'a str,
    name: &'a str,
    colors: Vec<String>,
    timestamp: String,
}

impl<'a> From<&'a Palette> for PaletteItem<'a> {
    fn from(palette: &'a Palette) -> Self {
        Self {
            id: &palette.id,
            name: &palette.name,
            colors: palette.colors.iter().map(ToString::to_string).collect(),
            timestamp: palette.timestamp.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ListPalettesResponse<'a> {
    palettes: Vec<PaletteItem<'a>>,
    count: usize,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            PaletteCommand::List(args) => args.execute(ctx),
            PaletteCommand::Create(args) => args.execute(ctx),
            PaletteCommand::Delete(args) => args.execute(ctx),
            PaletteCommand::Copy(args) => args.execute(ctx),
            PaletteCommand::Export(args) => args.execute(ctx),
        }
    }
}

impl ListPalettesArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let session = ctx.session();
        let palettes = session.palettes();

        if self.json {
            return print_json(&ListPalettesResponse {
                palettes: palettes.iter().map(PaletteItem::from).collect(),
                count: palettes.len(),
            });
        }

        if palettes.is_empty() {
            println!("No saved palettes.");
            return Ok(());
        }

        println!("Palettes ({}):", palettes.len());
        println!();
        for palette in palettes.iter() {
            println!(
                "  {:<36} {:<20} {}",
                palette.id,
                palette.name,
                palette.copy_text()
            );
        }
        Ok(())
    }
}

impl CreatePaletteArgs {
    /// Execute the create command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut session = ctx.session();

        let palette = if self.colors.is_empty() {
            session.create_palette(&self.name)
        } else {
            let colors = self
                .colors
                .iter()
                .map(String::as_str)
                .map(parse_color)
                .collect::<CliResult<Vec<_>>>()?;
            session.create_palette_with(&self.name, colors)
        }
        .map_err(|e| CliError::validation(e.to_string()))?;

        let id = palette.id.clone();
        session
            .save_palettes(&mut ctx.store())
            .map_err(save_failed("palettes"))?;

        println!("Created palette '{}' ({id})", self.name.trim());
        Ok(())
    }
}

impl DeletePaletteArgs {
    /// Execute the delete command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut session = ctx.session();

        let (id, name) = session
            .palettes()
            .find_by_id_or_name(&self.palette)
            .map(|p| (p.id.clone(), p.name.clone()))
            .ok_or_else(|| CliError::validation(format!("Palette '{}' not found", self.palette)))?;

        session.delete_palette(&id);
        session
            .save_palettes(&mut ctx.store())
            .map_err(save_failed("palettes"))?;

        println!("Deleted palette '{name}'");
        Ok(())
    }
}

impl CopyPaletteArgs {
    /// Execute the copy command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let session = ctx.session();
        let palette = session
            .palettes()
            .find_by_id_or_name(&self.palette)
            .ok_or_else(|| CliError::validation(format!("Palette '{}' not found", self.palette)))?;

        let text = palette.copy_text();
        println!("{text}");

        if self.copy {
            copy_to_clipboard(&text)?;
        }
        Ok(())
    }
}

impl ExportPalettesArgs {
    /// Execute the export command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let format = self
            .format
            .parse::<PaletteExport>()
            .map_err(|e| CliError::validation(e.to_string()))?;

        let session = ctx.session();
        let content = export_palettes(session.palettes().as_slice(), format)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        let Some(output) = &self.output else {
            println!("{content}");
            return Ok(());
        };

        let path = if output.is_dir() {
            output.join(format.file_name())
        } else {
            output.clone()
        };

        std::fs::write(&path, content).map_err(|e| {
            CliError::io(format!("Failed to write output file {}: {e}", path.display()))
        })?;

        tracing::info!(path = %path.display(), %format, "exported palettes");
        println!("Exported {} palette(s) to {}", session.palettes().len(), path.display());
        Ok(())
    }
}
