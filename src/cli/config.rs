//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::{is_valid_color_key, Config, ThemeMode};
use crate::models::{is_valid_hex, DisplayFormat};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Data file holding history, palettes and preferences
    #[arg(long, value_name = "FILE")]
    data_file: Option<PathBuf>,

    /// Initial theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Default display format (hex, rgb, hsl, hsb, hwb, cmyk)
    #[arg(long, value_name = "FORMAT")]
    format: Option<String>,

    /// Color shown before anything is picked (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    initial_color: Option<String>,

    /// Key used in Tailwind snippets
    #[arg(long, value_name = "NAME")]
    tailwind_name: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    paths: PathsOutput,
    ui: UiOutput,
    export: ExportOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    data_file: Option<String>,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    default_format: DisplayFormat,
    initial_color: String,
}

#[derive(Serialize, Debug)]
struct ExportOutput {
    tailwind_name: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let output = ConfigOutput {
            config_file: Config::config_file_path()
                .ok()
                .map(|p| p.to_string_lossy().to_string()),
            paths: PathsOutput {
                data_file: config
                    .data_file_path()
                    .ok()
                    .map(|p| p.to_string_lossy().to_string()),
            },
            ui: UiOutput {
                theme: format!("{:?}", config.ui.theme_mode).to_lowercase(),
                default_format: config.ui.default_format,
                initial_color: config.ui.initial_color.clone(),
            },
            export: ExportOutput {
                tailwind_name: config.export.tailwind_name.clone(),
            },
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(&output);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.data_file.is_none()
            && self.theme.is_none()
            && self.format.is_none()
            && self.initial_color.is_none()
            && self.tailwind_name.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --data-file, --theme, --format, --initial-color, or --tailwind-name",
            ));
        }

        // A broken file is replaced rather than blocking the fix
        let mut config = Config::load().unwrap_or_default();

        if let Some(path) = &self.data_file {
            config.paths.data_file = Some(path.clone());
        }

        if let Some(theme_str) = &self.theme {
            config.ui.theme_mode = match theme_str.to_lowercase().as_str() {
                "auto" => ThemeMode::Auto,
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                _ => {
                    return Err(CliError::validation(
                        "Invalid theme mode. Must be 'auto', 'light', or 'dark'",
                    ))
                }
            };
        }

        if let Some(format) = &self.format {
            config.ui.default_format = format
                .parse()
                .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
        }

        if let Some(color) = &self.initial_color {
            if !is_valid_hex(color) {
                return Err(CliError::validation(format!(
                    "Invalid initial color '{color}': expected #RRGGBB"
                )));
            }
            config.ui.initial_color = color.to_lowercase();
        }

        if let Some(name) = &self.tailwind_name {
            if !is_valid_color_key(name) {
                return Err(CliError::validation(format!(
                    "Invalid Tailwind color name '{name}': use letters, digits, '-' or '_'"
                )));
            }
            config.export.tailwind_name.clone_from(name);
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(output: &ConfigOutput) {
    println!("Configuration:");
    println!();
    if let Some(file) = &output.config_file {
        println!("  Config file:     {file}");
    }
    println!(
        "  Data file:       {}",
        output.paths.data_file.as_deref().unwrap_or("(unresolved)")
    );
    println!("  Theme:           {}", output.ui.theme);
    println!("  Default format:  {}", output.ui.default_format);
    println!("  Initial color:   {}", output.ui.initial_color);
    println!("  Tailwind name:   {}", output.export.tailwind_name);
}
