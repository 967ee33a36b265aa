//! User preference commands.

use crate::cli::common::{print_json, save_failed, CliContext, CliError, CliResult};
use crate::models::Theme;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Show or change user preferences
#[derive(Debug, Clone, Args)]
pub struct PrefsArgs {
    /// Preferences subcommand
    #[command(subcommand)]
    pub command: PrefsCommand,
}

/// Preferences subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum PrefsCommand {
    /// Show current preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Switch between light and dark theme
    ToggleTheme,
    /// Set the theme
    SetTheme {
        /// light or dark
        #[arg(value_name = "THEME")]
        theme: String,
    },
}

#[derive(Debug, Serialize)]
struct PrefsOutput {
    theme: Theme,
    picker_background: &'static str,
}

impl PrefsArgs {
    /// Execute the prefs command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut session = ctx.session();

        match &self.command {
            PrefsCommand::Show { json } => {
                let theme = session.preferences().theme;
                let output = PrefsOutput {
                    theme,
                    picker_background: theme.picker_background(),
                };
                if *json {
                    return print_json(&output);
                }
                println!("Theme: {}", output.theme);
                println!("Picker background: {}", output.picker_background);
                Ok(())
            }
            PrefsCommand::ToggleTheme => {
                let theme = session.toggle_theme();
                session
                    .save_preferences(&mut ctx.store())
                    .map_err(save_failed("preferences"))?;
                println!("Theme set to {theme}.");
                Ok(())
            }
            PrefsCommand::SetTheme { theme } => {
                let theme = theme
                    .parse::<Theme>()
                    .map_err(|e| CliError::validation(e.to_string()))?;
                session.set_theme(theme);
                session
                    .save_preferences(&mut ctx.store())
                    .map_err(save_failed("preferences"))?;
                println!("Theme set to {theme}.");
                Ok(())
            }
        }
    }
}
