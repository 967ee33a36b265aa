//! Color history commands.

use crate::cli::common::{parse_color, print_json, save_failed, CliContext, CliResult};
use crate::models::HISTORY_CAPACITY;
use clap::{Args, Subcommand};

/// Manage recently used colors
#[derive(Debug, Clone, Args)]
pub struct HistoryArgs {
    /// History subcommand
    #[command(subcommand)]
    pub command: HistoryCommand,
}

/// History subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum HistoryCommand {
    /// List recent colors, newest first
    List(ListHistoryArgs),
    /// Record a color
    Add(AddHistoryArgs),
    /// Forget all recent colors
    Clear,
}

/// List recent colors
#[derive(Debug, Clone, Args)]
pub struct ListHistoryArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Record a color in history
#[derive(Debug, Clone, Args)]
pub struct AddHistoryArgs {
    /// Color as #RRGGBB or rgb(r, g, b)
    #[arg(value_name = "COLOR")]
    pub color: String,
}

impl HistoryArgs {
    /// Execute the history command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            HistoryCommand::List(args) => args.execute(ctx),
            HistoryCommand::Add(args) => args.execute(ctx),
            HistoryCommand::Clear => {
                let mut session = ctx.session();
                session.clear_history();
                session
                    .save_history(&mut ctx.store())
                    .map_err(save_failed("color history"))?;
                println!("History cleared.");
                Ok(())
            }
        }
    }
}

impl ListHistoryArgs {
    /// Execute the list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let session = ctx.session();
        let history = session.history();

        if self.json {
            return print_json(history);
        }

        if history.is_empty() {
            println!("No recent colors.");
        } else {
            println!("Recent colors ({}/{HISTORY_CAPACITY}):", history.len());
            for color in history.iter() {
                println!("  {color}");
            }
        }
        Ok(())
    }
}

impl AddHistoryArgs {
    /// Execute the add command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let mut session = ctx.session();

        if session.select_color(color) {
            session
                .save_history(&mut ctx.store())
                .map_err(save_failed("color history"))?;
            println!("Added {color} to history.");
        } else {
            println!("{color} is already in history.");
        }
        Ok(())
    }
}
