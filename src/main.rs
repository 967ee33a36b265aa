//! Huepick - color picker for the terminal
//!
//! Converts colors between notations, builds harmonies and blends, and keeps
//! a history and saved palettes that can be exported for design tools.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use huepick::cli::{
    BlendArgs, CliContext, CliResult, ConfigArgs, ConvertArgs, ExportArgs, HarmonyArgs,
    HistoryArgs, LibraryArgs, PaletteArgs, PickArgs, PrefsArgs, ShadesArgs,
};

/// Huepick - color conversions, harmonies and palettes
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Data file for history, palettes and preferences (overrides config)
    #[arg(long, value_name = "PATH", global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a color between notations
    Convert(ConvertArgs),
    /// Select a color from hex, RGB, HSL or slider values
    Pick(PickArgs),
    /// Generate a color harmony
    Harmony(HarmonyArgs),
    /// Blend two colors
    Blend(BlendArgs),
    /// Show darker and lighter variants of a color
    Shades(ShadesArgs),
    /// Manage recently used colors
    History(HistoryArgs),
    /// Manage saved palettes
    Palette(PaletteArgs),
    /// Export a color as a code snippet
    Export(ExportArgs),
    /// List built-in color sets
    Library(LibraryArgs),
    /// Show or change user preferences
    Prefs(PrefsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    let context = || CliContext::load(cli.data_file.as_deref());

    match &cli.command {
        Command::Convert(args) => args.execute(&context()?),
        Command::Pick(args) => args.execute(&context()?),
        Command::Harmony(args) => args.execute(&context()?),
        Command::Blend(args) => args.execute(),
        Command::Shades(args) => args.execute(),
        Command::History(args) => args.execute(&context()?),
        Command::Palette(args) => args.execute(&context()?),
        Command::Export(args) => args.execute(&context()?),
        Command::Library(args) => args.execute(),
        Command::Prefs(args) => args.execute(&context()?),
        Command::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
