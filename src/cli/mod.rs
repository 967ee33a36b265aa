//! CLI command handlers for Huepick.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method that
//! returns a [`CliResult`]. Commands that touch saved data receive a
//! [`CliContext`] holding the loaded config and the data file location.

pub mod blend;
pub mod common;
pub mod config;
pub mod convert;
pub mod export;
pub mod harmony;
pub mod history;
pub mod library;
pub mod palette;
pub mod pick;
pub mod prefs;
pub mod shades;

// Re-export types used by main.rs and tests
pub use blend::BlendArgs;
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use export::ExportArgs;
pub use harmony::HarmonyArgs;
pub use history::HistoryArgs;
pub use library::LibraryArgs;
pub use palette::PaletteArgs;
pub use pick::PickArgs;
pub use prefs::PrefsArgs;
pub use shades::ShadesArgs;
