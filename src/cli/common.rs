//! Shared plumbing for CLI commands: error type, exit codes and the
//! per-invocation context (config, data file, session).

use crate::config::Config;
use crate::models::RgbColor;
use crate::services::{JsonFileStore, Session};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad input: unparseable color, unknown palette, invalid option
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Exit code the process ends with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Configuration and storage shared by the commands of one invocation.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// Data file backing the store
    pub data_file: PathBuf,
}

impl CliContext {
    /// Loads the config and resolves the data file, preferring `data_file_override`.
    pub fn load(data_file_override: Option<&Path>) -> CliResult<Self> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let data_file = match data_file_override {
            Some(path) => path.to_path_buf(),
            None => config
                .data_file_path()
                .map_err(|e| CliError::io(format!("Failed to resolve data file: {e:#}")))?,
        };

        tracing::debug!(data_file = %data_file.display(), "using data file");
        Ok(Self { config, data_file })
    }

    /// Store over the data file.
    #[must_use]
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_file)
    }

    /// Session loaded from the data file.
    #[must_use]
    pub fn session(&self) -> Session {
        Session::load(&self.store(), &self.config)
    }
}

/// Parses a `#rrggbb` or `rgb(r, g, b)` argument.
pub fn parse_color(value: &str) -> CliResult<RgbColor> {
    RgbColor::parse_css(value).map_err(|e| CliError::validation(e.to_string()))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Copies `text` to the clipboard and reports it on stderr.
pub fn copy_to_clipboard(text: &str) -> CliResult<()> {
    crate::clipboard::copy_text(text).map_err(|e| CliError::io(format!("{e:#}")))?;
    eprintln!("Copied to clipboard.");
    Ok(())
}

/// Maps a store write failure to an I/O error.
pub fn save_failed(what: &str) -> impl FnOnce(anyhow::Error) -> CliError + '_ {
    move |e| CliError::io(format!("Failed to save {what}: {e:#}"))
}
