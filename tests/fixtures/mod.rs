//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every helper

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the huepick binary (set by cargo at compile time)
pub fn huepick_bin() -> &'static str {
    env!("CARGO_BIN_EXE_huepick")
}

/// Isolated config directory; history, palettes and preferences land in `data.json` inside it.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Config directory with the theme pinned to light so OS detection never leaks in.
    pub fn with_light_theme() -> Self {
        let env = Self::new();
        std::fs::write(
            env.dir.path().join("config.toml"),
            "[ui]\ntheme_mode = \"Light\"\n",
        )
        .expect("Failed to write config");
        env
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(huepick_bin());
        cmd.env("HUEPICK_CONFIG_DIR", self.dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args).output().expect("Failed to execute command")
    }

    /// Runs and asserts exit code 0, returning stdout.
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_eq!(
            output.status.code(),
            Some(0),
            "{args:?} should succeed. stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Runs and parses stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_ok(args);
        serde_json::from_str(&stdout).expect("Should parse JSON output")
    }

    /// Raw contents of the data file as JSON.
    pub fn stored(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.data_file()).expect("Data file should exist");
        serde_json::from_str(&content).expect("Data file should be JSON")
    }
}
