//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing tree documents and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tsptree_types::TreeDocument;

use crate::fixtures;

/// Declarative test environment builder.
///
/// Every command runs with `TSPTREE_CONFIG` pointing inside the temp dir, so a
/// developer's own config never leaks into tests.
///
/// # Example
/// ```no_run
/// use tsptree_testing::{TestWorld, fixtures};
/// use tsptree_types::TreeDocument;
///
/// let world = TestWorld::new()
///     .with_document("tree.json", &TreeDocument::new(fixtures::two_level()));
///
/// let result = world.run(&["show", "tree.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the config file commands will load.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write a tree document (relative to the temp root).
    pub fn with_document(self, name: &str, doc: &TreeDocument) -> Self {
        self.with_file(name, &fixtures::to_json(doc))
    }

    /// Write arbitrary file content (relative to the temp root).
    pub fn with_file(self, name: &str, content: &str) -> Self {
        std::fs::write(self.temp_dir.path().join(name), content).expect("Failed to write file");
        self
    }

    /// Write the config file commands will load.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.temp_dir.path())
            .env("TSPTREE_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// # Note
    /// This method uses `Command::cargo_bin()` which requires the binary to be
    /// built, which cargo test does automatically for the CLI crate.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tsptree")
            .map_err(|e| anyhow::anyhow!("Failed to find tsptree binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Execute a command with `input` piped to stdin.
    #[allow(deprecated)]
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tsptree")
            .map_err(|e| anyhow::anyhow!("Failed to find tsptree binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args).write_stdin(input.to_string());

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
