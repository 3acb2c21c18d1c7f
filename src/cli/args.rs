// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// cmlint - commit message linter
///
/// Checks commit messages against the house workflow guidelines.
#[derive(Parser, Debug)]
#[command(name = "cmlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Commit message linter", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Treat warnings as errors
    #[arg(long, global = true, env = "CMLINT_STRICT")]
    pub strict: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "CMLINT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a single commit message (stdin by default)
    Lint(LintArgs),

    /// Lint commits already in the repository
    Check(CheckArgs),

    /// List rules with their effective severity
    Rules,

    /// Write an example cmlint.toml
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Args, Debug, Default, Clone)]
pub struct LintArgs {
    /// Read the message from a file (e.g. the commit-msg hook argument)
    #[arg(short, long, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Lint the given message text
    #[arg(short, long)]
    pub message: Option<String>,

    /// Treat the input as a JSON object with "header" and "raw" fields
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the check command.
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Commit or range to check
    #[arg(default_value = "HEAD")]
    pub target: String,

    /// Check all commits in a range
    #[arg(long)]
    pub range: bool,
}

/// Arguments for the init command.
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            target: "HEAD".to_string(),
            range: false,
        }
    }
}

impl CheckArgs {
    /// Whether the target names a range rather than one commit.
    pub fn is_range(&self) -> bool {
        self.range || self.target.contains("..")
    }
}
