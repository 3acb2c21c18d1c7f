// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the cmlint application.
//!
//! Style violations are never errors: a rule that finds one returns a
//! failing [`Verdict`](crate::rules::Verdict). The types here cover the
//! failures around the linter itself (configuration, git access, malformed
//! runner input, I/O).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cmlint operations.
#[derive(Error, Debug)]
pub enum LintError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Rule-runner input errors
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    // Validation outcome
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Unknown rule '{name}' in configuration")]
    UnknownRule { name: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Configuration file already exists: {path}")]
    AlreadyExists { path: PathBuf },
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Failed to open repository: {message}")]
    OpenFailed { message: String },

    #[error("Invalid commit reference: {reference}")]
    InvalidReference { reference: String },

    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::OpenFailed {
            message: err.message().to_string(),
        }
    }
}

/// Errors in the fields handed over by a rule runner.
///
/// These are integration bugs, not style problems, so they abort the run
/// instead of turning into a failing rule.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("AssertionError: expected a string for '{field}' (found {found})")]
    ExpectedString { field: String, found: String },

    #[error("AssertionError: expected a JSON object with a 'raw' field")]
    ExpectedObject,

    #[error("AssertionError: expected a single-line header (found {header:?})")]
    MultiLineHeader { header: String },

    #[error("Empty commit message")]
    EmptyMessage,
}

/// Validation outcome errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{errors} error(s) and {warnings} warning(s) found")]
    Failed { errors: usize, warnings: usize },
}

/// Result type alias for cmlint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
