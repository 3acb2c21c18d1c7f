// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! cmlint - commit message linter
//!
//! Checks commit messages against a fixed set of house style rules and
//! reports a pass/fail verdict with a diagnostic for each one.
//!
//! # Features
//!
//! - **Typed rule registry**: every rule name maps to one evaluator
//! - **Configurable severities**: disable, warn or fail per rule
//! - **Git integration**: lint single commits or whole ranges
//! - **Hook friendly**: `cmlint lint --file "$1"` in a `commit-msg` hook
//!
//! # Example
//!
//! ```no_run
//! use cmlint::config::LintConfig;
//! use cmlint::rules::RuleEngine;
//!
//! let engine = RuleEngine::new(LintConfig::load().unwrap());
//! let result = engine.validate_string("core: add parser").unwrap();
//!
//! for issue in &result.errors {
//!     println!("{}: {}", issue.rule, issue.message);
//! }
//! ```

// Module declarations
pub mod abbreviations;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod rules;

// Re-exports for convenience
pub use commit::CommitMessage;
pub use config::LintConfig;
pub use error::{LintError, Result};
pub use rules::{RuleEngine, RuleName, Verdict};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of cmlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
