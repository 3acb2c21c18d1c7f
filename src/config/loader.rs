// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and merging.

use crate::error::{ConfigError, LintError, Result};
use std::path::{Path, PathBuf};

use super::schema::{LimitsConfig, LintConfig};

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &["cmlint.toml", ".cmlint.toml", ".config/cmlint.toml"];

/// Environment variable naming the repository in CI.
const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";

/// Find the repository configuration file in the current directory or its parents.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the repository configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            return None;
        }
    }
}

/// Find the per-user configuration file (home directory, then XDG config dir).
pub fn find_user_config_file() -> Option<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    let config_dir = dirs::config_dir()?;
    let user_config = config_dir.join("cmlint").join("config.toml");
    user_config.exists().then_some(user_config)
}

/// Load configuration from the default locations.
///
/// The repository file is laid over the user file; either may be missing.
pub fn load_config() -> Result<LintConfig> {
    let user = find_user_config_file();
    let repo = find_config_file();

    let config = match (user, repo) {
        (Some(user), Some(repo)) if user != repo => {
            merge_configs(read_config(&user)?, read_config(&repo)?)
        }
        (_, Some(path)) | (Some(path), None) => read_config(&path)?,
        (None, None) => {
            tracing::debug!("No configuration file found, using defaults");
            LintConfig::default()
        }
    };

    Ok(with_env_repository(config))
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    read_config(path).map(with_env_repository)
}

fn read_config(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(LintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    parse_config(&content)
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    let config: LintConfig = toml::from_str(content).map_err(|e| {
        LintError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })?;
    config.validate()?;
    Ok(config)
}

/// Fill in the repository from the environment when the file names none.
fn with_env_repository(mut config: LintConfig) -> LintConfig {
    if config.repository.is_none() {
        config.repository = std::env::var(REPOSITORY_ENV)
            .ok()
            .filter(|repo| !repo.is_empty());
        if let Some(ref repo) = config.repository {
            tracing::debug!("Using repository {} from {}", repo, REPOSITORY_ENV);
        }
    }
    config
}

/// Merge two configurations, with the overlay taking precedence.
pub fn merge_configs(base: LintConfig, overlay: LintConfig) -> LintConfig {
    let mut rules = base.rules;
    rules.extend(overlay.rules);

    let mut abbreviations = base.abbreviations;
    abbreviations.extend(overlay.abbreviations);

    LintConfig {
        repository: overlay.repository.or(base.repository),
        limits: merge_limits(base.limits, overlay.limits),
        rules,
        abbreviations,
        ui: overlay.ui,
    }
}

fn merge_limits(base: LimitsConfig, overlay: LimitsConfig) -> LimitsConfig {
    let defaults = LimitsConfig::default();
    LimitsConfig {
        header_max_length: if overlay.header_max_length != defaults.header_max_length {
            overlay.header_max_length
        } else {
            base.header_max_length
        },
        body_soft_max_line_length: if overlay.body_soft_max_line_length
            != defaults.body_soft_max_line_length
        {
            overlay.body_soft_max_line_length
        } else {
            base.body_soft_max_line_length
        },
        footer_max_line_length: if overlay.footer_max_line_length
            != defaults.footer_max_line_length
        {
            overlay.footer_max_line_length
        } else {
            base.footer_max_line_length
        },
    }
}
