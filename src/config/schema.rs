// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines all configuration structures that can be loaded from cmlint.toml.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, LintError, Result};
use crate::rules::RuleName;

/// The main configuration structure for cmlint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LintConfig {
    /// `owner/name` of the linted repository, for commit-hash-alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Length limits.
    pub limits: LimitsConfig,

    /// Per-rule overrides, keyed by rule name.
    pub rules: BTreeMap<String, RuleSetting>,

    /// Extra title abbreviations.
    pub abbreviations: BTreeMap<String, String>,

    /// UI/UX configuration.
    pub ui: UiConfig,
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Effective severity of a rule.
    pub fn severity(&self, rule: RuleName) -> Severity {
        self.rules
            .get(rule.as_str())
            .and_then(|setting| setting.severity)
            .unwrap_or_else(|| rule.default_severity())
    }

    /// Whether the rule's verdict is taken as is or inverted.
    pub fn applicability(&self, rule: RuleName) -> Applicability {
        self.rules
            .get(rule.as_str())
            .map(|setting| setting.applicability)
            .unwrap_or_default()
    }

    /// Per-rule `max_length` override.
    pub fn max_length_for(&self, rule: RuleName) -> Option<usize> {
        self.rules
            .get(rule.as_str())
            .and_then(|setting| setting.max_length)
    }

    /// Reject unknown rule names and zero limits.
    pub fn validate(&self) -> Result<()> {
        for name in self.rules.keys() {
            RuleName::from_str(name).map_err(LintError::Config)?;
        }

        let limits = [
            ("limits.header_max_length", self.limits.header_max_length),
            (
                "limits.body_soft_max_line_length",
                self.limits.body_soft_max_line_length,
            ),
            ("limits.footer_max_line_length", self.limits.footer_max_line_length),
        ];
        let overrides = self.rules.iter().filter_map(|(name, setting)| {
            setting.max_length.map(|max| (name.as_str(), max))
        });

        for (key, value) in limits.into_iter().chain(overrides) {
            if value == 0 {
                return Err(LintError::Config(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: "must be greater than zero".to_string(),
                }));
            }
        }

        Ok(())
    }
}

/// Length limits shared by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum title length, in characters.
    pub header_max_length: usize,

    /// Wrap width for body lines.
    pub body_soft_max_line_length: usize,

    /// Maximum footer line length.
    pub footer_max_line_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            header_max_length: 50,
            body_soft_max_line_length: 64,
            footer_max_line_length: 150,
        }
    }
}

/// Override for a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuleSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    pub applicability: Applicability,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// How a failing rule is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "SeverityRepr")]
pub enum Severity {
    Disabled = 0,
    Warning = 1,
    Error = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Disabled => "disabled",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severities are written either by name or as `0 | 1 | 2`.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Level(u8),
    Name(String),
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = String;

    fn try_from(repr: SeverityRepr) -> std::result::Result<Self, String> {
        match repr {
            SeverityRepr::Level(0) => Ok(Severity::Disabled),
            SeverityRepr::Level(1) => Ok(Severity::Warning),
            SeverityRepr::Level(2) => Ok(Severity::Error),
            SeverityRepr::Level(level) => Err(format!("invalid severity level {}", level)),
            SeverityRepr::Name(name) => match name.to_lowercase().as_str() {
                "disabled" | "off" => Ok(Severity::Disabled),
                "warning" | "warn" => Ok(Severity::Warning),
                "error" => Ok(Severity::Error),
                _ => Err(format!("invalid severity '{}'", name)),
            },
        }
    }
}

/// Whether a rule's verdict is used as is or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Applicability {
    #[default]
    Always,
    Never,
}

/// UI/UX configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether to use colors.
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}
