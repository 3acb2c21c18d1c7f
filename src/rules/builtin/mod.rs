// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule bodies.
//!
//! Each rule is a plain function from the message and the [`RuleContext`]
//! to a [`Verdict`]. Rules never look at each other's results.

pub mod body;
pub mod footer;
pub mod header;

use crate::abbreviations::ABBREVIATIONS;
use crate::commit::CommitMessage;
use crate::config::LintConfig;
use regex::Regex;

use super::name::RuleName;
use super::verdict::Verdict;

/// Signature shared by every rule.
pub type RuleFn = fn(&CommitMessage, &RuleContext) -> Verdict;

/// A title abbreviation with its whole-word pattern.
#[derive(Debug, Clone)]
pub struct Abbreviation {
    pub word: String,
    pub replacement: String,
    pattern: Regex,
}

impl Abbreviation {
    fn new(word: String, replacement: String) -> Option<Self> {
        let pattern = match Regex::new(&format!(r"\b({})\b", regex::escape(&word))) {
            Ok(pattern) => pattern,
            Err(e) => {
                tracing::warn!("Skipping abbreviation {:?}: {}", word, e);
                return None;
            }
        };
        Some(Self {
            word,
            replacement,
            pattern,
        })
    }

    /// Whether `text` contains the word on word boundaries.
    pub fn is_in(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Options the rules read, resolved from configuration once per engine.
#[derive(Debug, Clone)]
pub struct RuleContext {
    /// Title length limit.
    pub header_max_length: usize,
    /// Wrap width for body lines.
    pub body_soft_max_line_length: usize,
    /// Hard limit for footer lines.
    pub footer_max_line_length: usize,
    /// Ordered abbreviations, words lowercase and unique.
    pub abbreviations: Vec<Abbreviation>,
    /// `owner/name` of the repository being linted, if known.
    pub repository: Option<String>,
}

impl RuleContext {
    /// Resolve the rule options from a configuration.
    pub fn from_config(config: &LintConfig) -> Self {
        let mut abbreviations: Vec<(String, String)> = ABBREVIATIONS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        for (key, value) in &config.abbreviations {
            let key = key.to_lowercase();
            match abbreviations.iter_mut().find(|(existing, _)| *existing == key) {
                Some(entry) => entry.1 = value.clone(),
                None => abbreviations.push((key, value.clone())),
            }
        }

        Self {
            header_max_length: config
                .max_length_for(RuleName::HeaderMaxLengthWithSuggestions)
                .unwrap_or(config.limits.header_max_length),
            body_soft_max_line_length: config.limits.body_soft_max_line_length,
            footer_max_line_length: config
                .max_length_for(RuleName::FooterMaxLineLength)
                .unwrap_or(config.limits.footer_max_line_length),
            abbreviations: abbreviations
                .into_iter()
                .filter_map(|(word, replacement)| Abbreviation::new(word, replacement))
                .collect(),
            repository: config.repository.clone().filter(|repo| !repo.is_empty()),
        }
    }
}

impl Default for RuleContext {
    fn default() -> Self {
        Self::from_config(&LintConfig::default())
    }
}

/// Text of the header before its first colon (area, scope and sub-area).
fn area_or_scope(header: &str) -> Option<&str> {
    header.find(':').map(|index| &header[..index])
}
