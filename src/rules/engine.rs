// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine for commit validation.

use crate::commit::CommitMessage;
use crate::config::{Applicability, LintConfig, Severity};
use crate::error::Result;
use crate::git;

use super::builtin::RuleContext;
use super::name::RuleName;
use super::validator::{ValidationIssue, ValidationResult};
use super::verdict::Verdict;

/// Rule engine for validating commit messages.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    config: LintConfig,
    context: RuleContext,
}

impl RuleEngine {
    /// Create a new rule engine with the given configuration.
    pub fn new(config: LintConfig) -> Self {
        let context = RuleContext::from_config(&config);
        Self { config, context }
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Options handed to every rule.
    pub fn context(&self) -> &RuleContext {
        &self.context
    }

    /// Run one rule, honouring its configured applicability.
    pub fn evaluate(&self, rule: RuleName, message: &CommitMessage) -> Verdict {
        let verdict = (rule.evaluator())(message, &self.context);
        match self.config.applicability(rule) {
            Applicability::Always => verdict,
            Applicability::Never => verdict.inverted(),
        }
    }

    /// Validate a commit message against every enabled rule.
    pub fn validate(&self, message: &CommitMessage) -> ValidationResult {
        let mut result = ValidationResult::new(message.header());

        for &rule in RuleName::all() {
            let severity = self.config.severity(rule);
            if severity == Severity::Disabled {
                continue;
            }

            let verdict = self.evaluate(rule, message);
            tracing::debug!(rule = rule.as_str(), passed = verdict.passed(), "Evaluated rule");
            if !verdict.passed() {
                result.push(ValidationIssue {
                    rule,
                    message: verdict.message(),
                    severity,
                });
            }
        }

        result
    }

    /// Validate a commit message string.
    pub fn validate_string(&self, message: &str) -> Result<ValidationResult> {
        let parsed = CommitMessage::parse(message)?;
        Ok(self.validate(&parsed))
    }

    /// Check a specific commit by reference.
    pub fn check_commit(&self, reference: &str) -> Result<ValidationResult> {
        let message = git::get_commit_message(reference)?;
        self.validate_string(&message)
    }

    /// Check a range of commits.
    pub fn check_range(&self, range: &str) -> Result<Vec<ValidationResult>> {
        let commits = git::get_commit_range(range)?;
        let mut results = Vec::new();

        for (oid, message) in commits {
            let mut result = self.validate_string(&message)?;
            result.commit_sha = Some(oid);
            results.push(result);
        }

        Ok(results)
    }

    /// Every rule with its effective severity, in registry order.
    pub fn rules(&self) -> Vec<(RuleName, Severity)> {
        RuleName::all()
            .iter()
            .map(|&rule| (rule, self.config.severity(rule)))
            .collect()
    }
}
