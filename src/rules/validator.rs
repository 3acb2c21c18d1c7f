// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::config::Severity;
use console::{style, Style};

use super::name::RuleName;

/// A failing rule, with the severity it was configured at.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Rule that failed.
    pub rule: RuleName,
    /// Diagnostic, including the guidelines suffix.
    pub message: String,
    /// Warning or error.
    pub severity: Severity,
}

impl ValidationIssue {
    /// Whether this issue fails the run.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Format the issue for terminal output.
    pub fn format(&self) -> String {
        let (prefix, code_style) = if self.is_error() {
            (style("✗").red().bold(), Style::new().red())
        } else {
            (style("⚠").yellow().bold(), Style::new().yellow())
        };

        let mut lines = self.message.lines();
        let mut output = format!(
            "{} {} {}",
            prefix,
            code_style.apply_to(self.rule.as_str()),
            lines.next().unwrap_or_default()
        );

        for line in lines {
            output.push_str(&format!("\n  {} {}", style("→").dim(), style(line).dim()));
        }

        output
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "rule": self.rule,
            "severity": self.severity,
            "message": self.message,
        })
    }
}

/// Result of linting one commit message.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Title of the linted message.
    pub header: String,
    /// Commit SHA when linting an existing commit.
    pub commit_sha: Option<String>,
    /// Failing rules configured as errors.
    pub errors: Vec<ValidationIssue>,
    /// Failing rules configured as warnings.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create an empty result for a message title.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            commit_sha: None,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record a failing rule under its severity.
    pub fn push(&mut self, issue: ValidationIssue) {
        match issue.severity {
            Severity::Error => self.errors.push(issue),
            Severity::Warning => self.warnings.push(issue),
            Severity::Disabled => {}
        }
    }

    /// Check if the validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };
        match self.commit_sha {
            Some(ref sha) => {
                let short_sha = &sha[..7.min(sha.len())];
                println!("{} {} {}", status, style(short_sha).cyan(), self.header);
            }
            None => println!("{} {}", status, self.header),
        }

        for error in &self.errors {
            println!("  {}", error.format());
        }

        for warning in &self.warnings {
            println!("  {}", warning.format());
        }
    }

    /// JSON form of the result.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "valid": self.is_valid(),
            "commit": self.commit_sha,
            "header": self.header,
            "errors": self.errors.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
            "warnings": self.warnings.iter().map(ValidationIssue::to_json).collect::<Vec<_>>(),
        })
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(rule: RuleName, severity: Severity) -> ValidationIssue {
        ValidationIssue {
            rule,
            message: "First line.\nSecond line.".to_string(),
            severity,
        }
    }

    #[test]
    fn test_validation_result_valid() {
        let result = ValidationResult::new("core: add parser");
        assert!(result.is_valid());
        assert!(result.errors.is_empty() && result.warnings.is_empty());
    }

    #[test]
    fn test_push_sorts_by_severity() {
        let mut result = ValidationResult::new("core: add parser");
        result.push(issue(RuleName::BodyProse, Severity::Error));
        result.push(issue(RuleName::TypeEmpty, Severity::Warning));
        result.push(issue(RuleName::EmptyWip, Severity::Disabled));

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_validation_issue_format() {
        let formatted = issue(RuleName::BodyProse, Severity::Error).format();
        assert!(formatted.contains("body-prose"));
        assert!(formatted.contains("First line."));
        assert!(formatted.contains("Second line."));
    }

    #[test]
    fn test_to_json() {
        let mut result = ValidationResult::new("core: add parser");
        result.push(issue(RuleName::TooManySpaces, Severity::Error));
        let json = result.to_json();
        assert_eq!(json["valid"], false);
        assert_eq!(json["errors"][0]["rule"], "too-many-spaces");
        assert_eq!(json["errors"][0]["severity"], "error");
    }
}
