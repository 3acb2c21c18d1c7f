// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The closed set of rules and their registry.

use crate::config::Severity;
use crate::error::ConfigError;
use serde::Serialize;

use super::builtin::{body, footer, header, RuleFn};

/// Every rule the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleName {
    BodyLeadingBlank,
    BodyProse,
    BodySoftMaxLineLength,
    CommitHashAlone,
    EmptyWip,
    FooterLeadingBlank,
    FooterMaxLineLength,
    FooterNotesMisplacement,
    FooterReferencesExistence,
    HeaderMaxLengthWithSuggestions,
    PreferSlashOverBackslash,
    ProperIssueRefs,
    SubjectFullStop,
    SubjectLowercase,
    TitleUppercase,
    TooManySpaces,
    TrailingWhitespace,
    TypeEmpty,
    TypeSpaceAfterColon,
    TypeSpaceAfterComma,
    TypeSpaceBeforeParen,
    TypeWithSquareBrackets,
}

impl RuleName {
    /// Get the configuration name of the rule.
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::BodyLeadingBlank => "body-leading-blank",
            RuleName::BodyProse => "body-prose",
            RuleName::BodySoftMaxLineLength => "body-soft-max-line-length",
            RuleName::CommitHashAlone => "commit-hash-alone",
            RuleName::EmptyWip => "empty-wip",
            RuleName::FooterLeadingBlank => "footer-leading-blank",
            RuleName::FooterMaxLineLength => "footer-max-line-length",
            RuleName::FooterNotesMisplacement => "footer-notes-misplacement",
            RuleName::FooterReferencesExistence => "footer-references-existence",
            RuleName::HeaderMaxLengthWithSuggestions => "header-max-length-with-suggestions",
            RuleName::PreferSlashOverBackslash => "prefer-slash-over-backslash",
            RuleName::ProperIssueRefs => "proper-issue-refs",
            RuleName::SubjectFullStop => "subject-full-stop",
            RuleName::SubjectLowercase => "subject-lowercase",
            RuleName::TitleUppercase => "title-uppercase",
            RuleName::TooManySpaces => "too-many-spaces",
            RuleName::TrailingWhitespace => "trailing-whitespace",
            RuleName::TypeEmpty => "type-empty",
            RuleName::TypeSpaceAfterColon => "type-space-after-colon",
            RuleName::TypeSpaceAfterComma => "type-space-after-comma",
            RuleName::TypeSpaceBeforeParen => "type-space-before-paren",
            RuleName::TypeWithSquareBrackets => "type-with-square-brackets",
        }
    }

    /// One-line description for `cmlint rules`.
    pub fn description(&self) -> &'static str {
        match self {
            RuleName::BodyLeadingBlank => "Blank line between title and body",
            RuleName::BodyProse => "Paragraphs start uppercase and end like sentences",
            RuleName::BodySoftMaxLineLength => "Body lines are wrapped",
            RuleName::CommitHashAlone => "Commits of this repository are cited by hash, not URL",
            RuleName::EmptyWip => "WIP titles carry a description",
            RuleName::FooterLeadingBlank => "Blank line between body and footer",
            RuleName::FooterMaxLineLength => "Footer lines stay under the hard limit",
            RuleName::FooterNotesMisplacement => "Footer notes come after the body",
            RuleName::FooterReferencesExistence => "Every [n] reference has a footer entry and vice versa",
            RuleName::HeaderMaxLengthWithSuggestions => "Title length limit, with abbreviation hints",
            RuleName::PreferSlashOverBackslash => "Area/scope uses / rather than \\",
            RuleName::ProperIssueRefs => "Issues are linked by URL, not #123",
            RuleName::SubjectFullStop => "Title does not end with a dot",
            RuleName::SubjectLowercase => "Subject after the area starts lowercase",
            RuleName::TitleUppercase => "Title without area starts uppercase",
            RuleName::TooManySpaces => "No runs of spaces inside sentences",
            RuleName::TrailingWhitespace => "No leading or trailing whitespace on lines",
            RuleName::TypeEmpty => "Title has an area",
            RuleName::TypeSpaceAfterColon => "Space after the area colon",
            RuleName::TypeSpaceAfterComma => "No space after commas in the area",
            RuleName::TypeSpaceBeforeParen => "No space before parentheses in the area",
            RuleName::TypeWithSquareBrackets => "Area is not wrapped in square brackets",
        }
    }

    /// Severity used when the configuration does not mention the rule.
    pub fn default_severity(&self) -> Severity {
        match self {
            RuleName::BodyLeadingBlank | RuleName::FooterLeadingBlank | RuleName::TypeEmpty => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// The function implementing the rule.
    pub fn evaluator(&self) -> RuleFn {
        match self {
            RuleName::BodyLeadingBlank => body::body_leading_blank,
            RuleName::BodyProse => body::body_prose,
            RuleName::BodySoftMaxLineLength => body::body_soft_max_line_length,
            RuleName::CommitHashAlone => body::commit_hash_alone,
            RuleName::EmptyWip => header::empty_wip,
            RuleName::FooterLeadingBlank => footer::footer_leading_blank,
            RuleName::FooterMaxLineLength => footer::footer_max_line_length,
            RuleName::FooterNotesMisplacement => footer::footer_notes_misplacement,
            RuleName::FooterReferencesExistence => footer::footer_references_existence,
            RuleName::HeaderMaxLengthWithSuggestions => header::header_max_length_with_suggestions,
            RuleName::PreferSlashOverBackslash => header::prefer_slash_over_backslash,
            RuleName::ProperIssueRefs => body::proper_issue_refs,
            RuleName::SubjectFullStop => header::subject_full_stop,
            RuleName::SubjectLowercase => header::subject_lowercase,
            RuleName::TitleUppercase => header::title_uppercase,
            RuleName::TooManySpaces => body::too_many_spaces,
            RuleName::TrailingWhitespace => body::trailing_whitespace,
            RuleName::TypeEmpty => header::type_empty,
            RuleName::TypeSpaceAfterColon => header::type_space_after_colon,
            RuleName::TypeSpaceAfterComma => header::type_space_after_comma,
            RuleName::TypeSpaceBeforeParen => header::type_space_before_paren,
            RuleName::TypeWithSquareBrackets => header::type_with_square_brackets,
        }
    }

    /// Get all rules, in name order.
    pub fn all() -> &'static [RuleName] {
        &[
            RuleName::BodyLeadingBlank,
            RuleName::BodyProse,
            RuleName::BodySoftMaxLineLength,
            RuleName::CommitHashAlone,
            RuleName::EmptyWip,
            RuleName::FooterLeadingBlank,
            RuleName::FooterMaxLineLength,
            RuleName::FooterNotesMisplacement,
            RuleName::FooterReferencesExistence,
            RuleName::HeaderMaxLengthWithSuggestions,
            RuleName::PreferSlashOverBackslash,
            RuleName::ProperIssueRefs,
            RuleName::SubjectFullStop,
            RuleName::SubjectLowercase,
            RuleName::TitleUppercase,
            RuleName::TooManySpaces,
            RuleName::TrailingWhitespace,
            RuleName::TypeEmpty,
            RuleName::TypeSpaceAfterColon,
            RuleName::TypeSpaceAfterComma,
            RuleName::TypeSpaceBeforeParen,
            RuleName::TypeWithSquareBrackets,
        ]
    }
}

impl std::str::FromStr for RuleName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::all()
            .iter()
            .copied()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownRule {
                name: s.to_string(),
            })
    }
}

impl std::fmt::Display for RuleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
