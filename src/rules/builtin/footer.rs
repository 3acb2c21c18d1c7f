// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules over footer notes and their placement.

use std::collections::BTreeSet;

use crate::commit::{is_footer_note, is_footer_reference, CommitMessage};
use crate::rules::Verdict;
use lazy_static::lazy_static;
use regex::Regex;

use super::RuleContext;

lazy_static! {
    /// Numeric bracket reference, `[1]`.
    static ref BRACKET_REFERENCE: Regex = Regex::new(r"\[([0-9]+)\]").unwrap();
}

pub fn footer_notes_misplacement(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let mut seen_footer = false;
    let mut offence = false;

    for line in message.body_lines() {
        if line.is_empty() {
            continue;
        }
        let footer_note = is_footer_note(line);
        seen_footer = seen_footer || footer_note;
        if seen_footer && !footer_note {
            offence = true;
            break;
        }
    }

    Verdict::check(
        offence,
        "Footer messages must be placed after body paragraphs, please move any message that starts with \"Fixes\", \"Closes\" or \"[i]\" to the end of the commmit message.",
    )
}

/// `[n]` keys cited in prose and in reference notes, respectively.
fn reference_sets<'a>(lines: &[&'a str]) -> (BTreeSet<&'a str>, BTreeSet<&'a str>) {
    let mut cited = BTreeSet::new();
    let mut listed = BTreeSet::new();

    for &line in lines {
        let target = if is_footer_reference(line) {
            &mut listed
        } else {
            &mut cited
        };
        for captures in BRACKET_REFERENCE.captures_iter(line) {
            if let Some(key) = captures.get(1) {
                target.insert(key.as_str());
            }
        }
    }

    (cited, listed)
}

pub fn footer_references_existence(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let (cited, listed) = reference_sets(&message.body_lines());
    let offence = cited != listed;
    Verdict::check(
        offence,
        "All references in the body must be mentioned in the footer, and vice versa.",
    )
}

pub fn footer_leading_blank(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let lines = message.body_lines();
    let offence = lines
        .iter()
        .position(|line| is_footer_note(line))
        .is_some_and(|start| start > 0 && !lines[start - 1].trim().is_empty());
    Verdict::check(
        offence,
        "Please leave a blank line between the body and the footer.",
    )
}

pub fn footer_max_line_length(message: &CommitMessage, ctx: &RuleContext) -> Verdict {
    let max = ctx.footer_max_line_length;
    let offence = message
        .footer_lines()
        .iter()
        .any(|line| line.chars().count() > max);
    Verdict::check(
        offence,
        format!("Please do not exceed {} characters in the lines of the footer.", max),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: fn(&CommitMessage, &RuleContext) -> Verdict, raw: &str) -> Verdict {
        rule(&CommitMessage::parse(raw).unwrap(), &RuleContext::default())
    }

    #[test]
    fn test_misplacement_footer_before_prose() {
        assert!(!run(
            footer_notes_misplacement,
            "core: x\n\nFixes bug.\nThis is more text."
        )
        .passed());
        assert!(!run(
            footer_notes_misplacement,
            "core: x\n\nFixes bug.\n\nThis is more text."
        )
        .passed());
    }

    #[test]
    fn test_misplacement_footer_last() {
        let raw = "core: x\n\nThis is text.\n\nFixes https://example.com/1\nCo-authored-by: Jo <jo@example.com>";
        assert!(run(footer_notes_misplacement, raw).passed());
        assert!(run(footer_notes_misplacement, "core: x").passed());
    }

    #[test]
    fn test_references_match() {
        let raw = "core: x\n\nAs shown in [1].\n\n[1] https://example.com";
        assert!(run(footer_references_existence, raw).passed());
    }

    #[test]
    fn test_references_missing_in_footer() {
        let raw = "core: x\n\nAs shown in [1] and [2].\n\n[1] https://example.com";
        assert!(!run(footer_references_existence, raw).passed());
    }

    #[test]
    fn test_references_extraneous_in_footer() {
        let raw = "core: x\n\nAs shown in [1].\n\n[1] https://example.com\n[2] https://example.org";
        assert!(!run(footer_references_existence, raw).passed());
    }

    #[test]
    fn test_references_ignore_named() {
        let raw = "core: x\n\nSee [bug] for context.";
        assert!(run(footer_references_existence, raw).passed());
    }

    #[test]
    fn test_reference_sets() {
        let lines = vec!["Both [1][2] here.", "[1] https://a.example", "[2] see [3]"];
        let (cited, listed) = reference_sets(&lines);
        assert_eq!(cited.into_iter().collect::<Vec<_>>(), vec!["1", "2"]);
        assert_eq!(listed.into_iter().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_footer_leading_blank() {
        let ok = "core: x\n\nText.\n\nFixes https://example.com/1";
        assert!(run(footer_leading_blank, ok).passed());
        let bad = "core: x\n\nText.\nFixes https://example.com/1";
        assert!(!run(footer_leading_blank, bad).passed());
        assert!(run(footer_leading_blank, "core: x\n\nFixes https://example.com/1").passed());
    }

    #[test]
    fn test_footer_max_line_length() {
        let long = format!("core: x\n\nText.\n\n[1] https://example.com/{}", "a".repeat(150));
        assert!(!run(footer_max_line_length, &long).passed());
        let short = "core: x\n\nText.\n\n[1] https://example.com/a";
        assert!(run(footer_max_line_length, short).passed());
    }
}
