// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules over the title line.

use crate::commit::{is_proper_noun, word_is_start_of_sentence, CommitMessage};
use lazy_static::lazy_static;
use regex::Regex;

use super::{area_or_scope, RuleContext};
use crate::rules::Verdict;

lazy_static! {
    static ref SQUARE_BRACKET_AREA: Regex = Regex::new(r"^\[.*\]").unwrap();

    /// `type(scope)!: subject`, with a non-empty type.
    static ref TYPED_HEADER: Regex = Regex::new(r"^\w+(?:\(.*\))?!?: ").unwrap();
}

/// Index of the first colon, ignoring a colon that opens the header.
fn area_colon(header: &str) -> Option<usize> {
    header.find(':').filter(|&index| index > 0)
}

pub fn empty_wip(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = message.header().to_lowercase() == "wip";
    Verdict::check(
        offence,
        "Please add a number or description after the WIP prefix.",
    )
}

/// Title length limit. Over-long titles get abbreviation hints for the
/// words after the area.
pub fn header_max_length_with_suggestions(message: &CommitMessage, ctx: &RuleContext) -> Verdict {
    let header = message.header();
    let max = ctx.header_max_length;
    let length = header.chars().count();

    let mut text = format!(
        "Please do not exceed {} characters in title (found {}).",
        max, length
    );

    let offence = !header.starts_with("Merge ") && length > max;
    if offence {
        let title_without_area = match area_colon(header) {
            Some(index) => &header[index..],
            None => header,
        };
        let title = title_without_area.to_lowercase();

        let suggestions: Vec<String> = ctx
            .abbreviations
            .iter()
            .filter(|entry| entry.is_in(&title))
            .map(|entry| format!("\"{}\" -> \"{}\"\n", entry.word, entry.replacement))
            .collect();

        if !suggestions.is_empty() {
            text.push_str(" The following replacement(s) in your commit title are recommended:\n");
            text.extend(suggestions);
        }
    }

    Verdict::check(offence, text)
}

pub fn prefer_slash_over_backslash(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = area_or_scope(message.header()).is_some_and(|area| area.contains('\\'));
    Verdict::check(
        offence,
        "Please use slash instead of backslash in the area/scope/sub-area section of the title.",
    )
}

pub fn title_uppercase(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let header = message.header();
    let first_word = header.split(' ').next().unwrap_or_default();
    let offence = !header.contains(':')
        && !word_is_start_of_sentence(first_word)
        && !is_proper_noun(first_word);
    Verdict::check(
        offence,
        "Please start the title with an upper-case letter if there is no area in the title.",
    )
}

pub fn type_space_after_colon(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let header = message.header();
    let offence = area_colon(header)
        .and_then(|index| header[index + 1..].chars().next())
        .is_some_and(|next| next != ' ');
    Verdict::check(
        offence,
        "Please place a space after the first colon character in your commit message title",
    )
}

pub fn type_with_square_brackets(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = SQUARE_BRACKET_AREA.is_match(message.header());
    Verdict::check(
        offence,
        "Please use \"area/scope: subject\" or \"area(scope): subject\" style instead of wrapping area/scope under square brackets in your commit message title",
    )
}

pub fn subject_lowercase(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let header = message.header();
    let offence = area_colon(header).is_some_and(|index| {
        let subject = header[index + 1..].trim();
        subject.chars().count() > 1
            && word_is_start_of_sentence(subject.split(' ').next().unwrap_or_default())
    });
    Verdict::check(
        offence,
        "Please use lowercase as the first letter for your subject, i.e. the text after your area/scope.",
    )
}

pub fn type_space_after_comma(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = area_or_scope(message.header()).is_some_and(|area| {
        area.match_indices(',')
            .any(|(index, _)| area[index + 1..].starts_with(' '))
    });
    Verdict::check(
        offence,
        "No need to use space after comma in the area/scope (so that commit title can be shorter).",
    )
}

pub fn type_space_before_paren(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = area_or_scope(message.header()).is_some_and(|area| {
        area.match_indices('(')
            .any(|(index, _)| area[..index].ends_with(' '))
    });
    Verdict::check(
        offence,
        "No need to use space before parentheses in the area/scope/sub-area section of the title.",
    )
}

pub fn subject_full_stop(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = message.header().ends_with('.');
    Verdict::check(offence, "Please do not end the title with a dot.")
}

pub fn type_empty(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = !TYPED_HEADER.is_match(message.header());
    Verdict::check(
        offence,
        "Please prefix the title with the area it touches, e.g. \"area: subject\".",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: fn(&CommitMessage, &RuleContext) -> Verdict, header: &str) -> Verdict {
        rule(&CommitMessage::parse(header).unwrap(), &RuleContext::default())
    }

    #[test]
    fn test_empty_wip() {
        assert!(!run(empty_wip, "wip").passed());
        assert!(!run(empty_wip, "WIP").passed());
        assert!(run(empty_wip, "wip: add parser skeleton").passed());
        assert!(run(empty_wip, "WIP 3").passed());
    }

    #[test]
    fn test_header_max_length_passes_short_title() {
        assert!(run(header_max_length_with_suggestions, "core: add parser").passed());
    }

    #[test]
    fn test_header_max_length_exempts_merge() {
        let header = format!("Merge branch 'foo' {}", "x".repeat(61));
        assert_eq!(header.chars().count(), 80);
        assert!(run(header_max_length_with_suggestions, &header).passed());
    }

    #[test]
    fn test_header_max_length_counts_chars() {
        let header = format!("core: {}", "é".repeat(44));
        assert_eq!(header.chars().count(), 50);
        assert!(run(header_max_length_with_suggestions, &header).passed());
    }

    #[test]
    fn test_header_max_length_suggestions() {
        let verdict = run(
            header_max_length_with_suggestions,
            "configuration: update the configuration of the repository and docs",
        );
        assert!(!verdict.passed());
        let message = verdict.message();
        assert!(message.starts_with("Please do not exceed 50 characters in title (found 66)."));
        assert_eq!(
            message
                .matches("The following replacement(s) in your commit title are recommended")
                .count(),
            1
        );
        assert_eq!(message.matches("\"configuration\" -> \"config\"").count(), 1);
        assert!(message.contains("\"repository\" -> \"repo\""));
        assert!(!message.contains("\"documentation\""));
    }

    #[test]
    fn test_header_max_length_without_matches() {
        let verdict = run(header_max_length_with_suggestions, &"x".repeat(51));
        assert!(!verdict.passed());
        assert!(!verdict.message().contains("recommended"));
    }

    #[test]
    fn test_header_max_length_custom_limit() {
        let ctx = RuleContext {
            header_max_length: 10,
            ..RuleContext::default()
        };
        let message = CommitMessage::parse("core: add parser").unwrap();
        assert!(!header_max_length_with_suggestions(&message, &ctx).passed());
    }

    #[test]
    fn test_prefer_slash_over_backslash() {
        assert!(!run(prefer_slash_over_backslash, "front\\ui: fix").passed());
        assert!(run(prefer_slash_over_backslash, "front/ui: fix").passed());
        assert!(run(prefer_slash_over_backslash, "Fix path C\\foo").passed());
        assert!(run(prefer_slash_over_backslash, "core: use C:\\ paths").passed());
    }

    #[test]
    fn test_title_uppercase() {
        assert!(run(title_uppercase, "Add parser").passed());
        assert!(run(title_uppercase, "iOS support").passed());
        assert!(run(title_uppercase, "core: add parser").passed());
        assert!(!run(title_uppercase, "add parser").passed());
    }

    #[test]
    fn test_type_space_after_colon() {
        assert!(run(type_space_after_colon, "fix(parser): Add new feature.").passed());
        assert!(!run(type_space_after_colon, "core:add parser").passed());
        assert!(run(type_space_after_colon, "Title without area").passed());
        assert!(run(type_space_after_colon, "trailing colon:").passed());
    }

    #[test]
    fn test_type_with_square_brackets() {
        assert!(!run(type_with_square_brackets, "[core] add parser").passed());
        assert!(run(type_with_square_brackets, "core: add [draft] parser").passed());
    }

    #[test]
    fn test_subject_lowercase() {
        assert!(!run(subject_lowercase, "fix(parser): Add new feature.").passed());
        assert!(run(subject_lowercase, "fix(parser): add new feature").passed());
        assert!(run(subject_lowercase, "core: GitHub workflow").passed());
        assert!(run(subject_lowercase, "core: A").passed());
        assert!(run(subject_lowercase, "Add parser").passed());
    }

    #[test]
    fn test_type_space_after_comma() {
        assert!(!run(type_space_after_comma, "core,cli, docs: x").passed());
        assert!(run(type_space_after_comma, "core,cli: x, y").passed());
    }

    #[test]
    fn test_type_space_before_paren() {
        assert!(!run(type_space_before_paren, "core (parser): x").passed());
        assert!(!run(type_space_before_paren, "core(parser),cli (x): y").passed());
        assert!(run(type_space_before_paren, "core(parser): x (y)").passed());
    }

    #[test]
    fn test_subject_full_stop() {
        assert!(!run(subject_full_stop, "core: add parser.").passed());
        assert!(run(subject_full_stop, "core: add parser").passed());
        assert!(!run(subject_full_stop, "Add parser.").passed());
    }

    #[test]
    fn test_type_empty() {
        assert!(run(type_empty, "core: add parser").passed());
        assert!(run(type_empty, "core(lexer)!: drop tokens").passed());
        assert!(!run(type_empty, "Add parser").passed());
        assert!(!run(type_empty, ": add parser").passed());
    }
}
