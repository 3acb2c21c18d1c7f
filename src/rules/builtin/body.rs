// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rules over the body prose and the raw text.

use crate::commit::{
    contains_hashtag_ref, find_urls, is_commit_url, is_footer_note, is_lower_case, is_valid_url,
    outside_big_blocks, paragraphs, split_lines, strip_code_blocks, CommitMessage, Paragraph,
};
use crate::rules::Verdict;
use lazy_static::lazy_static;
use regex::Regex;

use super::RuleContext;

lazy_static! {
    /// Two spaces that do not follow a full stop.
    static ref DOUBLE_SPACE: Regex = Regex::new(r"[^.]  ").unwrap();
}

pub fn body_prose(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = message
        .body_without_code()
        .is_some_and(|body| paragraphs(&body).iter().any(paragraph_offends));
    Verdict::check(
        offence,
        "Please begin a paragraph with uppercase letter and end it with a dot.",
    )
}

fn paragraph_offends(paragraph: &Paragraph<'_>) -> bool {
    let lines = paragraph.lines();
    let last_line = lines.last().copied().unwrap_or_default();

    let starts_lowercase = paragraph.first_char().is_some_and(is_lower_case);
    let is_lone_url = lines.len() == 1 && is_valid_url(last_line);
    if starts_lowercase && !is_lone_url {
        return true;
    }

    !paragraph.has_valid_ending() && !is_valid_url(last_line) && !is_footer_note(last_line)
}

/// URLs to commits of this very repository should be plain hashes.
pub fn commit_hash_alone(message: &CommitMessage, ctx: &RuleContext) -> Verdict {
    let offence = ctx.repository.as_deref().is_some_and(|repository| {
        let segment = format!("/{}/", repository.trim_matches('/'));
        find_urls(message.raw())
            .into_iter()
            .any(|url| is_commit_url(url) && url.contains(&segment))
    });
    Verdict::check(
        offence,
        "Please use the commit hash instead of the commit full URL.",
    )
}

pub fn proper_issue_refs(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = message
        .raw_body()
        .is_some_and(|body| contains_hashtag_ref(&strip_code_blocks(body)));
    Verdict::check(offence, "Please use full URLs instead of #XYZ refs.")
}

pub fn too_many_spaces(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = DOUBLE_SPACE.is_match(&strip_code_blocks(message.raw()));
    Verdict::check(
        offence,
        "Please watch out for too many whitespaces in the text.",
    )
}

/// Wrap width for body lines. URLs and footer notes may run long.
pub fn body_soft_max_line_length(message: &CommitMessage, ctx: &RuleContext) -> Verdict {
    let max = ctx.body_soft_max_line_length;
    let offence = message.body_without_code().is_some_and(|body| {
        outside_big_blocks(split_lines(&body)).any(|line| {
            line.chars().count() > max && !is_valid_url(line) && !is_footer_note(line)
        })
    });

    let text = format!(
        "Please do not exceed {} characters in the lines of the commit message's body; \
         we recommend this unix command (for editing the last commit message): \n\
         For Linux users: {}\n\
         For macOS users: {}",
        max,
        rewrap_command(max, "-u"),
        rewrap_command(max, ""),
    );
    Verdict::check(offence, text)
}

/// Shell pipeline that unwraps then re-wraps the last commit message.
fn rewrap_command(width: usize, fmt_option: &str) -> String {
    format!(
        "git log --format=%B -n 1 $(git log -1 --pretty=format:\"%h\") | cat - > log.txt ; \
         fmt -w 1111 -s log.txt > ulog.txt && fmt -w {} -s {} ulog.txt > wlog.txt && \
         git commit --amend -F wlog.txt",
        width, fmt_option
    )
}

pub fn trailing_whitespace(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = outside_big_blocks(split_lines(message.raw()))
        .any(|line| line.starts_with([' ', '\t']) || line.ends_with([' ', '\t']));
    Verdict::check(
        offence,
        "Please watch out for leading or ending trailing whitespace.",
    )
}

pub fn body_leading_blank(message: &CommitMessage, _ctx: &RuleContext) -> Verdict {
    let offence = message.has_body()
        && split_lines(message.raw().trim())
            .nth(1)
            .is_some_and(|line| !line.trim().is_empty());
    Verdict::check(
        offence,
        "Please leave a blank line between the title and the body.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: fn(&CommitMessage, &RuleContext) -> Verdict, raw: &str) -> Verdict {
        rule(&CommitMessage::parse(raw).unwrap(), &RuleContext::default())
    }

    #[test]
    fn test_body_prose_passes_proper_paragraphs() {
        let raw = "core: add parser\n\nThis adds a parser.\n\nIt also adds tests:\n\nWorks now!";
        assert!(run(body_prose, raw).passed());
    }

    #[test]
    fn test_body_prose_without_body() {
        assert!(run(body_prose, "core: add parser").passed());
    }

    #[test]
    fn test_body_prose_lowercase_start() {
        assert!(!run(body_prose, "core: add parser\n\nthis adds a parser.").passed());
    }

    #[test]
    fn test_body_prose_missing_full_stop() {
        assert!(!run(body_prose, "core: add parser\n\nThis adds a parser").passed());
    }

    #[test]
    fn test_body_prose_lone_url_paragraph() {
        let raw = "core: add parser\n\nSee the link below:\n\nhttps://example.com/parser";
        assert!(run(body_prose, raw).passed());
    }

    #[test]
    fn test_body_prose_footer_note_ending() {
        let raw = "core: add parser\n\nThis adds a parser.\n\nFixes https://example.com/issues/1\nCo-authored-by: Jo <jo@example.com>";
        assert!(run(body_prose, raw).passed());
    }

    #[test]
    fn test_body_prose_ignores_code() {
        let raw = "core: add parser\n\nExample:\n\n```\nlet x = 1\n```";
        assert!(run(body_prose, raw).passed());
    }

    #[test]
    fn test_body_prose_paren_endings() {
        assert!(run(body_prose, "core: x\n\nIt works (mostly.)").passed());
        // Only the char before `)` is re-checked, so a URL in parens fails.
        assert!(!run(body_prose, "core: x\n\nSee the docs (https://example.com)").passed());
    }

    #[test]
    fn test_commit_hash_alone() {
        let ctx = RuleContext {
            repository: Some("owner/repo".to_string()),
            ..RuleContext::default()
        };
        let own = CommitMessage::parse(
            "core: revert\n\nThis reverts https://github.com/owner/repo/commit/1a2b3c4d5e6f7.",
        )
        .unwrap();
        assert!(!commit_hash_alone(&own, &ctx).passed());

        let other = CommitMessage::parse(
            "core: port\n\nPorts https://github.com/other/lib/commit/1a2b3c4d5e6f7.",
        )
        .unwrap();
        assert!(commit_hash_alone(&other, &ctx).passed());

        assert!(commit_hash_alone(&own, &RuleContext::default()).passed());
    }

    #[test]
    fn test_commit_hash_alone_matches_whole_repository() {
        let ctx = RuleContext {
            repository: Some("owner/repo".to_string()),
            ..RuleContext::default()
        };
        let fork = CommitMessage::parse(
            "core: port\n\nPorts https://github.com/owner/repo-fork/commit/1a2b3c4d5e6f7.",
        )
        .unwrap();
        assert!(commit_hash_alone(&fork, &ctx).passed());

        let prefixed = CommitMessage::parse(
            "core: port\n\nPorts https://github.com/xowner/repo/commit/1a2b3c4d5e6f7.",
        )
        .unwrap();
        assert!(commit_hash_alone(&prefixed, &ctx).passed());
    }

    #[test]
    fn test_proper_issue_refs() {
        assert!(!run(proper_issue_refs, "core: x\n\nSee #123 for details.").passed());
        assert!(run(
            proper_issue_refs,
            "core: x\n\nSee https://example.com/issues/123 for details."
        )
        .passed());
        assert!(run(proper_issue_refs, "core: fix #123").passed());
        assert!(run(proper_issue_refs, "core: x\n\nCode:\n```\n#1\n```").passed());
    }

    #[test]
    fn test_too_many_spaces() {
        assert!(!run(too_many_spaces, "core: add  parser").passed());
        assert!(run(too_many_spaces, "core: x\n\nOne.  Two.").passed());
        assert!(run(too_many_spaces, "core: x\n\nCode:\n```\nx  =  1\n```").passed());
    }

    #[test]
    fn test_body_soft_max_line_length() {
        let long = "a".repeat(65);
        assert!(!run(body_soft_max_line_length, &format!("core: x\n\n{}", long)).passed());
        assert!(run(body_soft_max_line_length, &format!("core: x\n\n{}", &long[..64])).passed());
    }

    #[test]
    fn test_body_soft_max_line_length_exemptions() {
        let url = format!("https://example.com/{}", "a".repeat(80));
        assert!(run(body_soft_max_line_length, &format!("core: x\n\nSee:\n{}", url)).passed());

        let note = format!("[1] https://example.com/{}", "a".repeat(80));
        assert!(run(body_soft_max_line_length, &format!("core: x\n\nSee [1].\n\n{}", note)).passed());

        let quoted = format!("core: x\n\nLog:\n```\n{}\n```\nDone.", "a".repeat(80));
        assert!(run(body_soft_max_line_length, &quoted).passed());
    }

    #[test]
    fn test_body_soft_max_line_length_message() {
        let verdict = run(body_soft_max_line_length, &format!("core: x\n\n{}", "a".repeat(70)));
        let message = verdict.message();
        assert!(message.contains("Please do not exceed 64 characters"));
        assert!(message.contains("For Linux users: git log --format=%B"));
        assert!(message.contains("fmt -w 64 -s -u ulog.txt"));
    }

    #[test]
    fn test_trailing_whitespace() {
        assert!(!run(trailing_whitespace, "core: add parser \n\nBody.").passed());
        assert!(!run(trailing_whitespace, "core: add parser\n\n\tBody.").passed());
        assert!(run(trailing_whitespace, "core: add parser\r\n\r\nBody.\r\n").passed());
        assert!(run(trailing_whitespace, "core: x\n\nCode:\n```\n    indented \n```").passed());
    }

    #[test]
    fn test_body_leading_blank() {
        assert!(run(body_leading_blank, "core: x\n\nBody.").passed());
        assert!(!run(body_leading_blank, "core: x\nBody.").passed());
        assert!(run(body_leading_blank, "core: x").passed());
    }
}
