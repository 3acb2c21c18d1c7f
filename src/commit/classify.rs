// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Line and word classifiers.
//!
//! Every function here is a pure predicate. Functions taking a `line`
//! require a single line and functions taking a `word` require a single
//! word; passing anything else is a caller bug and panics.

use lazy_static::lazy_static;
use regex::Regex;

use super::text::{is_lower_case, is_upper_case};

lazy_static! {
    /// Shorthand issue reference such as `#123`.
    static ref HASHTAG_REF: Regex = Regex::new(r"#[0-9]+").unwrap();

    /// Everything from the first fence to the last one.
    static ref CODE_BLOCK: Regex = Regex::new(r"(?s)```.*```").unwrap();
}

/// Opening and closing marker of a big block.
pub const BIG_BLOCK_DELIMITER: &str = "```";

fn assert_line(line: &str) {
    assert!(
        !line.contains('\n'),
        "expected a single line, got text with a line break: {:?}",
        line
    );
}

fn assert_word(word: &str) {
    assert_line(word);
    assert!(
        !word.contains(' '),
        "expected a single word, got text with a space: {:?}",
        word
    );
}

/// `[1] https://example.com` style reference note.
pub fn is_footer_reference(line: &str) -> bool {
    assert_line(line);
    line.starts_with('[') && line.find("] ").is_some_and(|index| index > 0)
}

/// `Fixes ...` or `Closes ...` sentence.
pub fn is_fixes_or_closes_sentence(line: &str) -> bool {
    assert_line(line);
    line.starts_with("Fixes ") || line.starts_with("Closes ")
}

/// `Co-authored-by: ...` tag.
pub fn is_co_authored_by_tag(line: &str) -> bool {
    assert_line(line);
    line.starts_with("Co-authored-by: ")
}

/// Whether the line is any kind of footer note.
pub fn is_footer_note(line: &str) -> bool {
    assert_line(line);
    is_footer_reference(line) || is_co_authored_by_tag(line) || is_fixes_or_closes_sentence(line)
}

fn num_upper_case_letters(word: &str) -> usize {
    word.chars().filter(char::is_ascii_uppercase).count()
}

fn num_non_alphabetical_chars(word: &str) -> usize {
    word.chars().filter(|c| !c.is_ascii_alphabetic()).count()
}

/// Approximate proper noun detection.
///
/// Deliberately generous: `iOS`, `GitHub`, `x86` and `CI` all count, so
/// that casing rules do not trip over identifiers and brand names.
pub fn is_proper_noun(word: &str) -> bool {
    assert_word(word);
    let Some(first) = word.chars().next() else {
        return false;
    };
    let num_upper_case = num_upper_case_letters(word);

    num_non_alphabetical_chars(word) > 0
        || (is_upper_case(first) && num_upper_case > 1)
        || (is_lower_case(first) && num_upper_case > 0)
}

/// A plain capitalized word: `Add`, but not `ADD`, `GitHub` or `Add:`.
pub fn word_is_start_of_sentence(word: &str) -> bool {
    assert_word(word);
    match word.chars().next() {
        Some(first) if is_upper_case(first) => {
            num_upper_case_letters(word) == 1 && num_non_alphabetical_chars(word) == 0
        }
        _ => false,
    }
}

/// Fence line opening or closing a big block.
pub fn is_big_block_delimiter(line: &str) -> bool {
    assert_line(line);
    line.starts_with(BIG_BLOCK_DELIMITER)
}

/// Whether the text mentions a `#123` shorthand reference.
pub fn contains_hashtag_ref(text: &str) -> bool {
    HASHTAG_REF.is_match(text)
}

/// Remove the fenced code region so prose rules do not inspect code.
///
/// The removed region spans from the first fence to the last, so several
/// blocks and the prose between them go away together.
pub fn strip_code_blocks(text: &str) -> String {
    CODE_BLOCK.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_reference() {
        assert!(is_footer_reference("[1] https://example.com"));
        assert!(is_footer_reference("[12] see the mailing list"));
        assert!(!is_footer_reference("[1]https://example.com"));
        assert!(!is_footer_reference("as shown in [1] here"));
        assert!(!is_footer_reference(""));
    }

    #[test]
    fn test_fixes_or_closes() {
        assert!(is_fixes_or_closes_sentence("Fixes https://example.com/issues/3"));
        assert!(is_fixes_or_closes_sentence("Closes the loop."));
        assert!(!is_fixes_or_closes_sentence("fixes https://example.com/issues/3"));
        assert!(!is_fixes_or_closes_sentence("Fixed it"));
    }

    #[test]
    fn test_co_authored_by() {
        assert!(is_co_authored_by_tag("Co-authored-by: Jo <jo@example.com>"));
        assert!(!is_co_authored_by_tag("Co-Authored-By: Jo <jo@example.com>"));
    }

    #[test]
    fn test_footer_note_union() {
        assert!(is_footer_note("[3] https://example.com"));
        assert!(is_footer_note("Fixes https://example.com/issues/3"));
        assert!(is_footer_note("Co-authored-by: Jo <jo@example.com>"));
        assert!(!is_footer_note("This is prose."));
    }

    #[test]
    #[should_panic(expected = "single line")]
    fn test_footer_note_rejects_multiline() {
        is_footer_note("Fixes one\nFixes two");
    }

    #[test]
    fn test_proper_noun() {
        assert!(is_proper_noun("iOS"));
        assert!(is_proper_noun("GitHub"));
        assert!(is_proper_noun("CI"));
        assert!(is_proper_noun("x86"));
        assert!(is_proper_noun("README.md"));
        assert!(!is_proper_noun("Add"));
        assert!(!is_proper_noun("add"));
        assert!(!is_proper_noun(""));
    }

    #[test]
    fn test_start_of_sentence() {
        assert!(word_is_start_of_sentence("Add"));
        assert!(!word_is_start_of_sentence("add"));
        assert!(!word_is_start_of_sentence("ADD"));
        assert!(!word_is_start_of_sentence("Add:"));
        assert!(!word_is_start_of_sentence("GitHub"));
        assert!(!word_is_start_of_sentence(""));
    }

    #[test]
    #[should_panic(expected = "single word")]
    fn test_start_of_sentence_rejects_phrase() {
        word_is_start_of_sentence("Add thing");
    }

    #[test]
    fn test_big_block_delimiter() {
        assert!(is_big_block_delimiter("```"));
        assert!(is_big_block_delimiter("```rust"));
        assert!(!is_big_block_delimiter("  ```"));
        assert!(!is_big_block_delimiter("text ```"));
    }

    #[test]
    fn test_hashtag_ref() {
        assert!(contains_hashtag_ref("See #123 for details."));
        assert!(!contains_hashtag_ref("See issue # for details."));
        assert!(!contains_hashtag_ref("See https://example.com/issues/123."));
    }

    #[test]
    fn test_strip_code_blocks() {
        let text = "Before.\n```\nlet x = #1;\n```\nAfter.";
        assert_eq!(strip_code_blocks(text), "Before.\n\nAfter.");
        assert_eq!(strip_code_blocks("No code."), "No code.");
    }

    #[test]
    fn test_strip_code_blocks_spans_first_to_last_fence() {
        let text = "A\n```\none\n```\nmiddle\n```\ntwo\n```\nB";
        assert_eq!(strip_code_blocks(text), "A\n\nB");
    }
}
