// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message segmentation.
//!
//! A [`CommitMessage`] keeps the raw text and the header; every other
//! region (body, paragraphs, lines, footer) is derived on demand.

use crate::error::{InputError, LintError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use super::classify::{is_big_block_delimiter, is_footer_note, strip_code_blocks};
use super::text::{is_valid_url, split_lines};

lazy_static! {
    /// Blank line between two paragraphs.
    static ref PARAGRAPH_SEPARATOR: Regex = Regex::new(r"\r?\n\r?\n").unwrap();
}

/// A commit message as seen by the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    raw: String,
    header: String,
}

impl CommitMessage {
    /// Parse a raw commit message.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(LintError::Input(InputError::EmptyMessage));
        }
        let header = header_of(&raw).to_string();
        Ok(Self { raw, header })
    }

    /// Build a message from fields handed over separately by a rule runner.
    pub fn from_fields(header: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            header: header.into(),
        }
    }

    /// Build a message from a rule-runner JSON object.
    ///
    /// `raw` is required; `header` defaults to the first line of `raw`.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or(LintError::Input(InputError::ExpectedObject))?;
        let raw_value = object
            .get("raw")
            .ok_or(LintError::Input(InputError::ExpectedObject))?;
        let raw = convert_any_to_string(raw_value, "raw")?;

        match object.get("header") {
            Some(header) => {
                let header = convert_any_to_string(header, "header")?;
                if header.contains(['\n', '\r']) {
                    return Err(LintError::Input(InputError::MultiLineHeader { header }));
                }
                Ok(Self::from_fields(header, raw))
            }
            None => Self::parse(raw),
        }
    }

    /// The full message, exactly as received.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// First line of the message.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Everything after the first line break of the trimmed message.
    ///
    /// Untrimmed, so the leading line break and any spacing survive.
    /// `None` when the message is a single line.
    pub fn raw_body(&self) -> Option<&str> {
        let trimmed = self.raw.trim();
        trimmed.find('\n').map(|index| &trimmed[index..])
    }

    /// Trimmed body, or `None` when there is no body text.
    pub fn body(&self) -> Option<&str> {
        self.raw_body()
            .map(str::trim)
            .filter(|body| !body.is_empty())
    }

    /// Whether the message has any body text.
    pub fn has_body(&self) -> bool {
        self.body().is_some()
    }

    /// Trimmed body with fenced code removed, or `None` when nothing is left.
    pub fn body_without_code(&self) -> Option<String> {
        let body = strip_code_blocks(self.raw_body()?);
        let body = body.trim();
        if body.is_empty() {
            None
        } else {
            Some(body.to_string())
        }
    }

    /// Lines of the trimmed body.
    pub fn body_lines(&self) -> Vec<&str> {
        self.body().map(|body| split_lines(body).collect()).unwrap_or_default()
    }

    /// Trailing footer lines: from the first footer note to the end.
    pub fn footer_lines(&self) -> Vec<&str> {
        let lines = self.body_lines();
        match lines.iter().position(|line| is_footer_note(line)) {
            Some(start) => lines[start..].to_vec(),
            None => Vec::new(),
        }
    }
}

fn header_of(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.find('\n') {
        Some(index) => trimmed[..index].trim_end_matches('\r'),
        None => trimmed,
    }
}

/// Coerce a runner-provided field into a string.
///
/// Null, missing and non-string values are integration bugs and fail with
/// an `AssertionError`.
pub fn convert_any_to_string(value: &Value, field: &str) -> Result<String> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => Err(LintError::Input(InputError::ExpectedString {
            field: field.to_string(),
            found: json_kind(other).to_string(),
        })),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A blank-line separated block of body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paragraph<'a> {
    text: &'a str,
}

impl<'a> Paragraph<'a> {
    /// The trimmed paragraph text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn lines(&self) -> Vec<&'a str> {
        split_lines(self.text).collect()
    }

    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }

    pub fn last_char(&self) -> Option<char> {
        self.text.chars().last()
    }

    /// Whether the paragraph ends like a finished sentence.
    pub fn has_valid_ending(&self) -> bool {
        has_valid_ending(self.text)
    }
}

/// Ending test behind [`Paragraph::has_valid_ending`].
///
/// A closing parenthesis is accepted when the single character before it
/// passes the test, so `(see above.)` is fine but `(see https://x.io)` is
/// not: only that one character is re-checked, never the word before it.
fn has_valid_ending(text: &str) -> bool {
    let last_word = text.split(' ').last().unwrap_or_default();
    if is_valid_url(last_word) {
        return true;
    }

    let mut chars = text.chars().rev();
    match chars.next() {
        Some('.' | ':' | '!' | '?') => true,
        Some(')') => match chars.next() {
            Some(before) => has_valid_ending(&before.to_string()),
            None => false,
        },
        _ => false,
    }
}

/// Split body text into trimmed, non-empty paragraphs.
pub fn paragraphs(text: &str) -> Vec<Paragraph<'_>> {
    PARAGRAPH_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|text| Paragraph { text })
        .collect()
}

/// Iterator over lines that lie outside big blocks.
///
/// Delimiter lines toggle the big-block state and are never yielded.
#[derive(Debug, Clone)]
pub struct ContentLines<I> {
    lines: I,
    in_big_block: bool,
}

impl<'a, I: Iterator<Item = &'a str>> Iterator for ContentLines<I> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            if is_big_block_delimiter(line) {
                self.in_big_block = !self.in_big_block;
                continue;
            }
            if !self.in_big_block {
                return Some(line);
            }
        }
        None
    }
}

/// Skip big blocks while walking `lines`.
pub fn outside_big_blocks<'a, I>(lines: I) -> ContentLines<I::IntoIter>
where
    I: IntoIterator<Item = &'a str>,
{
    ContentLines {
        lines: lines.into_iter(),
        in_big_block: false,
    }
}
