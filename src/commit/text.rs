// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Small string and URL primitives shared by the classifiers and rules.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    /// Loose URL finder; candidates are confirmed with [`is_valid_url`].
    static ref URL_CANDIDATE: Regex = Regex::new(r"[a-zA-Z][a-zA-Z0-9+.\-]*://[^\s<>()\[\]]+").unwrap();

    /// Path segment of a web commit link (GitHub, GitLab, Gitea style).
    static ref COMMIT_PATH: Regex = Regex::new(r"/commits?/[0-9a-fA-F]{7,40}\b").unwrap();
}

/// Whether the whole string parses as an absolute URL.
///
/// Uses the WHATWG parser, so anything with a scheme (`mailto:x`, `foo:`)
/// counts, the same way a browser `URL` constructor would accept it.
pub fn is_valid_url(text: &str) -> bool {
    Url::parse(text).is_ok()
}

/// Whether `ch` is an uppercase letter.
pub fn is_upper_case(ch: char) -> bool {
    ch.is_uppercase()
}

/// Whether `ch` is a lowercase letter.
pub fn is_lower_case(ch: char) -> bool {
    ch.is_lowercase()
}

/// Split text into lines, accepting both `\n` and `\r\n` endings.
///
/// Unlike [`str::lines`], a trailing line break yields a final empty line,
/// which keeps line counts faithful to the raw message.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// All well-formed URLs mentioned anywhere in `text`, in order.
pub fn find_urls(text: &str) -> Vec<&str> {
    URL_CANDIDATE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches(['.', ',', ';', ':', '!', '?']))
        .filter(|candidate| is_valid_url(candidate))
        .collect()
}

/// Whether `url` links to a single commit on a forge.
pub fn is_commit_url(url: &str) -> bool {
    COMMIT_PATH.is_match(url)
}
