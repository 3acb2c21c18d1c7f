// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message parsing: segmentation into regions and line classifiers.

pub mod classify;
mod message;
mod text;

pub use classify::{
    contains_hashtag_ref, is_big_block_delimiter, is_co_authored_by_tag,
    is_fixes_or_closes_sentence, is_footer_note, is_footer_reference, is_proper_noun,
    strip_code_blocks, word_is_start_of_sentence,
};
pub use message::{
    convert_any_to_string, outside_big_blocks, paragraphs, CommitMessage, ContentLines, Paragraph,
};
pub use text::{find_urls, is_commit_url, is_lower_case, is_upper_case, is_valid_url, split_lines};
