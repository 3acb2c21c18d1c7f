// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! The linter only ever reads commit messages; it never writes to the
//! repository.

mod repo;

pub use repo::{get_commit_message, get_commit_range, Repository};
