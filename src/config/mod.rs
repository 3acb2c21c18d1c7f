// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for cmlint.
//!
//! This module handles loading, parsing, and merging configuration from
//! the repository and user files, the environment, and defaults.

pub mod default;
mod loader;
mod schema;

pub use default::{default_config, example_config};
pub use loader::{
    find_config_file, find_config_file_from, find_user_config_file, load_config,
    load_config_from, merge_configs, parse_config, CONFIG_FILES,
};
pub use schema::*;
