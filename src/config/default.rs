// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::LintConfig;

/// Get the default configuration.
pub fn default_config() -> LintConfig {
    LintConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# cmlint configuration file

# Repository the commits belong to, as "owner/name". Used to spot full
# commit URLs that should be plain hashes. Falls back to GITHUB_REPOSITORY.
# repository = "owner/name"

# Length limits, in characters
[limits]
header_max_length = 50
body_soft_max_line_length = 64
footer_max_line_length = 150

# Per-rule overrides. Severity is disabled | warning | error (or 0 | 1 | 2).
# applicability = "never" inverts the rule.
[rules.body-prose]
severity = "error"
applicability = "always"

[rules.type-empty]
severity = "warning"

[rules.footer-max-line-length]
max_length = 150

# Extra title abbreviations, suggested when the title is too long
[abbreviations]
"miscellaneous" = "misc"

# UI configuration
[ui]
color = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_config, Severity};
    use crate::rules::RuleName;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.limits.header_max_length, 50);
        assert!(config.ui.color);
    }

    #[test]
    fn test_example_config_parseable() {
        let config = parse_config(example_config()).expect("Example config should parse");
        assert_eq!(config.severity(RuleName::TypeEmpty), Severity::Warning);
        assert_eq!(config.abbreviations["miscellaneous"], "misc");
    }
}
