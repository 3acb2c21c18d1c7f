// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule verdicts and their diagnostic text.

use serde::Serialize;

/// Appended to every failing message.
pub const ERR_MESSAGE_SUFFIX: &str = "\nFor reference, here's the guidelines: \
https://github.com/eshanized/cmlint/blob/main/docs/WorkflowGuidelines.md\n\
If you think the linter is wrong, please report it at https://github.com/eshanized/cmlint/issues \
(a single commit can skip the hook with `git commit --no-verify`).";

/// Outcome of one rule on one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    passed: bool,
    text: String,
}

impl Verdict {
    /// Verdict for a rule that looked for an offence.
    pub fn check(offence: bool, text: impl Into<String>) -> Self {
        Self {
            passed: !offence,
            text: text.into(),
        }
    }

    /// Whether the rule passed.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// The diagnostic, with the guidelines suffix when the rule failed.
    pub fn message(&self) -> String {
        if self.passed {
            self.text.clone()
        } else {
            format!("{}{}", self.text, ERR_MESSAGE_SUFFIX)
        }
    }

    /// Flip the outcome, for rules configured with `applicability = "never"`.
    pub fn inverted(self) -> Self {
        Self {
            passed: !self.passed,
            text: self.text,
        }
    }

    /// `(passed, message)` pair handed back to a rule runner.
    pub fn into_parts(self) -> (bool, String) {
        let message = self.message();
        (self.passed, message)
    }
}
