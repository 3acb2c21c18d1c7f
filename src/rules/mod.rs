// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! Rules live in a closed registry ([`RuleName`]); each name maps to one
//! evaluator with a fixed `(message, context) -> Verdict` contract. The
//! engine pairs verdicts with the configured severity.

mod builtin;
mod engine;
mod name;
mod validator;
mod verdict;

pub use builtin::{body, footer, header, Abbreviation, RuleContext, RuleFn};
pub use engine::RuleEngine;
pub use name::RuleName;
pub use validator::{ValidationIssue, ValidationResult};
pub use verdict::{Verdict, ERR_MESSAGE_SUFFIX};
