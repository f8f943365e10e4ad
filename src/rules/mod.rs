//! Password scoring rules
//!
//! Each rule is a pure predicate over the password plus a feedback message,
//! driven by a single [`RuleConfig`] rather than per-rule constants.

mod classes;
mod length;

pub use classes::{digit_rule, lowercase_rule, special_rule, uppercase_rule};
pub use length::length_rule;

use crate::charset;

/// Outcome of one rule check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub satisfied: bool,
    /// Contribution to the raw score (0 to 2).
    pub points: u32,
    /// Positive message when satisfied, corrective message otherwise.
    pub feedback: String,
}

impl RuleOutcome {
    pub fn passed(points: u32, feedback: &str) -> Self {
        RuleOutcome {
            satisfied: true,
            points,
            feedback: feedback.to_string(),
        }
    }

    pub fn failed(feedback: &str) -> Self {
        RuleOutcome {
            satisfied: false,
            points: 0,
            feedback: feedback.to_string(),
        }
    }
}

/// Thresholds and alphabets shared by every rule and the entropy model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleConfig {
    /// Minimum acceptable length; shorter passwords earn no length points.
    pub min_length: usize,
    /// Length at which the full two length points are awarded.
    pub strong_length: usize,
    /// The punctuation alphabet defining the "special" class.
    pub punctuation: &'static str,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            min_length: 8,
            strong_length: 12,
            punctuation: charset::PUNCTUATION,
        }
    }
}

pub type RuleFn = fn(&str, &RuleConfig) -> RuleOutcome;

/// The rule table, in evaluation order: length first, then the four
/// character-class rules.
pub const RULES: [RuleFn; 5] = [
    length_rule,
    lowercase_rule,
    uppercase_rule,
    digit_rule,
    special_rule,
];
