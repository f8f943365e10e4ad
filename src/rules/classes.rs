//! Character-class rules - lowercase, uppercase, digits, specials.
//!
//! Each rule is independent and worth a single point.

use super::{RuleConfig, RuleOutcome};

pub fn lowercase_rule(password: &str, _config: &RuleConfig) -> RuleOutcome {
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        RuleOutcome::passed(1, "Contains lowercase letters")
    } else {
        RuleOutcome::failed("Add lowercase letters")
    }
}

pub fn uppercase_rule(password: &str, _config: &RuleConfig) -> RuleOutcome {
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        RuleOutcome::passed(1, "Contains uppercase letters")
    } else {
        RuleOutcome::failed("Add uppercase letters")
    }
}

pub fn digit_rule(password: &str, _config: &RuleConfig) -> RuleOutcome {
    if password.chars().any(|c| c.is_ascii_digit()) {
        RuleOutcome::passed(1, "Contains numbers")
    } else {
        RuleOutcome::failed("Add numbers")
    }
}

/// Membership in the configured punctuation alphabet, not merely
/// "anything non-alphanumeric".
pub fn special_rule(password: &str, config: &RuleConfig) -> RuleOutcome {
    if password.chars().any(|c| config.punctuation.contains(c)) {
        RuleOutcome::passed(1, "Contains special characters")
    } else {
        RuleOutcome::failed("Add special characters")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RuleConfig {
        RuleConfig::default()
    }

    #[test]
    fn test_lowercase_rule() {
        assert!(lowercase_rule("abc", &config()).satisfied);
        let outcome = lowercase_rule("ABC123!", &config());
        assert!(!outcome.satisfied);
        assert_eq!(outcome.feedback, "Add lowercase letters");
    }

    #[test]
    fn test_uppercase_rule() {
        assert!(uppercase_rule("aBc", &config()).satisfied);
        let outcome = uppercase_rule("abc123!", &config());
        assert!(!outcome.satisfied);
        assert_eq!(outcome.feedback, "Add uppercase letters");
    }

    #[test]
    fn test_digit_rule() {
        assert!(digit_rule("abc1", &config()).satisfied);
        let outcome = digit_rule("abcdef!", &config());
        assert!(!outcome.satisfied);
        assert_eq!(outcome.feedback, "Add numbers");
    }

    #[test]
    fn test_special_rule() {
        assert!(special_rule("abc!", &config()).satisfied);
        assert!(special_rule("a~b", &config()).satisfied);
        let outcome = special_rule("abc123", &config());
        assert!(!outcome.satisfied);
        assert_eq!(outcome.feedback, "Add special characters");
    }

    #[test]
    fn test_special_rule_ignores_chars_outside_alphabet() {
        // Space and non-ASCII are outside the punctuation alphabet
        assert!(!special_rule("abc def", &config()).satisfied);
        assert!(!special_rule("abcé", &config()).satisfied);
    }

    #[test]
    fn test_each_rule_awards_one_point() {
        let pwd = "aB3!";
        for rule in [lowercase_rule, uppercase_rule, digit_rule, special_rule] {
            assert_eq!(rule(pwd, &config()).points, 1);
        }
    }
}
