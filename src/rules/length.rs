//! Length rule - three mutually exclusive tiers worth 0, 1 or 2 points.

use super::{RuleConfig, RuleOutcome};

/// Scores password length against the configured thresholds.
///
/// - `length >= strong_length` earns 2 points,
/// - `min_length <= length < strong_length` earns 1 point,
/// - anything shorter earns nothing and gets the corrective message.
pub fn length_rule(password: &str, config: &RuleConfig) -> RuleOutcome {
    let len = password.chars().count();

    if len >= config.strong_length {
        RuleOutcome::passed(2, &format!("Length is strong (>={})", config.strong_length))
    } else if len >= config.min_length {
        RuleOutcome::passed(
            1,
            &format!("Length is acceptable (>={}), consider longer", config.min_length),
        )
    } else {
        RuleOutcome::failed(&format!(
            "Password should be at least {} characters",
            config.min_length
        ))
    }
}
