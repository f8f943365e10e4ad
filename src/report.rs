//! Evaluation report types: score, strength label, crack estimates.

use std::fmt;

/// A clamped password score in the closed range `[0, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 5;

    /// Builds a score from a raw rule total, clamping to `[0, 5]`.
    pub fn new(raw: u32) -> Self {
        Score(raw.min(Self::MAX as u32) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Qualitative strength tier derived from a clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Total, order-preserving mapping over the clamped score.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0 => Strength::VeryWeak,
            1 => Strength::Weak,
            2 => Strength::Fair,
            3 => Strength::Good,
            4 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Crack-time estimate for one attacker-speed scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackEstimate {
    /// Scenario name, e.g. "1B/sec".
    pub scenario: &'static str,
    pub guesses_per_second: f64,
    /// Human-readable duration, "instant" or "practically infinite".
    pub duration: String,
}

/// The full result of one password evaluation.
///
/// Created fresh per call to [`Evaluator::evaluate`](crate::Evaluator::evaluate)
/// and carries no references back into the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    pub score: Score,
    pub strength: Strength,
    /// One message per rule, plus the common-password warning when it applies.
    pub feedback: Vec<String>,
    pub entropy_bits: f64,
    /// One entry per attacker-speed scenario, slowest first.
    pub crack_estimates: Vec<CrackEstimate>,
}
