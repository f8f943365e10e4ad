//! Alphabet-based entropy estimate and crack-time model.
//!
//! The estimate assumes uniform random selection from the union of the
//! character classes observed in the password. That deliberately
//! over-estimates resistance for dictionary words and patterned inputs;
//! the dictionary override in the evaluator is the counterweight.

use crate::charset;

/// One attacker-speed assumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackScenario {
    pub label: &'static str,
    pub guesses_per_second: f64,
}

/// The fixed scenarios reported with every evaluation, slowest first.
pub const ATTACK_SCENARIOS: [AttackScenario; 3] = [
    AttackScenario { label: "1k/sec", guesses_per_second: 1e3 },
    AttackScenario { label: "1M/sec", guesses_per_second: 1e6 },
    AttackScenario { label: "1B/sec", guesses_per_second: 1e9 },
];

/// Sums the sizes of the character classes present in the password.
///
/// Characters outside all four classes (spaces, non-ASCII) lengthen the
/// password but contribute no alphabet of their own.
pub fn alphabet_size(password: &str, punctuation: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += charset::LOWERCASE.len() as u32;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += charset::UPPERCASE.len() as u32;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += charset::DIGITS.len() as u32;
    }
    if password.chars().any(|c| punctuation.contains(c)) {
        size += punctuation.chars().count() as u32;
    }
    size
}

/// Entropy in bits: `length * log2(alphabet)`, 0 when no class is present.
pub fn entropy_bits(password: &str, punctuation: &str) -> f64 {
    let alphabet = alphabet_size(password, punctuation);
    if alphabet == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * (alphabet as f64).log2()
}

/// Expected worst-case seconds to exhaust the keyspace at the given rate.
///
/// Returns `None` when `2^entropy_bits` (or the division) exceeds the f64
/// range; callers report that as "practically infinite".
pub fn crack_seconds(entropy_bits: f64, guesses_per_second: f64) -> Option<f64> {
    let guesses = 2f64.powf(entropy_bits);
    if !guesses.is_finite() {
        return None;
    }
    let seconds = guesses / guesses_per_second;
    seconds.is_finite().then_some(seconds)
}

/// Human-readable crack time for one scenario.
pub fn crack_time(entropy_bits: f64, guesses_per_second: f64) -> String {
    if entropy_bits <= 0.0 {
        return "instant".to_string();
    }
    match crack_seconds(entropy_bits, guesses_per_second) {
        Some(seconds) => format_duration(seconds),
        None => "practically infinite".to_string(),
    }
}

/// Formats seconds using the coarsest unit that keeps the value >= 1.
///
/// Sub-second values keep three decimals; year counts beyond one million
/// switch to scientific notation.
pub fn format_duration(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 60.0 * MINUTE;
    const DAY: f64 = 24.0 * HOUR;
    const YEAR: f64 = 365.25 * DAY;

    if seconds < 1.0 {
        format!("{seconds:.3} seconds")
    } else if seconds < MINUTE {
        format!("{seconds:.2} seconds")
    } else if seconds < HOUR {
        format!("{:.2} minutes", seconds / MINUTE)
    } else if seconds < DAY {
        format!("{:.2} hours", seconds / HOUR)
    } else if seconds < YEAR {
        format!("{:.2} days", seconds / DAY)
    } else {
        let years = seconds / YEAR;
        if years > 1e6 {
            format!("{years:.2e} years")
        } else {
            format!("{years:.2} years")
        }
    }
}
