//! Suggested replacement passwords.
//!
//! Kept separate from the evaluator so hosts that must not invent
//! passwords can ignore this module entirely.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::charset;

/// Floor applied to any requested length.
pub const MIN_SUGGESTION_LENGTH: usize = 8;

/// Length used when the caller has no preference.
pub const DEFAULT_SUGGESTION_LENGTH: usize = 14;

/// Generates a suggestion with the thread-local generator.
///
/// See [`suggest_password_with`] for the construction guarantees.
pub fn suggest_password(length: usize) -> String {
    suggest_password_with(length, &mut rand::thread_rng())
}

/// Generates a password satisfying every scoring rule, from a
/// caller-supplied randomness source.
///
/// One character from each class is guaranteed, the remainder is drawn from
/// the combined alphabet, and the result is shuffled so the guaranteed
/// characters are not predictably positioned. Lengths below
/// [`MIN_SUGGESTION_LENGTH`] are raised to it.
pub fn suggest_password_with<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    let length = length.max(MIN_SUGGESTION_LENGTH);

    let mut chars: Vec<char> = vec![
        pick(charset::LOWERCASE, rng),
        pick(charset::UPPERCASE, rng),
        pick(charset::DIGITS, rng),
        pick(charset::PUNCTUATION, rng),
    ];

    let full = [
        charset::LOWERCASE,
        charset::UPPERCASE,
        charset::DIGITS,
        charset::PUNCTUATION,
    ]
    .concat();
    while chars.len() < length {
        chars.push(pick(&full, rng));
    }

    chars.shuffle(rng);
    chars.into_iter().collect()
}

fn pick<R: Rng + ?Sized>(alphabet: &str, rng: &mut R) -> char {
    // Alphabets are non-empty ASCII constants
    let bytes = alphabet.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
