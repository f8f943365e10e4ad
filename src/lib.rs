//! Password strength evaluation library
//!
//! This library scores candidate passwords against a configurable rule
//! table, estimates entropy from the character classes observed, derives
//! crack-time estimates for several attacker speeds, and can suggest a
//! replacement password that passes every rule.
//!
//! # Features
//!
//! - `async` (default): Enables an async evaluation wrapper with
//!   cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Custom path to the weak-password supplement file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{Dictionary, Evaluator};
//! use secrecy::SecretString;
//!
//! // Build the dictionary once at startup; a missing supplement file is
//! // absorbed and the built-in list is used alone.
//! let evaluator = Evaluator::new(Dictionary::from_env());
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluator.evaluate(&password);
//!
//! println!("Score: {}", report.score);
//! println!("Strength: {}", report.strength);
//! println!("Entropy: {:.2} bits", report.entropy_bits);
//! for estimate in &report.crack_estimates {
//!     println!("  {}: {}", estimate.scenario, estimate.duration);
//! }
//! ```

// Internal modules
mod charset;
mod dictionary;
mod entropy;
mod evaluator;
mod report;
mod rules;
mod suggest;

// Public API
pub use dictionary::{Dictionary, DictionaryError};
pub use entropy::{alphabet_size, crack_time, entropy_bits, AttackScenario, ATTACK_SCENARIOS};
pub use evaluator::{Evaluator, COMMON_PASSWORD_WARNING};
pub use report::{CrackEstimate, EvaluationReport, Score, Strength};
pub use rules::{RuleConfig, RuleOutcome};
pub use suggest::{
    suggest_password, suggest_password_with, DEFAULT_SUGGESTION_LENGTH, MIN_SUGGESTION_LENGTH,
};
