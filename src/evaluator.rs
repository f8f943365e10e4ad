//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dictionary::Dictionary;
use crate::entropy::{crack_time, entropy_bits, ATTACK_SCENARIOS};
use crate::report::{CrackEstimate, EvaluationReport, Score, Strength};
use crate::rules::{RuleConfig, RULES};

/// Warning appended when the password matches the dictionary.
pub const COMMON_PASSWORD_WARNING: &str = "This is a very common password - AVOID!";

/// Rule configuration plus dictionary, fixed at construction.
///
/// Evaluation is pure and synchronous; a shared `Evaluator` may be used from
/// any number of threads without synchronization.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: RuleConfig,
    dictionary: Dictionary,
}

impl Evaluator {
    /// Builds an evaluator with the default rule configuration.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_config(RuleConfig::default(), dictionary)
    }

    pub fn with_config(config: RuleConfig, dictionary: Dictionary) -> Self {
        Evaluator { config, dictionary }
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Evaluates password strength and returns a detailed report.
    ///
    /// Runs the rule table in order, applies the dictionary override, then
    /// derives entropy, crack-time estimates and the strength label.
    pub fn evaluate(&self, password: &SecretString) -> EvaluationReport {
        let pwd = password.expose_secret();

        let mut feedback = Vec::with_capacity(RULES.len() + 1);
        let mut raw_score: u32 = 0;

        for rule in RULES {
            let outcome = rule(pwd, &self.config);
            raw_score += outcome.points;
            feedback.push(outcome.feedback);
        }

        // Dictionary override: the score collapses to 0, the rule feedback
        // stays informational.
        if self.dictionary.contains(pwd) {
            raw_score = 0;
            feedback.push(COMMON_PASSWORD_WARNING.to_string());
        }

        let entropy = entropy_bits(pwd, self.config.punctuation);
        let crack_estimates = ATTACK_SCENARIOS
            .iter()
            .map(|scenario| CrackEstimate {
                scenario: scenario.label,
                guesses_per_second: scenario.guesses_per_second,
                duration: crack_time(entropy, scenario.guesses_per_second),
            })
            .collect();

        let score = Score::new(raw_score);

        EvaluationReport {
            score,
            strength: Strength::from_score(score),
            feedback,
            entropy_bits: entropy,
            crack_estimates,
        }
    }

    /// Async wrapper that sends the report via channel.
    ///
    /// Debounces for 300 ms so interactive callers can coalesce keystrokes;
    /// cancellation during the debounce drops the evaluation without sending.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<EvaluationReport>,
    ) {
        use std::time::Duration;

        #[cfg(feature = "tracing")]
        tracing::info!("evaluation is about to start...");

        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::info!("evaluation cancelled before it started");
                return;
            }
            _ = tokio::time::sleep(Duration::from_millis(300)) => {}
        }

        let report = self.evaluate(password);

        if let Err(_e) = tx.send(report).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password evaluation report: {}", _e);
        }
    }
}
