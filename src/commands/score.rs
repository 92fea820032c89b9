//! One-shot scoring of a guess against a given target

use crate::core::{GuessResult, ScoringRule, Word, WordError, evaluate_with};

/// Result of the `score` command
pub struct ScoreResult {
    pub target: String,
    pub result: GuessResult,
    pub rule: ScoringRule,
}

/// Score `guess` against `target`
///
/// No dictionary check: any well-formed pair of words can be scored.
///
/// # Errors
///
/// Returns `WordError` if either word is malformed.
pub fn score_guess(target: &str, guess: &str, rule: ScoringRule) -> Result<ScoreResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    let result = evaluate_with(rule, &target, &guess);

    Ok(ScoreResult {
        target: target.text().to_string(),
        result,
        rule,
    })
}
