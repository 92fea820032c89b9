//! Guess evaluation
//!
//! Scores a guess against the target word letter by letter. The standard rule
//! handles duplicate letters the way Wordle does:
//!
//! 1. First pass: exact position matches are `Correct` and consume one
//!    occurrence of their letter from the target's pool
//! 2. Second pass: every other letter is `Present` while the pool still holds
//!    that letter (consuming an occurrence), otherwise `Absent`
//!
//! So a letter is never marked `Present` more times than it remains unmatched
//! in the target.

use super::outcome::{GuessResult, LetterOutcome};
use super::word::{WORD_LENGTH, Word, WordError};

/// Which scoring rule to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringRule {
    /// Wordle scoring with duplicate-letter accounting
    #[default]
    Standard,
    /// Marks a letter `Present` whenever it appears anywhere in the target,
    /// even if every occurrence is already matched. Repeated guess letters
    /// can over-count.
    Legacy,
}

/// Score `guess` against `target` with the standard rule
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, LetterOutcome::*, Word};
///
/// let target = Word::new("crane").unwrap();
/// let guess = Word::new("crate").unwrap();
/// let result = evaluate(&target, &guess);
///
/// assert_eq!(result.outcomes(), &[Correct, Correct, Correct, Absent, Correct]);
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> GuessResult {
    evaluate_with(ScoringRule::Standard, target, guess)
}

/// Score `guess` against `target` with the given rule
#[must_use]
pub fn evaluate_with(rule: ScoringRule, target: &Word, guess: &Word) -> GuessResult {
    let outcomes = match rule {
        ScoringRule::Standard => standard_outcomes(target, guess),
        ScoringRule::Legacy => legacy_outcomes(target, guess),
    };
    GuessResult::new(guess.clone(), outcomes)
}

/// Validate both strings as words, then score with the standard rule
///
/// # Errors
/// Returns `WordError` if either string is not a well-formed 5-letter word.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate_str, WordError};
///
/// assert!(evaluate_str("abcde", "eabcd").is_ok());
/// assert_eq!(evaluate_str("crane", "xx"), Err(WordError::InvalidLength(2)));
/// ```
pub fn evaluate_str(target: &str, guess: &str) -> Result<GuessResult, WordError> {
    let target = Word::new(target)?;
    let guess = Word::new(guess)?;
    Ok(evaluate(&target, &guess))
}

fn standard_outcomes(target: &Word, guess: &Word) -> [LetterOutcome; WORD_LENGTH] {
    let mut result = [LetterOutcome::Absent; WORD_LENGTH];
    let mut available = target.letter_counts();

    // First pass: greens
    for (i, (g, t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = LetterOutcome::Correct;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from what is left in the pool
    for (i, letter) in guess.chars().iter().enumerate() {
        if result[i] == LetterOutcome::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(letter)
            && *count > 0
        {
            result[i] = LetterOutcome::Present;
            *count -= 1;
        }
    }

    result
}

fn legacy_outcomes(target: &Word, guess: &Word) -> [LetterOutcome; WORD_LENGTH] {
    std::array::from_fn(|i| {
        let letter = guess.char_at(i);
        if target.char_at(i) == letter {
            LetterOutcome::Correct
        } else if target.has_letter(letter) {
            LetterOutcome::Present
        } else {
            LetterOutcome::Absent
        }
    })
}
