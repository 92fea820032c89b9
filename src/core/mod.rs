//! Core domain types for Wordle
//!
//! Words, per-letter outcomes and the guess evaluator. Everything here is pure
//! and deterministic; game progress lives in [`crate::game`].

mod evaluator;
mod outcome;
mod word;

pub use evaluator::{ScoringRule, evaluate, evaluate_str, evaluate_with};
pub use outcome::{GuessResult, LetterOutcome};
pub use word::{WORD_LENGTH, Word, WordError};
