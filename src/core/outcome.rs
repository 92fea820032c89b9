//! Per-letter feedback and the scored result of one guess

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single letter of a guess
///
/// Ordered by strength: `Absent < Present < Correct`. The keyboard uses this
/// ordering so a key never loses a stronger state it already earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterOutcome {
    /// Letter is not in the target (or all its occurrences are accounted for)
    Absent,
    /// Letter is in the target, at another position
    Present,
    /// Letter is in the target at this position
    Correct,
}

impl LetterOutcome {
    /// Emoji square for this outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// The scored result of one guess: the guessed word plus one outcome per position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    guess: Word,
    outcomes: [LetterOutcome; WORD_LENGTH],
}

impl GuessResult {
    pub(crate) const fn new(guess: Word, outcomes: [LetterOutcome; WORD_LENGTH]) -> Self {
        Self { guess, outcomes }
    }

    /// The word that was guessed
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// Outcomes in letter order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LENGTH] {
        &self.outcomes
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.outcomes.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// Number of positions with the given outcome
    #[must_use]
    pub fn count(&self, outcome: LetterOutcome) -> usize {
        self.outcomes.iter().filter(|&&o| o == outcome).count()
    }

    /// Iterate over `(letter, outcome)` pairs in position order
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterOutcome)> + '_ {
        self.guess.chars().iter().copied().zip(self.outcomes)
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.outcomes.iter().map(|o| o.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess.text().to_uppercase(), self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterOutcome::{Absent, Correct, Present};

    fn result(word: &str, outcomes: [LetterOutcome; WORD_LENGTH]) -> GuessResult {
        GuessResult::new(Word::new(word).unwrap(), outcomes)
    }

    #[test]
    fn outcome_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
        assert_eq!(Present.max(Correct), Correct);
    }

    #[test]
    fn win_requires_all_correct() {
        assert!(result("crane", [Correct; 5]).is_win());
        assert!(!result("crate", [Correct, Correct, Correct, Absent, Correct]).is_win());
    }

    #[test]
    fn count_and_letters() {
        let r = result("robot", [Present, Present, Absent, Correct, Absent]);
        assert_eq!(r.count(Correct), 1);
        assert_eq!(r.count(Present), 2);
        assert_eq!(r.count(Absent), 2);

        let letters: Vec<_> = r.letters().collect();
        assert_eq!(letters[0], (b'r', Present));
        assert_eq!(letters[3], (b'o', Correct));
    }

    #[test]
    fn emoji_and_display() {
        let r = result("crate", [Correct, Correct, Correct, Absent, Correct]);
        assert_eq!(r.to_emoji(), "🟩🟩🟩⬜🟩");
        assert_eq!(r.to_string(), "CRATE 🟩🟩🟩⬜🟩");
    }
}
