//! Letter states for the on-screen keyboard

use crate::core::{GuessResult, LetterOutcome};

/// QWERTY letter rows, top to bottom
pub const LAYOUT: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best outcome seen so far for each letter a-z
///
/// A key only ever upgrades: once `Correct` it stays `Correct`, once
/// `Present` it can still become `Correct` but never `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: [Option<LetterOutcome>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the key states
    pub fn record(&mut self, result: &GuessResult) {
        for (letter, outcome) in result.letters() {
            if let Some(slot) = Self::index(letter).and_then(|i| self.keys.get_mut(i)) {
                *slot = Some(slot.map_or(outcome, |known| known.max(outcome)));
            }
        }
    }

    /// State of a key, `None` if the letter has not been guessed yet
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterOutcome> {
        Self::index(letter.to_ascii_lowercase()).and_then(|i| self.keys[i])
    }

    pub fn clear(&mut self) {
        self.keys = [None; 26];
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}
