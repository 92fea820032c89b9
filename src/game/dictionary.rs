//! Dictionary of accepted guesses
//!
//! Membership is case-sensitive: words are expected in lowercase, which is
//! how [`Word`] stores them.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// A set of words a player is allowed to guess
pub trait Dictionary {
    /// Check whether `word` is an accepted guess
    fn contains(&self, word: &str) -> bool;
}

/// Hash-set backed dictionary
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build a dictionary from a list of words
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Dictionary, WordList};
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let dictionary = WordList::from_words(&words);
    ///
    /// assert!(dictionary.contains("crane"));
    /// assert!(!dictionary.contains("zzzzz"));
    /// ```
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        let mut list = Self::default();
        list.extend(words);
        list
    }

    /// Add more words
    pub fn extend<'w>(&mut self, words: impl IntoIterator<Item = &'w Word>) {
        self.words
            .extend(words.into_iter().map(|w| w.text().to_string()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Dictionary for [&str] {
    fn contains(&self, word: &str) -> bool {
        self.iter().any(|&w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn word_list_membership() {
        let dictionary = WordList::from_words(&words_from_slice(&["crane", "slate"]));
        assert_eq!(dictionary.len(), 2);
        assert!(Dictionary::contains(&dictionary, "crane"));
        assert!(!Dictionary::contains(&dictionary, "crate"));
    }

    #[test]
    fn membership_is_case_sensitive() {
        let dictionary = WordList::from_words(&words_from_slice(&["crane"]));
        assert!(!Dictionary::contains(&dictionary, "CRANE"));
    }

    #[test]
    fn extend_deduplicates() {
        let words = words_from_slice(&["crane", "slate"]);
        let mut dictionary = WordList::from_words(&words);
        dictionary.extend(&words);
        assert_eq!(dictionary.len(), 2);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn str_slice_dictionary() {
        let words: &[&str] = &["crane", "slate"];
        assert!(Dictionary::contains(words, "slate"));
        assert!(!Dictionary::contains(words, "crate"));
    }
}
