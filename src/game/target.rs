//! Target word selection

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Candidate target words; one is drawn uniformly per game
#[derive(Debug, Clone, Default)]
pub struct TargetPool {
    words: Vec<Word>,
}

impl TargetPool {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Pick a target uniformly at random
    ///
    /// Returns `None` if the pool is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::game::TargetPool;
    /// use wordle_game::wordlists::loader::words_from_slice;
    ///
    /// let pool = TargetPool::new(words_from_slice(&["crane", "slate"]));
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let target = pool.pick(&mut rng).unwrap();
    /// assert!(["crane", "slate"].contains(&target.text()));
    /// ```
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool_picks_nothing() {
        let pool = TargetPool::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pool.is_empty());
        assert!(pool.pick(&mut rng).is_none());
    }

    #[test]
    fn single_word_pool_always_picks_it() {
        let pool = TargetPool::new(words_from_slice(&["crane"]));
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(pool.pick(&mut rng).unwrap().text(), "crane");
        }
    }

    #[test]
    fn same_seed_same_target() {
        let pool = TargetPool::new(words_from_slice(&["crane", "slate", "audio", "robot"]));
        let a = pool.pick(&mut StdRng::seed_from_u64(42)).cloned();
        let b = pool.pick(&mut StdRng::seed_from_u64(42)).cloned();
        assert_eq!(a, b);
    }

    #[test]
    fn every_word_can_be_picked() {
        let pool = TargetPool::new(words_from_slice(&["crane", "slate", "audio"]));
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.pick(&mut rng).unwrap().text().to_string());
        }
        assert_eq!(seen.len(), 3);
    }
}
