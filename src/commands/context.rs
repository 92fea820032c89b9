//! Shared game setup for the play modes

use crate::core::ScoringRule;
use crate::game::{DEFAULT_MAX_ATTEMPTS, GameSession, TargetPool, WordList};
use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Per-run game options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub max_attempts: usize,
    pub scoring: ScoringRule,
    /// Fixed seed for reproducible target choice
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            scoring: ScoringRule::Standard,
            seed: None,
        }
    }
}

/// Everything needed to start new games: word lists, options and the rng
pub struct GameContext<'a> {
    dictionary: &'a WordList,
    targets: &'a TargetPool,
    settings: GameSettings,
    rng: StdRng,
}

impl<'a> GameContext<'a> {
    #[must_use]
    pub fn new(dictionary: &'a WordList, targets: &'a TargetPool, settings: GameSettings) -> Self {
        let rng = settings
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            dictionary,
            targets,
            settings,
            rng,
        }
    }

    /// Start a new game with a freshly drawn target
    ///
    /// # Errors
    /// Returns an error if there are no target words to choose from.
    pub fn new_session(&mut self) -> Result<GameSession<'a, WordList>> {
        let Some(target) = self.targets.pick(&mut self.rng) else {
            bail!("No target words available");
        };
        Ok(GameSession::new(target.clone(), self.dictionary)
            .with_max_attempts(self.settings.max_attempts)
            .with_scoring(self.settings.scoring))
    }

    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }
}
