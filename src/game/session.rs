//! Game session: attempts, limits and win/loss tracking
//!
//! A session is created with a fixed target and is advanced only through
//! [`GameSession::submit`]. Status moves one way, from `InProgress` to either
//! `Won` or `Lost`; a new game means a new session.

use super::dictionary::Dictionary;
use crate::core::{GuessResult, ScoringRule, WORD_LENGTH, Word, WordError, evaluate_with};
use std::fmt;
use tracing::{debug, info};

/// Default number of guesses per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Won and Lost are terminal
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Snapshot returned by [`GameSession::status`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    pub status: GameStatus,
    pub attempts_used: usize,
    pub remaining_attempts: usize,
}

/// Why a submission was rejected
///
/// None of these change the session; the player may keep guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Malformed word (wrong length or characters)
    InvalidInput(WordError),
    /// Well-formed word that is not in the dictionary
    InvalidGuess(String),
    /// The game already ended
    GameOver(GameStatus),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(WordError::InvalidLength(len)) if *len < WORD_LENGTH => {
                f.write_str("Not enough letters")
            }
            Self::InvalidInput(err) => write!(f, "{err}"),
            Self::InvalidGuess(_) => f.write_str("Not in the word list"),
            Self::GameOver(status) => write!(f, "The game is over ({status})"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for SessionError {
    fn from(err: WordError) -> Self {
        Self::InvalidInput(err)
    }
}

/// One play-through against a fixed target word
pub struct GameSession<'a, D: Dictionary + ?Sized> {
    target: Word,
    dictionary: &'a D,
    max_attempts: usize,
    scoring: ScoringRule,
    attempts: Vec<GuessResult>,
    status: GameStatus,
}

impl<'a, D: Dictionary + ?Sized> GameSession<'a, D> {
    /// Start a game with the default attempt limit and standard scoring
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{GameSession, GameStatus};
    ///
    /// let dictionary: &[&str] = &["crane", "crate", "slate"];
    /// let mut session = GameSession::new(Word::new("crane").unwrap(), dictionary);
    ///
    /// session.submit("crate").unwrap();
    /// assert_eq!(session.status().remaining_attempts, 5);
    ///
    /// session.submit("crane").unwrap();
    /// assert_eq!(session.status().status, GameStatus::Won);
    /// ```
    pub fn new(target: Word, dictionary: &'a D) -> Self {
        debug!(max_attempts = DEFAULT_MAX_ATTEMPTS, "new game session");
        Self {
            target,
            dictionary,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            scoring: ScoringRule::default(),
            attempts: Vec::with_capacity(DEFAULT_MAX_ATTEMPTS),
            status: GameStatus::InProgress,
        }
    }

    /// Set the attempt limit (at least 1)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Set the scoring rule
    #[must_use]
    pub const fn with_scoring(mut self, scoring: ScoringRule) -> Self {
        self.scoring = scoring;
        self
    }

    /// Submit a guess
    ///
    /// On success the scored result is appended and the status updated:
    /// `Won` if the guess is the target, `Lost` if that was the last attempt,
    /// otherwise still `InProgress`.
    ///
    /// # Errors
    /// - `SessionError::GameOver` if the game already ended
    /// - `SessionError::InvalidInput` if `guess` is not a 5-letter word
    /// - `SessionError::InvalidGuess` if `guess` is not in the dictionary
    ///
    /// A rejected submission leaves the session untouched.
    pub fn submit(&mut self, guess: &str) -> Result<&GuessResult, SessionError> {
        if self.status.is_over() {
            return Err(SessionError::GameOver(self.status));
        }

        let word = Word::new(guess)?;
        if !self.dictionary.contains(word.text()) {
            info!(guess = %word, "guess rejected: not in dictionary");
            return Err(SessionError::InvalidGuess(word.text().to_string()));
        }

        let result = evaluate_with(self.scoring, &self.target, &word);
        self.status = if word == self.target {
            GameStatus::Won
        } else if self.attempts.len() + 1 >= self.max_attempts {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };
        debug!(
            guess = %word,
            feedback = %result.to_emoji(),
            attempt = self.attempts.len() + 1,
            "guess accepted"
        );
        if self.status.is_over() {
            info!(status = %self.status, attempts = self.attempts.len() + 1, "game over");
        }

        self.attempts.push(result);
        Ok(&self.attempts[self.attempts.len() - 1])
    }

    /// Current status and attempt counts
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport {
            status: self.status,
            attempts_used: self.attempts.len(),
            remaining_attempts: self.max_attempts - self.attempts.len(),
        }
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[GuessResult] {
        &self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn scoring(&self) -> ScoringRule {
        self.scoring
    }
}
