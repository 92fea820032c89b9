//! Wordle Game
//!
//! Guess a hidden five-letter word in six tries, in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameSession, GameStatus};
//!
//! let dictionary: &[&str] = &["crane", "crate"];
//! let mut session = GameSession::new(Word::new("crane").unwrap(), dictionary);
//!
//! let result = session.submit("crate").unwrap();
//! println!("{}", result.to_emoji()); // 🟩🟩🟩⬜🟩
//!
//! session.submit("crane").unwrap();
//! assert_eq!(session.status().status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game progress and its collaborators
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Diagnostic tracing setup
pub mod logging;
