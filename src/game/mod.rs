//! Game progress
//!
//! The session state machine plus its collaborators: the dictionary of
//! accepted guesses and the pool of target words.

mod dictionary;
mod keyboard;
mod session;
mod stats;
mod target;

pub use dictionary::{Dictionary, WordList};
pub use keyboard::{KeyboardState, LAYOUT};
pub use session::{DEFAULT_MAX_ATTEMPTS, GameSession, GameStatus, SessionError, StatusReport};
pub use stats::Statistics;
pub use target::TargetPool;
