//! Command implementations

pub mod context;
pub mod score;
pub mod simple;

pub use context::{GameContext, GameSettings};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
