//! Terminal output formatting
//!
//! Colored tiles and banners for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_game_over, write_guess_feedback, write_statistics};
