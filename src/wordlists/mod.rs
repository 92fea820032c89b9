//! Word lists
//!
//! `ANSWERS` feeds the target pool, `ALLOWED` the guess dictionary.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
