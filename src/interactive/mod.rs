//! Interactive TUI game

mod app;
pub mod layout;
mod rendering;

pub use app::{
    Alert, App, DANCE_ANIMATION_DURATION, FLIP_ANIMATION_DURATION, Theme, TileState, run_tui,
};
pub use rendering::ui;
