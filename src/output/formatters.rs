//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterOutcome};
use crate::game::{KeyboardState, LAYOUT};
use colored::{ColoredString, Colorize};

/// One letter as a colored tile, e.g. " C " on green
#[must_use]
pub fn colored_tile(letter: u8, outcome: Option<LetterOutcome>) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match outcome {
        Some(LetterOutcome::Correct) => text.black().bold().on_green(),
        Some(LetterOutcome::Present) => text.black().bold().on_yellow(),
        Some(LetterOutcome::Absent) => text.white().bold().on_bright_black(),
        None => text.bold(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(result: &GuessResult) -> String {
    result
        .letters()
        .map(|(letter, outcome)| colored_tile(letter, Some(outcome)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard as three lines of letters colored by their best known state
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    LAYOUT
        .iter()
        .enumerate()
        .map(|(row, letters)| {
            let keys: Vec<String> = letters
                .bytes()
                .map(|letter| keyboard_key(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(row), keys.join(""))
        })
        .collect()
}

fn keyboard_key(letter: u8, outcome: Option<LetterOutcome>) -> ColoredString {
    let text = format!("{} ", char::from(letter.to_ascii_uppercase()));
    match outcome {
        Some(LetterOutcome::Correct) => text.green().bold(),
        Some(LetterOutcome::Present) => text.yellow().bold(),
        Some(LetterOutcome::Absent) => text.bright_black(),
        None => text.normal(),
    }
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)] // Values are clamped to [0, width]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        ((value as f64 / max as f64) * width as f64).round() as usize
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
