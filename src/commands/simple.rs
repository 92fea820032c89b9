//! Simple line-based game mode
//!
//! Plays Wordle over plain stdin/stdout, one guess per line, for terminals
//! where the TUI is not wanted.

use super::context::GameContext;
use crate::game::{KeyboardState, SessionError, Statistics};
use crate::output::formatters::colored_row;
use crate::output::{write_game_over, write_guess_feedback, write_statistics};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// What the player asked for at a prompt
enum Input {
    Guess(String),
    NewGame,
    Quit,
}

/// Run games until the player quits or input ends
///
/// Returns the statistics of the games finished during the run.
///
/// # Errors
///
/// Returns an error on I/O failure or if no target word can be drawn.
pub fn run_simple<R: BufRead, W: Write>(
    ctx: &mut GameContext<'_>,
    mut input: R,
    mut out: W,
) -> Result<Statistics> {
    let max_attempts = ctx.settings().max_attempts;
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════════════════╗")?;
    writeln!(out, "║                W O R D L E                       ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the hidden 5-letter word in {max_attempts} tries.")?;
    writeln!(
        out,
        "{} right spot   {} wrong spot   {} not in word",
        " A ".black().on_green(),
        " B ".black().on_yellow(),
        " C ".white().on_bright_black()
    )?;
    writeln!(out, "Commands: 'new' for a new game, 'quit' to exit\n")?;

    'games: loop {
        let mut session = ctx.new_session()?;
        let mut keyboard = KeyboardState::new();

        while !session.is_over() {
            let attempt = session.status().attempts_used + 1;
            let Some(line) = prompt(&mut input, &mut out, &format!("Guess {attempt}/{max_attempts}"))?
            else {
                return Ok(stats);
            };

            match parse_input(&line) {
                Input::Quit => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(stats);
                }
                Input::NewGame => {
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue 'games;
                }
                Input::Guess(guess) => match session.submit(&guess) {
                    Ok(result) => {
                        keyboard.record(result);
                        let row = colored_row(result);
                        write_guess_feedback(&mut out, &row, &keyboard)?;
                    }
                    Err(SessionError::GameOver(_)) => break,
                    Err(err) => writeln!(out, "{}", format!("❌ {err}").red())?,
                },
            }
        }

        let report = session.status();
        stats.record(&report);
        write_game_over(&mut out, &report, session.target().text())?;
        write_statistics(&mut out, &stats)?;

        match prompt(&mut input, &mut out, "Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            _ => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(stats);
            }
        }
    }
}

fn parse_input(line: &str) -> Input {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewGame,
        _ => Input::Guess(line.to_string()),
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
