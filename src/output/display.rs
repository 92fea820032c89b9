//! Display functions for command results and line-mode games

use super::formatters::{colored_row, create_progress_bar, keyboard_lines};
use crate::commands::ScoreResult;
use crate::core::{LetterOutcome, ScoringRule};
use crate::game::{GameStatus, KeyboardState, Statistics, StatusReport};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of the `score` command
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.to_uppercase().bright_yellow().bold(),
        result.result.guess().text().to_uppercase().bright_white().bold()
    );
    if result.rule == ScoringRule::Legacy {
        println!("{}", "(legacy scoring)".bright_black());
    }
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}   {}\n", colored_row(&result.result), result.result.to_emoji());

    for (i, (letter, outcome)) in result.result.letters().enumerate() {
        let label = match outcome {
            LetterOutcome::Correct => "correct".green(),
            LetterOutcome::Present => "wrong location".yellow(),
            LetterOutcome::Absent => "not in word".bright_black(),
        };
        println!("  {}. {}  {label}", i + 1, char::from(letter.to_ascii_uppercase()));
    }

    if result.result.is_win() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Write one accepted guess followed by the keyboard state
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_guess_feedback<W: Write>(
    out: &mut W,
    row: &str,
    keyboard: &KeyboardState,
) -> io::Result<()> {
    writeln!(out, "\n  {row}\n")?;
    for line in keyboard_lines(keyboard) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Write the end-of-game banner
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_game_over<W: Write>(out: &mut W, report: &StatusReport, target: &str) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    match report.status {
        GameStatus::Won => {
            let guesses = report.attempts_used;
            writeln!(out, "  {}", "🎉 You won".bright_green().bold())?;
            writeln!(
                out,
                "  Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
        }
        GameStatus::Lost => {
            writeln!(out, "  {}", "Out of guesses. The word was:".red())?;
            writeln!(out, "  {}", target.to_uppercase().bright_yellow().bold())?;
        }
        GameStatus::InProgress => {}
    }
    writeln!(out, "{}", "═".repeat(50).bright_cyan())
}

/// Write played/won counts and the guess distribution
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "\n📊 Played: {}  Won: {}  Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        writeln!(
            out,
            "   {guesses}: {} {count}",
            create_progress_bar(count, most, 20).green()
        )?;
    }
    writeln!(out)
}
