//! Wordle - CLI
//!
//! Terminal Wordle with a TUI (default), a plain line mode and a scoring tool.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use wordle_game::{
    commands::{GameContext, GameSettings, run_simple, score_guess},
    core::{ScoringRule, Word},
    game::{TargetPool, WordList},
    interactive::{App, Theme, run_tui},
    logging::{self, LogTarget},
    output::{print_score_result, write_statistics},
    wordlists::{
        ALLOWED, ANSWERS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess list: 'all' (default), 'answers' (answers only), or path to a file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Number of guesses per game
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(1..=10)
    )]
    max_attempts: u8,

    /// Seed for the target word choice (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Mark a letter present whenever it appears in the target, ignoring duplicate counts
    #[arg(long, global = true)]
    legacy_scoring: bool,

    /// Start the TUI in light theme
    #[arg(long, global = true)]
    light: bool,

    /// Write diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Plain line-based game (no TUI)
    Simple,

    /// Score a guess against a target word
    Score {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn settings(&self) -> GameSettings {
        GameSettings {
            max_attempts: usize::from(self.max_attempts),
            scoring: self.scoring(),
            seed: self.seed,
        }
    }

    const fn scoring(&self) -> ScoringRule {
        if self.legacy_scoring {
            ScoringRule::Legacy
        } else {
            ScoringRule::Standard
        }
    }
}

/// Load word lists based on the -w flag
///
/// Returns (`dictionary`, `targets`)
/// - "all": every allowed word may be guessed, targets come from the answers
/// - "answers": only answer words may be guessed
/// - "<path>": guesses from the file; answers are always accepted too
fn load_wordlists(wordlist_mode: &str) -> Result<(WordList, TargetPool)> {
    let answer_words = words_from_slice(ANSWERS);

    let guess_words: Vec<Word> = match wordlist_mode {
        "all" => words_from_slice(ALLOWED),
        "answers" => answer_words.clone(),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            if words.is_empty() {
                bail!("Word list {path} contains no valid 5-letter words");
            }
            words
        }
    };

    let mut dictionary = WordList::from_words(&guess_words);
    dictionary.extend(&answer_words);
    let targets = TargetPool::new(answer_words);
    debug!(
        mode = wordlist_mode,
        guesses = dictionary.len(),
        targets = targets.len(),
        "word lists loaded"
    );
    Ok((dictionary, targets))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);
    let uses_terminal = matches!(command, Commands::Play);
    logging::init(LogTarget::for_mode(cli.log_file.as_deref(), uses_terminal))?;

    match command {
        Commands::Score { target, guess } => run_score_command(target, guess, cli.scoring()),
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
    }
}

fn run_score_command(target: &str, guess: &str, scoring: ScoringRule) -> Result<()> {
    let result = score_guess(target, guess, scoring)?;
    print_score_result(&result);
    Ok(())
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let (dictionary, targets) = load_wordlists(&cli.wordlist)?;
    let mut ctx = GameContext::new(&dictionary, &targets, cli.settings());

    let stdin = io::stdin();
    run_simple(&mut ctx, stdin.lock(), io::stdout())?;
    Ok(())
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let (dictionary, targets) = load_wordlists(&cli.wordlist)?;
    let ctx = GameContext::new(&dictionary, &targets, cli.settings());
    let theme = if cli.light { Theme::Light } else { Theme::Dark };

    let app = App::new(ctx, theme)?;
    let stats = run_tui(app)?;
    if stats.total_games > 0 {
        write_statistics(&mut io::stdout(), &stats)?;
    }
    Ok(())
}
