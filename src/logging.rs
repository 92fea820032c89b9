//! Diagnostic tracing
//!
//! Reads `RUST_LOG`, defaulting to `warn`. Line-based modes log to stderr.
//! The TUI owns the terminal, so it logs only when a log file is given.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Off,
}

impl<'a> LogTarget<'a> {
    /// Pick the target for a run: an explicit file wins, otherwise stderr
    /// unless the terminal is taken by the TUI
    #[must_use]
    pub const fn for_mode(log_file: Option<&'a Path>, uses_terminal: bool) -> Self {
        match (log_file, uses_terminal) {
            (Some(path), _) => Self::File(path),
            (None, true) => Self::Off,
            (None, false) => Self::Stderr,
        }
    }
}

/// Install the global tracing subscriber
///
/// # Errors
/// Returns an error if the log file cannot be created.
///
/// # Example
/// ```bash
/// RUST_LOG=wordle_game=debug wordle_game --log-file game.log play
/// ```
pub fn init(target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr).compact())
                .init();
        }
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .compact(),
                )
                .init();
        }
    }

    Ok(())
}
