//! Win/loss statistics across games in one run

use super::session::{GameStatus, StatusReport};

/// Tally of finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts games won in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Count a finished game; in-progress reports are ignored
    pub fn record(&mut self, report: &StatusReport) {
        match report.status {
            GameStatus::InProgress => return,
            GameStatus::Won => {
                self.games_won += 1;
                let n = report.attempts_used;
                if self.guess_distribution.len() <= n {
                    self.guess_distribution.resize(n + 1, 0);
                }
                self.guess_distribution[n] += 1;
            }
            GameStatus::Lost => {}
        }
        self.total_games += 1;
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Game counts are small
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
