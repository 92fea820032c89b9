//! TUI application state and logic
//!
//! The session scores a guess the moment it is submitted. Everything timed
//! (tile flips, row shake, win dance, alert expiry) is presentation state
//! kept here and driven by [`App::tick`].

use super::layout::{KeyCap, key_at};
use crate::commands::GameContext;
use crate::core::{LetterOutcome, WORD_LENGTH};
use crate::game::{GameSession, GameStatus, KeyboardState, Statistics, WordList};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::cell::Cell;
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

pub const FLIP_ANIMATION_DURATION: Duration = Duration::from_millis(500);
pub const DANCE_ANIMATION_DURATION: Duration = Duration::from_millis(500);
const SHAKE_DURATION: Duration = Duration::from_millis(250);
const ALERT_DURATION: Duration = Duration::from_millis(1000);
const WIN_ALERT_DURATION: Duration = Duration::from_millis(5000);
const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// A message shown above the keyboard; `expires: None` stays until the next game
#[derive(Debug, Clone)]
pub struct Alert {
    pub text: String,
    pub expires: Option<Instant>,
}

/// What a grid cell shows at a given instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Empty,
    /// Typed (or submitted but not yet flipped)
    Active(u8),
    /// Mid-flip, outcome not shown yet
    Flipping(u8),
    Revealed(u8, LetterOutcome),
}

/// A submitted row whose tiles are flipping over
#[derive(Debug, Clone, Copy)]
struct Reveal {
    row: usize,
    started: Instant,
}

impl Reveal {
    /// Tiles start flipping one after another, half a flip apart
    fn stagger() -> Duration {
        FLIP_ANIMATION_DURATION / 2
    }

    fn tile_start(col: usize) -> Duration {
        Self::stagger() * col as u32
    }

    fn duration() -> Duration {
        Self::tile_start(WORD_LENGTH - 1) + FLIP_ANIMATION_DURATION
    }
}

/// Application state
pub struct App<'a> {
    ctx: GameContext<'a>,
    pub session: GameSession<'a, WordList>,
    pub keyboard: KeyboardState,
    pub input: String,
    pub alerts: Vec<Alert>,
    pub theme: Theme,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Where the renderer last drew the on-screen keyboard
    pub keyboard_area: Cell<Rect>,
    reveal: Option<Reveal>,
    shake_started: Option<Instant>,
    dance_started: Option<Instant>,
    /// Current game already counted in `stats`
    result_recorded: bool,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no target word can be drawn.
    pub fn new(mut ctx: GameContext<'a>, theme: Theme) -> Result<Self> {
        let session = ctx.new_session()?;
        Ok(Self {
            ctx,
            session,
            keyboard: KeyboardState::new(),
            input: String::new(),
            alerts: Vec::new(),
            theme,
            stats: Statistics::default(),
            should_quit: false,
            keyboard_area: Cell::new(Rect::default()),
            reveal: None,
            shake_started: None,
            dance_started: None,
            result_recorded: false,
        })
    }

    /// True while a submitted row is still flipping
    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.reveal.is_some()
    }

    /// Game is over and its result has been shown
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.session.is_over() && !self.is_revealing()
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.theme = self.theme.toggled(),
            KeyCode::Enter => self.submit_guess(now),
            KeyCode::Backspace | KeyCode::Delete => self.delete_key(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.press_key(c),
            _ => {}
        }
    }

    /// Handle a left click at a screen cell
    pub fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        match key_at(self.keyboard_area.get(), column, row) {
            Some(KeyCap::Letter(letter)) => self.press_key(char::from(letter)),
            Some(KeyCap::Enter) => self.submit_guess(now),
            Some(KeyCap::Delete) => self.delete_key(),
            None => {}
        }
    }

    pub fn press_key(&mut self, key: char) {
        if self.is_revealing() || self.session.is_over() || self.input.len() >= WORD_LENGTH {
            return;
        }
        self.input.push(key.to_ascii_lowercase());
    }

    pub fn delete_key(&mut self) {
        if self.is_revealing() {
            return;
        }
        self.input.pop();
    }

    /// Submit the current row, or start a new game once the last one is over
    pub fn submit_guess(&mut self, now: Instant) {
        if self.is_revealing() {
            return;
        }
        if self.session.is_over() {
            self.new_game();
            return;
        }

        let submitted = self.session.submit(&self.input).map(|_| ());
        match submitted {
            Ok(()) => {
                let row = self.session.attempts().len() - 1;
                self.reveal = Some(Reveal { row, started: now });
                self.input.clear();
            }
            Err(err) => {
                debug!(input = %self.input, %err, "guess rejected");
                self.show_alert(err.to_string(), Some(ALERT_DURATION), now);
                self.shake_started = Some(now);
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.ctx.new_session() {
            Ok(session) => {
                self.session = session;
                self.keyboard.clear();
                self.input.clear();
                self.alerts.clear();
                self.reveal = None;
                self.shake_started = None;
                self.dance_started = None;
                self.result_recorded = false;
            }
            Err(err) => self.alerts.push(Alert {
                text: err.to_string(),
                expires: None,
            }),
        }
    }

    /// Advance timers: expire alerts and finish a completed reveal
    pub fn tick(&mut self, now: Instant) {
        self.alerts
            .retain(|alert| alert.expires.is_none_or(|expires| now < expires));

        if let Some(reveal) = self.reveal
            && now.saturating_duration_since(reveal.started) >= Reveal::duration()
        {
            self.reveal = None;
            if let Some(result) = self.session.attempts().get(reveal.row) {
                self.keyboard.record(result);
            }
            self.check_win_lose(now);
        }
    }

    fn check_win_lose(&mut self, now: Instant) {
        let report = self.session.status();
        match report.status {
            GameStatus::Won => {
                self.show_alert("You won".to_string(), Some(WIN_ALERT_DURATION), now);
                self.dance_started = Some(now);
            }
            GameStatus::Lost => {
                let target = self.session.target().text().to_uppercase();
                self.show_alert(target, None, now);
            }
            GameStatus::InProgress => return,
        }
        self.record_result();
    }

    /// Count a finished game in `stats`, once
    fn record_result(&mut self) {
        if self.session.is_over() && !self.result_recorded {
            self.stats.record(&self.session.status());
            self.result_recorded = true;
        }
    }

    /// Statistics for the run, including a game whose last row is still flipping
    #[must_use]
    pub fn into_statistics(mut self) -> Statistics {
        self.record_result();
        self.stats
    }

    fn show_alert(&mut self, text: String, duration: Option<Duration>, now: Instant) {
        // Newest first
        self.alerts.insert(
            0,
            Alert {
                text,
                expires: duration.map(|d| now + d),
            },
        );
    }

    /// What the cell at (`row`, `col`) of the grid shows at `now`
    ///
    /// Cells outside the grid are `Empty`.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize, now: Instant) -> TileState {
        if col >= WORD_LENGTH {
            return TileState::Empty;
        }
        let attempts = self.session.attempts();

        if let Some(result) = attempts.get(row) {
            let letter = result.guess().char_at(col);
            let outcome = result.outcomes()[col];

            return match self.reveal {
                Some(reveal) if reveal.row == row => {
                    let elapsed = now.saturating_duration_since(reveal.started);
                    let start = Reveal::tile_start(col);
                    if elapsed < start {
                        TileState::Active(letter)
                    } else if elapsed < start + Reveal::stagger() {
                        TileState::Flipping(letter)
                    } else {
                        TileState::Revealed(letter, outcome)
                    }
                }
                _ => TileState::Revealed(letter, outcome),
            };
        }

        if row == attempts.len()
            && !self.session.is_over()
            && let Some(&letter) = self.input.as_bytes().get(col)
        {
            return TileState::Active(letter);
        }

        TileState::Empty
    }

    /// Row index that should shake at `now`
    #[must_use]
    pub fn shaking_row(&self, now: Instant) -> Option<usize> {
        self.shake_started
            .filter(|&started| now.saturating_duration_since(started) < SHAKE_DURATION)
            .map(|_| self.session.attempts().len())
    }

    /// Whether tile `col` of the winning row is mid-dance at `now`
    #[must_use]
    pub fn is_dancing(&self, row: usize, col: usize, now: Instant) -> bool {
        let Some(started) = self.dance_started else {
            return false;
        };
        if row + 1 != self.session.attempts().len() {
            return false;
        }
        let start = DANCE_ANIMATION_DURATION / 5 * col as u32;
        let elapsed = now.saturating_duration_since(started);
        elapsed >= start && elapsed < start + DANCE_ANIMATION_DURATION
    }

    /// Key color state, held back until the row that earned it has flipped
    #[must_use]
    pub fn key_state(&self, letter: u8) -> Option<LetterOutcome> {
        self.keyboard.get(letter)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key, Instant::now());
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    app.handle_click(mouse.column, mouse.row, Instant::now());
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.into_statistics())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::GameSettings;
    use crate::game::TargetPool;
    use crate::interactive::layout::{KEYBOARD_HEIGHT, key_rects};
    use crate::wordlists::loader::words_from_slice;

    struct Fixture {
        dictionary: WordList,
        targets: TargetPool,
    }

    impl Fixture {
        fn new() -> Self {
            let words = words_from_slice(&["crane", "crate", "slate", "audio"]);
            Self {
                dictionary: WordList::from_words(&words),
                targets: TargetPool::new(words_from_slice(&["crane"])),
            }
        }

        fn app(&self, max_attempts: usize) -> App<'_> {
            let settings = GameSettings {
                max_attempts,
                seed: Some(1),
                ..GameSettings::default()
            };
            let ctx = GameContext::new(&self.dictionary, &self.targets, settings);
            App::new(ctx, Theme::Dark).unwrap()
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word(app: &mut App, word: &str, now: Instant) {
        for c in word.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        app.handle_key(key(KeyCode::Enter), now);
    }

    fn after_reveal(now: Instant) -> Instant {
        now + Reveal::duration()
    }

    #[test]
    fn typing_fills_the_current_row() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        for c in "CRANES".chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        assert_eq!(app.input, "crane");
        assert_eq!(app.tile(0, 0, now), TileState::Active(b'c'));

        app.handle_key(key(KeyCode::Backspace), now);
        assert_eq!(app.input, "cran");
        assert_eq!(app.tile(0, 4, now), TileState::Empty);
    }

    #[test]
    fn short_row_alerts_and_shakes() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        type_word(&mut app, "cra", now);
        assert_eq!(app.alerts[0].text, "Not enough letters");
        assert_eq!(app.shaking_row(now), Some(0));
        assert_eq!(app.session.status().attempts_used, 0);
        assert_eq!(app.input, "cra");

        app.tick(now + ALERT_DURATION);
        assert!(app.alerts.is_empty());
        assert_eq!(app.shaking_row(now + SHAKE_DURATION), None);
    }

    #[test]
    fn unknown_word_alerts() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        type_word(&mut app, "zzzzz", now);
        assert_eq!(app.alerts[0].text, "Not in the word list");
        assert_eq!(app.session.status().attempts_used, 0);
    }

    #[test]
    fn tiles_flip_one_after_another() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        type_word(&mut app, "crate", now);
        assert!(app.is_revealing());
        assert_eq!(app.tile(0, 0, now), TileState::Flipping(b'c'));
        assert_eq!(app.tile(0, 1, now), TileState::Active(b'r'));

        let later = now + Reveal::stagger();
        assert_eq!(
            app.tile(0, 0, later),
            TileState::Revealed(b'c', LetterOutcome::Correct)
        );
        assert_eq!(app.tile(0, 1, later), TileState::Flipping(b'r'));

        // Keys light up only after the reveal finishes
        assert_eq!(app.key_state(b't'), None);
        app.tick(after_reveal(now));
        assert!(!app.is_revealing());
        assert_eq!(app.key_state(b't'), Some(LetterOutcome::Absent));
        assert_eq!(app.key_state(b'c'), Some(LetterOutcome::Correct));
    }

    #[test]
    fn input_is_ignored_while_revealing() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        type_word(&mut app, "crate", now);
        app.handle_key(key(KeyCode::Char('s')), now);
        assert!(app.input.is_empty());

        app.tick(after_reveal(now));
        app.handle_key(key(KeyCode::Char('s')), now);
        assert_eq!(app.input, "s");
    }

    #[test]
    fn win_is_announced_after_reveal() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        type_word(&mut app, "crane", now);
        assert_eq!(app.session.status().status, GameStatus::Won);
        assert!(app.alerts.is_empty());
        assert!(!app.is_finished());

        let done = after_reveal(now);
        app.tick(done);
        assert!(app.is_finished());
        assert_eq!(app.alerts[0].text, "You won");
        assert!(app.is_dancing(0, 0, done));
        assert!(!app.is_dancing(0, 4, done));
        assert_eq!(app.stats.games_won, 1);

        // Win alert lasts five seconds
        app.tick(done + Duration::from_secs(4));
        assert_eq!(app.alerts.len(), 1);
        app.tick(done + WIN_ALERT_DURATION);
        assert!(app.alerts.is_empty());
    }

    #[test]
    fn loss_reveals_target_until_next_game() {
        let fixture = Fixture::new();
        let mut app = fixture.app(1);
        let now = Instant::now();

        type_word(&mut app, "slate", now);
        app.tick(after_reveal(now));
        assert_eq!(app.alerts[0].text, "CRANE");
        assert_eq!(app.stats.total_games, 1);

        app.tick(now + Duration::from_secs(60));
        assert_eq!(app.alerts[0].text, "CRANE");

        // Letters are ignored, Enter starts over
        app.handle_key(key(KeyCode::Char('a')), now);
        assert!(app.input.is_empty());
        app.handle_key(key(KeyCode::Enter), now);
        assert!(app.alerts.is_empty());
        assert_eq!(app.session.status().attempts_used, 0);
        assert_eq!(app.key_state(b's'), None);
    }

    #[test]
    fn game_ended_mid_reveal_still_counts() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        type_word(&mut app, "crane", now);
        assert!(app.is_revealing());
        assert_eq!(app.stats.total_games, 0);

        let stats = app.into_statistics();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
    }

    #[test]
    fn finished_game_is_counted_once() {
        let fixture = Fixture::new();
        let mut app = fixture.app(1);
        let now = Instant::now();

        type_word(&mut app, "slate", now);
        app.tick(after_reveal(now));
        app.tick(after_reveal(now) + Duration::from_secs(1));

        let stats = app.into_statistics();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
    }

    #[test]
    fn tiles_past_the_last_column_are_empty() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        type_word(&mut app, "crate", now);
        app.tick(after_reveal(now));
        assert_eq!(app.tile(0, WORD_LENGTH, now), TileState::Empty);
        assert_eq!(app.tile(1, WORD_LENGTH + 3, now), TileState::Empty);
    }

    #[test]
    fn clicks_on_keyboard_type_and_submit() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();
        let area = Rect::new(0, 20, 80, KEYBOARD_HEIGHT);
        app.keyboard_area.set(area);

        let rects = key_rects(area);
        let click = |app: &mut App, cap: KeyCap| {
            let (_, rect) = rects.iter().find(|(k, _)| *k == cap).unwrap();
            app.handle_click(rect.x, rect.y, now);
        };

        for &letter in b"slatx" {
            click(&mut app, KeyCap::Letter(letter));
        }
        click(&mut app, KeyCap::Delete);
        click(&mut app, KeyCap::Letter(b'e'));
        assert_eq!(app.input, "slate");

        click(&mut app, KeyCap::Enter);
        assert_eq!(app.session.status().attempts_used, 1);
    }

    #[test]
    fn tab_toggles_theme_and_escape_quits() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        let now = Instant::now();

        app.handle_key(key(KeyCode::Tab), now);
        assert_eq!(app.theme, Theme::Light);
        app.handle_key(key(KeyCode::Tab), now);
        assert_eq!(app.theme, Theme::Dark);

        app.handle_key(key(KeyCode::Esc), now);
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let fixture = Fixture::new();
        let mut app = fixture.app(6);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
        assert!(app.input.is_empty());
    }
}
