//! TUI rendering with ratatui
//!
//! Grid of tiles, alerts and the on-screen keyboard.

use super::app::{App, Theme, TileState};
use super::layout::{KEYBOARD_HEIGHT, KeyCap, key_rects};
use crate::core::{LetterOutcome, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;

/// Colors for one theme
struct Palette {
    background: Color,
    foreground: Color,
    empty_border: Color,
    key_background: Color,
    key_foreground: Color,
}

impl Palette {
    const fn of(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                empty_border: Color::DarkGray,
                key_background: Color::Gray,
                key_foreground: Color::Black,
            },
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                empty_border: Color::Gray,
                key_background: Color::Gray,
                key_foreground: Color::Black,
            },
        }
    }
}

const fn outcome_color(outcome: LetterOutcome) -> Color {
    match outcome {
        LetterOutcome::Correct => Color::Green,
        LetterOutcome::Present => Color::Yellow,
        LetterOutcome::Absent => Color::DarkGray,
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let palette = Palette::of(app.theme);
    let rows = app.session.max_attempts() as u16;

    f.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.foreground)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header
            Constraint::Length(rows * TILE_HEIGHT), // Grid
            Constraint::Length(1),                 // Alerts
            Constraint::Length(1),                 // Spacer
            Constraint::Length(KEYBOARD_HEIGHT),   // Keyboard
            Constraint::Length(1),                 // Help
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, app, &palette, chunks[0]);
    render_grid(f, app, &palette, chunks[1], now);
    render_alerts(f, app, &palette, chunks[2]);
    render_keyboard(f, app, &palette, chunks[4]);
    render_help(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let stats = &app.stats;
    let title = Line::from(format!(
        "W O R D L E    Played: {}  Win: {:.0}%",
        stats.total_games,
        stats.win_rate()
    ));

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.empty_border)),
        );
    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, app: &App, palette: &Palette, area: Rect, now: Instant) {
    let rows = app.session.max_attempts();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(TILE_HEIGHT); rows])
        .split(area);
    let shaking = app.shaking_row(now);

    for (row, row_area) in row_areas.iter().enumerate() {
        let tile_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(TILE_WIDTH); WORD_LENGTH])
            .flex(Flex::Center)
            .spacing(1)
            .split(*row_area);

        for (col, tile_area) in tile_areas.iter().enumerate() {
            let state = app.tile(row, col, now);
            let shake = shaking == Some(row);
            let dance = app.is_dancing(row, col, now);
            render_tile(f, palette, *tile_area, state, shake, dance);
        }
    }
}

fn render_tile(
    f: &mut Frame,
    palette: &Palette,
    area: Rect,
    state: TileState,
    shake: bool,
    dance: bool,
) {
    let (letter, style, border_style, border_type) = match state {
        TileState::Empty => (
            None,
            Style::default(),
            Style::default().fg(palette.empty_border),
            BorderType::Plain,
        ),
        TileState::Active(letter) => (
            Some(letter),
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(palette.foreground),
            BorderType::Plain,
        ),
        TileState::Flipping(letter) => (
            Some(letter),
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::DIM),
            Style::default().fg(palette.foreground),
            BorderType::Thick,
        ),
        TileState::Revealed(letter, outcome) => {
            let color = outcome_color(outcome);
            (
                Some(letter),
                Style::default()
                    .bg(color)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(color).bg(color),
                if dance {
                    BorderType::Double
                } else {
                    BorderType::Plain
                },
            )
        }
    };

    let border_style = if shake {
        Style::default().fg(Color::Red)
    } else {
        border_style
    };

    let text = letter.map_or_else(String::new, |l| {
        char::from(l.to_ascii_uppercase()).to_string()
    });
    let tile = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    f.render_widget(tile, area);
}

fn render_alerts(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let text = app
        .alerts
        .iter()
        .map(|alert| alert.text.as_str())
        .collect::<Vec<_>>()
        .join("  ·  ");

    let alerts = Paragraph::new(text).alignment(Alignment::Center).style(
        Style::default()
            .fg(palette.foreground)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(alerts, area);
}

fn render_keyboard(f: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    app.keyboard_area.set(area);

    for (key, rect) in key_rects(area) {
        let state = match key {
            KeyCap::Letter(letter) => app.key_state(letter),
            KeyCap::Enter | KeyCap::Delete => None,
        };
        let style = state.map_or_else(
            || {
                Style::default()
                    .bg(palette.key_background)
                    .fg(palette.key_foreground)
            },
            |outcome| {
                let fg = if outcome == LetterOutcome::Absent {
                    Color::Gray
                } else {
                    Color::Black
                };
                Style::default().bg(outcome_color(outcome)).fg(fg)
            },
        );

        let cap = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD));
        f.render_widget(cap, rect);
    }
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.is_finished() {
        "Enter: New Game | Tab: Theme | Esc: Quit"
    } else {
        "Type or click letters | Enter: Submit | Backspace: Delete | Tab: Theme | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
