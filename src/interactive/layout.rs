//! On-screen keyboard geometry
//!
//! The renderer draws keys at these rectangles and mouse clicks are mapped
//! back through the same function, so the two can never disagree.

use crate::game::LAYOUT;
use ratatui::layout::{Position, Rect};

const KEY_WIDTH: u16 = 5;
const WIDE_KEY_WIDTH: u16 = 7;
const KEY_GAP: u16 = 1;
const ROW_STEP: u16 = 2;

/// Rows needed to draw the keyboard
pub const KEYBOARD_HEIGHT: u16 = 5;

/// A key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCap {
    Letter(u8),
    Enter,
    Delete,
}

impl KeyCap {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(letter) => char::from(letter.to_ascii_uppercase()).to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }

    const fn width(self) -> u16 {
        match self {
            Self::Letter(_) => KEY_WIDTH,
            Self::Enter | Self::Delete => WIDE_KEY_WIDTH,
        }
    }
}

fn rows() -> [Vec<KeyCap>; 3] {
    let letters = |row: &str| row.bytes().map(KeyCap::Letter).collect::<Vec<_>>();
    let mut bottom = vec![KeyCap::Enter];
    bottom.extend(letters(LAYOUT[2]));
    bottom.push(KeyCap::Delete);
    [letters(LAYOUT[0]), letters(LAYOUT[1]), bottom]
}

/// Rectangles of every key that fits inside `area`, rows centered
#[must_use]
pub fn key_rects(area: Rect) -> Vec<(KeyCap, Rect)> {
    let mut rects = Vec::with_capacity(28);

    for (r, row) in rows().iter().enumerate() {
        let y = area.y + r as u16 * ROW_STEP;
        if y >= area.bottom() {
            break;
        }

        let row_width: u16 =
            row.iter().map(|k| k.width()).sum::<u16>() + KEY_GAP * (row.len() as u16 - 1);
        let mut x = area.x + area.width.saturating_sub(row_width) / 2;

        for &key in row {
            let rect = Rect::new(x, y, key.width(), 1);
            if rect.right() <= area.right() {
                rects.push((key, rect));
            }
            x += key.width() + KEY_GAP;
        }
    }

    rects
}

/// The key under a screen cell, if any
#[must_use]
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<KeyCap> {
    let position = Position::new(column, row);
    key_rects(area)
        .into_iter()
        .find(|(_, rect)| rect.contains(position))
        .map(|(key, _)| key)
}
