//! Formatting utilities for terminal output

use crate::core::{KeyboardState, LetterStatus};
use crate::game::GuessRecord;
use colored::{ColoredString, Colorize};

/// Virtual keyboard rows in QWERTY order
pub const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format one guess's feedback as a share-style emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: &[LetterStatus; 5]) -> String {
    feedback
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            _ => '⬛',
        })
        .collect()
}

/// One colored letter cell
#[must_use]
pub fn tile(letter: char, status: LetterStatus) -> ColoredString {
    let cell = format!(" {letter} ");
    match status {
        LetterStatus::Correct => cell.white().bold().on_green(),
        LetterStatus::Present => cell.black().bold().on_yellow(),
        LetterStatus::Absent => cell.white().on_bright_black(),
        LetterStatus::Unknown => cell.normal(),
    }
}

/// A submitted guess as a row of colored tiles
#[must_use]
pub fn guess_line(record: &GuessRecord) -> String {
    record
        .word
        .text()
        .chars()
        .zip(record.feedback.iter())
        .map(|(letter, &status)| tile(letter, status).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One keyboard row with keys tinted by their best-known status
#[must_use]
pub fn keyboard_line(keyboard: &KeyboardState, row: &str) -> String {
    row.chars()
        .map(|letter| tile(letter, keyboard.status(letter as u8)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
