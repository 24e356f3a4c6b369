//! Wordle Game
//!
//! A terminal Wordle: guess the hidden five-letter word within six
//! attempts, with a virtual keyboard that tracks the best-known feedback
//! per letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::Game;
//! use wordle_game::wordlists::{WordList, loader::words_from_slice};
//!
//! let words = WordList::new(words_from_slice(&["crane", "trace"]));
//! let mut game = Game::with_secret(&words, Word::new("crane").unwrap());
//!
//! for ch in "trace".chars() {
//!     game.press_letter(ch);
//! }
//! game.submit();
//! assert_eq!(game.guesses().len(), 1);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
