//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero game-loop
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{LetterStatus, evaluate};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
