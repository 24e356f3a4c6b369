//! Game state machine

mod engine;

pub use engine::{Game, GameStatus, GuessRecord, MAX_GUESSES};
