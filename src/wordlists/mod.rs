//! Word lists for the game
//!
//! Provides the embedded default list, file loading, and the `WordList`
//! used for secret selection and guess validation.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::WordList;
