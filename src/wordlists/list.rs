//! The playable word list
//!
//! One list serves both roles: the pool the secret is drawn from and the
//! dictionary guesses are validated against. Loaded once at startup and
//! read-only afterwards.

use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Immutable set of valid five-letter words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from already-validated words
    ///
    /// Duplicates are kept in the ordered sequence but membership checks
    /// treat the list as a set.
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let index = words.iter().cloned().collect();
        Self { words, index }
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if the list holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check dictionary membership for a guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// All words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Draw a secret word uniformly at random
    ///
    /// Returns `None` only when the list is empty.
    #[must_use]
    pub fn pick_secret(&self) -> Option<&Word> {
        self.words.choose(&mut rand::rng())
    }
}
