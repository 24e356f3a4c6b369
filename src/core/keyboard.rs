//! Keyboard status aggregation
//!
//! Folds evaluated guesses into the best-known status per letter, used to
//! tint the virtual keyboard.

use super::{LetterStatus, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Best-known feedback per letter across a whole game
///
/// Letters that never appeared in a submitted guess are `Unknown`.
/// A letter's status only ever tightens: `Correct` is permanent, `Present`
/// replaces `Absent` or `Unknown`, and `Absent` only replaces `Unknown`.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    statuses: FxHashMap<u8, LetterStatus>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Status for a letter (A-Z as an uppercase ASCII byte)
    #[must_use]
    pub fn status(&self, letter: u8) -> LetterStatus {
        self.statuses
            .get(&letter)
            .copied()
            .unwrap_or(LetterStatus::Unknown)
    }

    /// True if no guess has been recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Fold one evaluated guess into the keyboard
    ///
    /// Must be called once per submitted guess, in submission order. A
    /// letter's stored status is replaced only by a strictly
    /// higher-precedence one, so repeated identical input is a no-op.
    pub fn record(&mut self, guess: &Word, feedback: &[LetterStatus; WORD_LENGTH]) {
        for (i, &status) in feedback.iter().enumerate() {
            let letter = guess.letter_at(i);
            if status > self.status(letter) {
                self.statuses.insert(letter, status);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn unguessed_letters_are_unknown() {
        let keyboard = KeyboardState::new();
        assert!(keyboard.is_empty());

        for letter in b'A'..=b'Z' {
            assert_eq!(keyboard.status(letter), LetterStatus::Unknown);
        }
    }

    #[test]
    fn record_sets_statuses_from_feedback() {
        let mut keyboard = KeyboardState::new();
        let guess = word("trace");
        let secret = word("crane");

        keyboard.record(&guess, &evaluate(&guess, &secret));

        assert_eq!(keyboard.status(b'T'), LetterStatus::Absent);
        assert_eq!(keyboard.status(b'R'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'A'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'C'), LetterStatus::Present);
        assert_eq!(keyboard.status(b'E'), LetterStatus::Correct);
        assert_eq!(keyboard.status(b'Z'), LetterStatus::Unknown);
    }

    #[test]
    fn record_is_idempotent() {
        let mut once = KeyboardState::new();
        let mut twice = KeyboardState::new();
        let guess = word("slate");
        let feedback = evaluate(&guess, &word("crane"));

        once.record(&guess, &feedback);
        twice.record(&guess, &feedback);
        twice.record(&guess, &feedback);

        for letter in b'A'..=b'Z' {
            assert_eq!(once.status(letter), twice.status(letter));
        }
    }

    #[test]
    fn correct_sticks_permanently() {
        let mut keyboard = KeyboardState::new();
        let secret = word("crane");

        // E correct in TRACE, then present in ERASE: must stay Correct
        let first = word("trace");
        keyboard.record(&first, &evaluate(&first, &secret));
        assert_eq!(keyboard.status(b'E'), LetterStatus::Correct);

        let second = word("erase");
        keyboard.record(&second, &evaluate(&second, &secret));
        assert_eq!(keyboard.status(b'E'), LetterStatus::Correct);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let mut keyboard = KeyboardState::new();
        let secret = word("crane");

        // C present in TRACE, then correct in CRUST
        let first = word("trace");
        keyboard.record(&first, &evaluate(&first, &secret));
        assert_eq!(keyboard.status(b'C'), LetterStatus::Present);

        let second = word("crust");
        keyboard.record(&second, &evaluate(&second, &secret));
        assert_eq!(keyboard.status(b'C'), LetterStatus::Correct);
    }

    #[test]
    fn statuses_never_regress() {
        let mut keyboard = KeyboardState::new();
        let secret = word("crane");
        let guesses = ["salsa", "trace", "crust", "crane"];

        let mut previous: Vec<LetterStatus> =
            (b'A'..=b'Z').map(|letter| keyboard.status(letter)).collect();

        for text in guesses {
            let guess = word(text);
            keyboard.record(&guess, &evaluate(&guess, &secret));

            let current: Vec<LetterStatus> =
                (b'A'..=b'Z').map(|letter| keyboard.status(letter)).collect();

            for (old, new) in previous.iter().zip(&current) {
                assert!(new >= old, "status regressed from {old:?} to {new:?}");
            }
            previous = current;
        }
    }
}
