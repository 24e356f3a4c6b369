//! Per-letter guess feedback
//!
//! Classifies each position of a guess against the secret word:
//! - Correct: right letter, right position (green)
//! - Present: letter occurs elsewhere in the secret (yellow)
//! - Absent: letter does not occur in the secret (gray)
//! - Unknown: letter never guessed yet (only used by the keyboard)

use super::{WORD_LENGTH, Word};

/// Feedback level for a single letter
///
/// The derived ordering is the aggregation precedence:
/// `Unknown < Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterStatus {
    /// Letter has not appeared in any submitted guess
    Unknown,
    /// Letter is not in the secret word
    Absent,
    /// Letter is in the secret word at a different position
    Present,
    /// Letter is in the correct position
    Correct,
}

/// Classify a guess against the secret, one status per position
///
/// Positional rule only: a non-matching guess letter is `Present` whenever
/// the secret contains it anywhere, even if the guess repeats that letter
/// more often than the secret does. Repeated occurrences are not capped by
/// the secret's letter counts.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, Word, evaluate};
///
/// let guess = Word::new("trace").unwrap();
/// let secret = Word::new("crane").unwrap();
/// let feedback = evaluate(&guess, &secret);
///
/// // T(absent) R(correct) A(correct) C(present) E(correct)
/// assert_eq!(feedback[0], LetterStatus::Absent);
/// assert_eq!(feedback[1], LetterStatus::Correct);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, secret: &Word) -> [LetterStatus; WORD_LENGTH] {
    let mut feedback = [LetterStatus::Absent; WORD_LENGTH];

    for (i, status) in feedback.iter_mut().enumerate() {
        let letter = guess.letter_at(i);
        *status = if letter == secret.letter_at(i) {
            LetterStatus::Correct
        } else if secret.contains_letter(letter) {
            LetterStatus::Present
        } else {
            LetterStatus::Absent
        };
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn evaluate_all_absent() {
        let feedback = evaluate(&word("fghij"), &word("crane"));
        assert_eq!(feedback, [LetterStatus::Absent; 5]);
    }

    #[test]
    fn evaluate_all_correct() {
        let secret = word("crane");
        let feedback = evaluate(&secret, &secret);
        assert_eq!(feedback, [LetterStatus::Correct; 5]);
    }

    #[test]
    fn evaluate_correct_iff_same_letter_same_index() {
        let guess = word("slate");
        let secret = word("crane");

        let feedback = evaluate(&guess, &secret);

        for i in 0..5 {
            assert_eq!(
                feedback[i] == LetterStatus::Correct,
                guess.letter_at(i) == secret.letter_at(i)
            );
        }
    }

    #[test]
    fn evaluate_trace_against_crane() {
        // T not in CRANE; R, A, E match their positions; C is elsewhere
        let feedback = evaluate(&word("trace"), &word("crane"));

        assert_eq!(
            feedback,
            [
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Correct,
            ]
        );
    }

    #[test]
    fn evaluate_duplicate_guess_letters_all_marked_present() {
        // CRANE has a single A, but both As in SALSA are Present:
        // occurrences are not capped by the secret's letter counts
        let feedback = evaluate(&word("salsa"), &word("crane"));

        assert_eq!(
            feedback,
            [
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Absent,
                LetterStatus::Present,
            ]
        );
    }

    #[test]
    fn evaluate_duplicate_secret_letters() {
        // SPEED vs ERASE: S present, P absent, E at index 2 present,
        // E at index 3 present, D absent
        let feedback = evaluate(&word("speed"), &word("erase"));

        assert_eq!(
            feedback,
            [
                LetterStatus::Present,
                LetterStatus::Absent,
                LetterStatus::Present,
                LetterStatus::Present,
                LetterStatus::Absent,
            ]
        );
    }

    #[test]
    fn evaluate_returns_five_statuses_for_any_pair() {
        for (guess, secret) in [("aaaaa", "zzzzz"), ("crane", "crane"), ("robot", "floor")] {
            let feedback = evaluate(&word(guess), &word(secret));
            assert_eq!(feedback.len(), 5);
        }
    }

    #[test]
    fn status_precedence_ordering() {
        assert!(LetterStatus::Unknown < LetterStatus::Absent);
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);
    }
}
