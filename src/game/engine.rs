//! Game session state machine
//!
//! One `Game` value holds a whole round: the secret word, the submitted
//! guesses with their feedback, the in-progress input, the keyboard
//! state, and the transient status message. All mutation goes through the
//! transition methods; the front end re-reads the accessors after each
//! event.

use crate::core::{KeyboardState, LetterStatus, WORD_LENGTH, Word, evaluate};
use crate::wordlists::WordList;

/// Maximum number of guesses per game
pub const MAX_GUESSES: usize = 6;

/// A submitted guess with its per-position feedback
#[derive(Debug, Clone)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: [LetterStatus; WORD_LENGTH],
}

/// Whether the round is live or finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One Wordle round
///
/// The word list is shared, read-only data; the game itself is owned by
/// exactly one front-end controller. `new_game` replaces the state
/// wholesale rather than patching it field by field.
#[derive(Debug, Clone)]
pub struct Game<'a> {
    words: &'a WordList,
    secret: Word,
    guesses: Vec<GuessRecord>,
    input: String,
    status: GameStatus,
    keyboard: KeyboardState,
    message: Option<String>,
}

impl<'a> Game<'a> {
    /// Start a game with a secret drawn uniformly at random
    ///
    /// Returns `None` when the word list is empty.
    #[must_use]
    pub fn new(words: &'a WordList) -> Option<Self> {
        let secret = words.pick_secret()?.clone();
        Some(Self::with_secret(words, secret))
    }

    /// Start a game with a known secret
    #[must_use]
    pub fn with_secret(words: &'a WordList, secret: Word) -> Self {
        Self {
            words,
            secret,
            guesses: Vec::new(),
            input: String::new(),
            status: GameStatus::InProgress,
            keyboard: KeyboardState::new(),
            message: None,
        }
    }

    /// Type a letter into the current input
    ///
    /// Accepts A-Z in either case; anything else is ignored. No-op once
    /// the input holds five letters or the round is over.
    pub fn press_letter(&mut self, letter: char) {
        if self.status != GameStatus::InProgress {
            return;
        }
        let letter = letter.to_ascii_uppercase();
        if letter.is_ascii_uppercase() && self.input.len() < WORD_LENGTH {
            self.input.push(letter);
        }
    }

    /// Remove the last letter of the current input, if any
    pub fn press_backspace(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        self.input.pop();
    }

    /// Submit the current input as a guess
    ///
    /// Incomplete or out-of-dictionary input only sets the message and
    /// leaves the rest of the state untouched, so the player can correct
    /// it. A valid guess is evaluated, recorded, folded into the
    /// keyboard, and may end the round.
    pub fn submit(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }

        let Ok(letters) = <[u8; WORD_LENGTH]>::try_from(self.input.as_bytes()) else {
            self.message = Some("Not enough letters".to_string());
            return;
        };
        let guess = Word::from_letters(letters);

        if !self.words.contains(&guess) {
            // Input is preserved for correction
            self.message = Some("NOT A WORD!".to_string());
            return;
        }

        let feedback = evaluate(&guess, &self.secret);
        self.keyboard.record(&guess, &feedback);
        let won = guess == self.secret;
        self.guesses.push(GuessRecord {
            word: guess,
            feedback,
        });
        self.input.clear();

        if won {
            self.status = GameStatus::Won;
            self.message = Some(format!("You won! The word was {}", self.secret));
        } else if self.guesses.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
            self.message = Some(format!("Game over! The word was {}", self.secret));
        } else {
            self.message = None;
        }
    }

    /// Reinitialize with a freshly drawn secret
    ///
    /// Allowed from any status. The list is non-empty whenever a game
    /// exists, so the draw always succeeds.
    pub fn new_game(&mut self) {
        if let Some(secret) = self.words.pick_secret() {
            *self = Self::with_secret(self.words, secret.clone());
        }
    }

    /// Current round status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Submitted guesses in order
    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    /// The in-progress, unsubmitted input (0-5 letters)
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    /// Best-known status per letter for the virtual keyboard
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Transient user-facing message, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The hidden word
    ///
    /// Front ends only show it through the win/lose message, but tests
    /// and the end-of-game summary need direct access.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }
}
