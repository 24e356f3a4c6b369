//! TUI application state and event loop

use crate::game::{Game, GameStatus, MAX_GUESSES};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Session statistics across rounds
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

/// Application state
pub struct App<'a> {
    pub game: Game<'a>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app with a freshly started game
    ///
    /// Returns `None` when the word list is empty.
    #[must_use]
    pub fn new(words: &'a WordList) -> Option<Self> {
        Some(Self {
            game: Game::new(words)?,
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Submit the current input and fold a finished round into the stats
    pub fn submit(&mut self) {
        let was_live = self.game.status() == GameStatus::InProgress;
        self.game.submit();

        if was_live {
            match self.game.status() {
                GameStatus::Won => {
                    self.stats.total_games += 1;
                    self.stats.games_won += 1;
                    let guess_count = self.game.guesses().len();
                    if guess_count <= MAX_GUESSES {
                        self.stats.guess_distribution[guess_count] += 1;
                    }
                }
                GameStatus::Lost => {
                    self.stats.total_games += 1;
                }
                GameStatus::InProgress => {}
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App<'_>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_game();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => {
                    app.game.press_letter(c);
                }
                KeyCode::Backspace => {
                    app.game.press_backspace();
                }
                KeyCode::Enter => {
                    app.submit();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::loader::words_from_slice;

    fn list() -> WordList {
        WordList::new(words_from_slice(&["crane", "trace", "slate"]))
    }

    fn type_word(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.game.press_letter(ch);
        }
    }

    #[test]
    fn winning_round_updates_stats() {
        let words = list();
        let mut app = App::new(&words).unwrap();
        app.game = Game::with_secret(&words, Word::new("crane").unwrap());

        type_word(&mut app, "trace");
        app.submit();
        assert_eq!(app.stats.total_games, 0);

        type_word(&mut app, "crane");
        app.submit();

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn submit_after_win_counts_once() {
        let words = list();
        let mut app = App::new(&words).unwrap();
        app.game = Game::with_secret(&words, Word::new("crane").unwrap());

        type_word(&mut app, "crane");
        app.submit();
        app.submit();
        app.submit();

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }
}
