//! TUI rendering with ratatui
//!
//! Board, virtual keyboard, message line, and status bar.

use super::app::App;
use crate::core::{LetterStatus, WORD_LENGTH};
use crate::game::{GameStatus, MAX_GUESSES};
use crate::output::formatters::KEY_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_GUESSES as u16 + 2),  // Board
            Constraint::Length(3),                       // Message
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(3),                          // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

/// Tile and key background for a feedback level
fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unknown => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let game = &app.game;
    let mut lines: Vec<Line> = Vec::with_capacity(MAX_GUESSES);

    for row in 0..MAX_GUESSES {
        if let Some(record) = game.guesses().get(row) {
            // Submitted row: tinted tiles
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for (letter, &status) in record.word.text().chars().zip(record.feedback.iter()) {
                spans.push(Span::styled(format!(" {letter} "), status_style(status)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        } else if row == game.guesses().len() && game.status() == GameStatus::InProgress {
            // Active row: typed letters, untinted
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for i in 0..WORD_LENGTH {
                let cell = game.current_input().as_bytes().get(i).map_or_else(
                    || Span::styled(" _ ", Style::default().fg(Color::DarkGray)),
                    |&b| {
                        Span::styled(
                            format!(" {} ", b as char),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        )
                    },
                );
                spans.push(cell);
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        } else {
            // Blank placeholder row
            let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (app.game.message(), app.game.status()) {
        (Some(message), GameStatus::Won) => (message.to_string(), Color::Green),
        (Some(message), _) => (message.to_string(), Color::Red),
        (None, _) => (String::new(), Color::White),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let mut lines: Vec<Line> = Vec::with_capacity(KEY_ROWS.len());

    for row in KEY_ROWS {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for letter in row.chars() {
            let status = keyboard.status(letter as u8);
            spans.push(Span::styled(format!(" {letter} "), status_style(status)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    let keyboard_widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard_widget, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let guesses_text = format!(
        "Guess {}/{}",
        app.game.guesses().len().min(MAX_GUESSES),
        MAX_GUESSES
    );
    let guesses = Paragraph::new(guesses_text).alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.game.status() == GameStatus::InProgress {
        "Type letters | Enter: Submit | Ctrl-N: New Game | Esc: Quit"
    } else {
        "Ctrl-N: New Game | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
