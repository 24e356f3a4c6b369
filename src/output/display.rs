//! End-of-game summary output

use super::formatters::{feedback_to_emoji, guess_line};
use crate::game::{Game, GameStatus, MAX_GUESSES};
use colored::Colorize;

/// Print the finished round: banner, colored guess history, share grid
///
/// Does nothing while the round is still in progress.
pub fn print_game_summary(game: &Game) {
    match game.status() {
        GameStatus::InProgress => return,
        GameStatus::Won => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!(
                    "  🎉 You won! The word was {} — solved in {}/{}",
                    game.secret(),
                    game.guesses().len(),
                    MAX_GUESSES
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        GameStatus::Lost => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!("  Game over! The word was {}", game.secret())
                    .bright_red()
                    .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
    }

    println!("\n  Guess history:");
    for (i, record) in game.guesses().iter().enumerate() {
        println!("    {}. {}", (i + 1).to_string().bright_black(), guess_line(record));
    }

    // Share-style grid
    let score = match game.status() {
        GameStatus::Won => game.guesses().len().to_string(),
        _ => "X".to_string(),
    };
    println!("\n  Wordle {score}/{MAX_GUESSES}");
    for record in game.guesses() {
        println!("  {}", feedback_to_emoji(&record.feedback));
    }
    println!();
}
