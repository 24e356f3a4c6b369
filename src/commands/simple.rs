//! Simple interactive CLI mode
//!
//! Plays the game on plain stdin/stdout without the TUI.

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameStatus, MAX_GUESSES};
use crate::output::formatters::{KEY_ROWS, guess_line, keyboard_line};
use crate::output::print_game_summary;
use crate::wordlists::WordList;
use colored::Colorize;
use std::io::{self, Write};

/// Run the plain CLI game loop
///
/// # Errors
///
/// Returns an error if the word list is empty or on an I/O error reading
/// user input.
pub fn run_simple(words: &WordList) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 WORDLE - Terminal Edition                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word in {MAX_GUESSES} tries.");
    println!("After each guess the tiles show your feedback:\n");
    println!("  - {} letter in the correct spot", " green ".white().bold().on_green());
    println!("  - {} letter elsewhere in the word", " yellow ".black().bold().on_yellow());
    println!("  - {} letter not in the word", " gray ".white().on_bright_black());
    println!("\nCommands: 'quit' to exit, 'new' for a new game\n");

    let mut game = Game::new(words).ok_or("Word list is empty")?;

    loop {
        print_board(&game);

        let input = get_user_input(&format!(
            "Guess {}/{}",
            game.guesses().len() + 1,
            MAX_GUESSES
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                game.new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        // The prompt line is the whole input: discard any leftover from a
        // rejected guess before typing the new one
        while !game.current_input().is_empty() {
            game.press_backspace();
        }

        if input.chars().count() > WORD_LENGTH {
            println!("\n{}\n", "NOT A WORD!".bright_red().bold());
            continue;
        }

        for ch in input.chars() {
            game.press_letter(ch);
        }
        game.submit();

        match game.status() {
            GameStatus::InProgress => {
                if let Some(message) = game.message() {
                    println!("\n{}\n", message.bright_red().bold());
                }
            }
            GameStatus::Won | GameStatus::Lost => {
                print_game_summary(&game);

                match get_user_input("Play again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        game.new_game();
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Print the submitted guesses and the tinted keyboard
fn print_board(game: &Game) {
    if game.guesses().is_empty() {
        return;
    }

    println!("────────────────────────────────────────────────────────────");
    for record in game.guesses() {
        println!("  {}", guess_line(record));
    }
    println!();
    for (i, row) in KEY_ROWS.iter().enumerate() {
        println!("  {}{}", " ".repeat(i * 2), keyboard_line(game.keyboard(), row));
    }
    println!("────────────────────────────────────────────────────────────");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
