//! Wordle Game - CLI
//!
//! Plays Wordle in the terminal, with TUI and plain CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::run_simple,
    interactive::{App, run_tui},
    wordlists::{
        WORDS, WordList,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, bundled list) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Plain CLI mode without TUI
    Simple,
}

/// Load the word list based on the -w flag
///
/// - "embedded": the list bundled into the binary
/// - "<path>": load a custom newline-delimited list from a file
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)
            .with_context(|| format!("Failed to load word list from {path}"))?,
    };

    Ok(WordList::new(words))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_wordlist(&cli.wordlist)?;
    anyhow::ensure!(
        !words.is_empty(),
        "Word list has no playable five-letter words"
    );

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&words),
        Commands::Simple => run_simple(&words).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn run_play_command(words: &WordList) -> Result<()> {
    let app = App::new(words).context("Word list has no playable words")?;
    run_tui(app)
}
