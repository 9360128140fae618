//! Simple interactive CLI mode
//!
//! Text-based game without the TUI: one guess per line.

use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, Session};
use crate::output::{print_board, print_game_over};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Guess(String),
}

fn parse_command(input: &str) -> Command {
    match input.to_lowercase().as_str() {
        "quit" | ":q" | "exit" => Command::Quit,
        "new" | ":n" => Command::NewGame,
        _ => Command::Guess(input.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut Session) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        FOUR - guess the word         ║");
    println!("╚══════════════════════════════════════╝\n");

    println!(
        "Find the hidden {}-letter word in {} tries.",
        WORD_LENGTH,
        session.config().max_attempts
    );
    println!("  - {} letter is in the right spot", "green".green());
    println!("  - {} letter is in the word elsewhere", "yellow".yellow());
    println!("  - {} letter is not in the word", "gray".bright_black());
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        print_board(session);

        let Some(input) = get_user_input("Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_command(&input) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                session.start_new_game();
                println!("\n🔄 New game started!");
                continue;
            }
            Command::Guess(word) => play_guess(session, &word),
        }

        // No frame loop here: let the reveal and outcome effects run out
        session.settle();

        if session.status() != GameStatus::Playing {
            print_board(session);
            print_game_over(session);

            match get_user_input("Play again? (yes/no)")?
                .unwrap_or_default()
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {
                    session.start_new_game();
                    println!("\n🔄 New game started!");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn play_guess(session: &mut Session, word: &str) {
    // Never let the buffer silently rewrite the line into another word
    if word.len() > WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        println!("❌ {}", format!("Enter exactly {WORD_LENGTH} letters").red());
        return;
    }

    while session.backspace() {}
    for ch in word.chars() {
        session.append_letter(ch);
    }

    if let Err(rejection) = session.submit_guess() {
        println!("❌ {}", rejection.to_string().red());
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
