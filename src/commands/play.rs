//! Interactive game session
//!
//! Line-based console loop: show the hand, read a word, score and refill on
//! success, repeat until the player opts out.

use crate::core::TileCatalog;
use crate::game::{Hand, HandManager};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run an interactive session against the given catalog
///
/// The hand starts at `hand_size` tiles and is refilled back to that size
/// after every successful play. Words are read from stdin until the player
/// answers "no" to the continue prompt.
///
/// # Errors
///
/// Returns an error if reading user input fails or the catalog is empty.
pub fn run_play<R: Rng>(catalog: &TileCatalog, rng: R, hand_size: usize) -> Result<(), String> {
    let mut manager = HandManager::new(catalog, rng);
    let mut hand = Hand::new();
    manager
        .refill(&mut hand, hand_size)
        .map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Welcome to the Scrabble Rack Game!            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell words from the tiles in your hand. Every letter you use is");
    println!("consumed, and your hand is refilled after each successful word.\n");

    loop {
        println!("{hand}\n");

        let word = get_user_input("Enter your word")?;

        if manager.can_spell(&mut hand, &word) {
            let score = manager.compute_score(&word);
            println!("\n{}", "Yes! You can spell that word!".green().bold());
            println!(
                "Score for '{word}': {}\n",
                score.to_string().bright_yellow().bold()
            );
            manager
                .refill(&mut hand, hand_size)
                .map_err(|e| e.to_string())?;
        } else {
            println!("\n{}\n", "Sorry, you cannot spell that word.".red());
        }

        let answer = get_user_input("Do you want to continue? (yes/no)")?;
        if answer.eq_ignore_ascii_case("no") {
            println!("\nSee you then!\n");
            return Ok(());
        }
        println!();
    }
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
