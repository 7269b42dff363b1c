//! Display functions for command results

use super::formatters::{score_breakdown, tile_row};
use crate::commands::{CheckResult, ScoreResult};
use crate::core::TileCatalog;
use colored::Colorize;

/// Print the result of scoring a word
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Scoring: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", score_breakdown(&result.parts));
    println!(
        "\n{}",
        format!("Score for '{}': {}", result.word, result.total)
            .green()
            .bold()
    );
}

/// Print the result of a rack check
pub fn print_check_result(result: &CheckResult) {
    if result.spellable {
        println!("\n{}", "Yes! You can spell that word!".green().bold());
        if let Some(score) = result.score {
            println!(
                "Score for '{}': {}",
                result.word,
                score.to_string().bright_yellow().bold()
            );
        }
        if result.remaining.is_empty() {
            println!("No tiles left over.");
        } else {
            println!("Tiles left over:  {}", result.remaining);
        }
    } else {
        println!("\n{}", "Sorry, you cannot spell that word.".red().bold());
        println!("Your rack still holds:  {}", result.remaining);
    }
}

/// Print the full tile value table
pub fn print_value_table(catalog: &TileCatalog) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TILE VALUES".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    for row in catalog.all_tiles().chunks(7) {
        println!("  {}", tile_row(row));
    }
    println!();
}
