//! Scrabble Rack - CLI
//!
//! Interactive hand-and-word play plus one-shot scoring and rack checks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use scrabble_rack::{
    commands::{check_rack, run_play, score_word},
    core::TileCatalog,
    game::HAND_SIZE,
    output::{print_check_result, print_score_result, print_value_table},
};

#[derive(Parser)]
#[command(
    name = "scrabble_rack",
    about = "Single-player tile rack word game with letter-value scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the tile draw (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game session (default)
    Play {
        /// Number of tiles to keep in hand
        #[arg(short = 'n', long, default_value_t = HAND_SIZE)]
        hand_size: usize,
    },

    /// Score a word from the standard tile values
    Score {
        /// The word to score
        word: String,
    },

    /// Check whether a word can be spelled from an explicit rack
    Check {
        /// Rack letters, e.g. AATTCXZ
        rack: String,

        /// The word to test
        word: String,
    },

    /// Print the tile value table
    Values,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = TileCatalog::standard();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        hand_size: HAND_SIZE,
    });

    match command {
        Commands::Play { hand_size } => {
            let rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            run_play(&catalog, rng, hand_size).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { word } => {
            let result = score_word(&word, &catalog).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Check { rack, word } => {
            let result = check_rack(&rack, &word, &catalog).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Values => {
            print_value_table(&catalog);
            Ok(())
        }
    }
}
