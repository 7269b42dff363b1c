//! Rack spellability check
//!
//! Builds a hand from an explicit rack string and runs the same
//! spell-and-consume primitive the interactive session uses. Handy for
//! scripting and for reproducing a round exactly.

use crate::core::TileCatalog;
use crate::game::{Hand, HandManager};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Result of checking a word against an explicit rack
pub struct CheckResult {
    pub word: String,
    pub spellable: bool,
    pub score: Option<u32>,
    pub remaining: Hand,
}

/// Check whether `word` can be spelled from the tiles in `rack`
///
/// The rack is a string of letters, e.g. "AATTCXZ", resolved to catalog
/// tiles. On success the result carries the word score and the leftover
/// tiles; on failure the rack comes back untouched.
///
/// # Errors
///
/// Returns an error if the rack contains a character with no catalog tile.
pub fn check_rack(rack: &str, word: &str, catalog: &TileCatalog) -> Result<CheckResult, String> {
    let mut hand = Hand::new();
    for c in rack.chars() {
        let tile = catalog
            .tile_for(c)
            .ok_or_else(|| format!("'{c}' has no tile in the catalog"))?;
        hand.push(tile.clone());
    }

    // can_spell never draws, so the generator seed is irrelevant here.
    let manager = HandManager::new(catalog, StdRng::seed_from_u64(0));
    let spellable = manager.can_spell(&mut hand, word);
    let score = spellable.then(|| manager.compute_score(word));

    Ok(CheckResult {
        word: word.to_uppercase(),
        spellable,
        score,
        remaining: hand,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_rack_spellable_word() {
        let catalog = TileCatalog::standard();
        let result = check_rack("AATTCXZ", "CAT", &catalog).unwrap();

        assert!(result.spellable);
        assert_eq!(result.word, "CAT");
        assert_eq!(result.score, Some(5));
        assert_eq!(result.remaining.len(), 4);

        let counts = result.remaining.letter_counts();
        assert_eq!(counts.get(&'A'), Some(&1));
        assert_eq!(counts.get(&'T'), Some(&1));
        assert_eq!(counts.get(&'X'), Some(&1));
        assert_eq!(counts.get(&'Z'), Some(&1));
    }

    #[test]
    fn check_rack_unspellable_word_keeps_rack() {
        let catalog = TileCatalog::standard();
        let result = check_rack("AATTCXZ", "QUIZ", &catalog).unwrap();

        assert!(!result.spellable);
        assert_eq!(result.score, None);
        assert_eq!(result.remaining.len(), 7);
    }

    #[test]
    fn check_rack_lowercase_rack_and_word() {
        let catalog = TileCatalog::standard();
        let result = check_rack("aattcxz", "cat", &catalog).unwrap();

        assert!(result.spellable);
        assert_eq!(result.score, Some(5));
    }

    #[test]
    fn check_rack_rejects_invalid_rack() {
        let catalog = TileCatalog::standard();
        assert!(check_rack("AAT7", "CAT", &catalog).is_err());
        assert!(check_rack("AA T", "CAT", &catalog).is_err());
    }

    #[test]
    fn check_rack_whole_rack_word_empties_it() {
        let catalog = TileCatalog::standard();
        let result = check_rack("TAC", "CAT", &catalog).unwrap();

        assert!(result.spellable);
        assert!(result.remaining.is_empty());
    }
}
