//! Hand lifecycle: refill, spellability, scoring
//!
//! The manager owns the draw source (catalog reference plus an injected
//! generator) and evolves a session's hand through it.

use super::hand::Hand;
use crate::core::TileCatalog;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fmt;

/// Error raised when a refill draw has no source tiles
///
/// Only reachable with a misconfigured empty catalog; the standard
/// 26-letter catalog never produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCatalogError;

impl fmt::Display for EmptyCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot draw tiles from an empty catalog")
    }
}

impl std::error::Error for EmptyCatalogError {}

/// Evolves a player's hand: random refills, spell checks, word scoring
///
/// The generator is injected so sessions can run seeded and tests can assert
/// deterministic draw sequences.
pub struct HandManager<'c, R: Rng> {
    catalog: &'c TileCatalog,
    rng: R,
}

impl<'c, R: Rng> HandManager<'c, R> {
    /// Create a manager drawing from `catalog` with the given generator
    pub const fn new(catalog: &'c TileCatalog, rng: R) -> Self {
        Self { catalog, rng }
    }

    /// Refill the hand to `target` tiles by uniform random draw
    ///
    /// Each draw is independent and with replacement: the catalog behaves as
    /// an infinite bag with equal per-letter probability, not a depleting
    /// set of physical tiles. No-op when the hand is already at or above
    /// `target`.
    ///
    /// # Errors
    /// Returns `EmptyCatalogError` if the catalog has no tiles to draw from.
    pub fn refill(&mut self, hand: &mut Hand, target: usize) -> Result<(), EmptyCatalogError> {
        while hand.len() < target {
            let tile = self
                .catalog
                .all_tiles()
                .choose(&mut self.rng)
                .ok_or(EmptyCatalogError)?;
            hand.push(tile.clone());
        }

        Ok(())
    }

    /// Test whether `word` can be spelled from `hand`, consuming the
    /// matched tiles on success
    ///
    /// Any non-letter character disqualifies the whole word. On failure the
    /// hand is left untouched; there is no partial consumption. On success
    /// exactly one tile is removed per letter occurrence in the word.
    pub fn can_spell(&self, hand: &mut Hand, word: &str) -> bool {
        let mut required: FxHashMap<char, usize> = FxHashMap::default();
        for c in word.chars() {
            if !c.is_ascii_alphabetic() {
                return false;
            }
            *required.entry(c.to_ascii_uppercase()).or_insert(0) += 1;
        }

        let available = hand.letter_counts();
        for (letter, needed) in &required {
            if available.get(letter).copied().unwrap_or(0) < *needed {
                return false;
            }
        }

        for (letter, needed) in required {
            for _ in 0..needed {
                // Present by the availability check above.
                hand.remove_first(letter);
            }
        }

        true
    }

    /// Total score for `word` from catalog letter values
    ///
    /// Pure with respect to the hand. Non-letter characters score 0; in the
    /// normal flow `can_spell` has already rejected them.
    #[must_use]
    pub fn compute_score(&self, word: &str) -> u32 {
        word.chars().map(|c| self.catalog.value_of(c)).sum()
    }
}
