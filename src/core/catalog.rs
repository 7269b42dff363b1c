//! The fixed tile catalog
//!
//! Reference list of the 26 letter tiles and their point values. Built once
//! at startup and passed by reference wherever tiles are drawn or scored.

use super::tile::Tile;

/// Standard per-letter point values
const STANDARD_VALUES: [(char, u32); 26] = [
    ('A', 1),
    ('B', 3),
    ('C', 3),
    ('D', 2),
    ('E', 1),
    ('F', 4),
    ('G', 2),
    ('H', 4),
    ('I', 1),
    ('J', 8),
    ('K', 5),
    ('L', 1),
    ('M', 3),
    ('N', 1),
    ('O', 1),
    ('P', 3),
    ('Q', 10),
    ('R', 1),
    ('S', 1),
    ('T', 1),
    ('U', 1),
    ('V', 4),
    ('W', 4),
    ('X', 8),
    ('Y', 4),
    ('Z', 10),
];

/// The fixed reference set of letter tiles
///
/// An ordered, immutable sequence. Hands are filled with by-value copies of
/// these tiles, and all letter lookups go through here.
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
}

impl TileCatalog {
    /// The standard 26-letter catalog
    ///
    /// # Panics
    /// Will not panic - every entry in the value table is an ASCII letter.
    #[must_use]
    pub fn standard() -> Self {
        let tiles = STANDARD_VALUES
            .iter()
            .map(|&(letter, value)| {
                Tile::new(letter, value).expect("value table letters are A-Z")
            })
            .collect();

        Self { tiles }
    }

    /// Build a catalog from an explicit tile list
    ///
    /// Intended for tests that need a fixed, reduced, or empty catalog.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The fixed ordered sequence of tiles
    #[inline]
    #[must_use]
    pub fn all_tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Point value for a letter, in either case
    ///
    /// Returns 0 if no tile carries the letter. The zero fallback is the
    /// documented behavior for non-letter input, not an error.
    ///
    /// # Examples
    /// ```
    /// use scrabble_rack::core::TileCatalog;
    ///
    /// let catalog = TileCatalog::standard();
    /// assert_eq!(catalog.value_of('Q'), 10);
    /// assert_eq!(catalog.value_of('q'), 10);
    /// assert_eq!(catalog.value_of('?'), 0);
    /// ```
    #[must_use]
    pub fn value_of(&self, letter: char) -> u32 {
        self.tile_for(letter).map_or(0, Tile::value)
    }

    /// Find the catalog tile for a letter, in either case
    #[must_use]
    pub fn tile_for(&self, letter: char) -> Option<&Tile> {
        let upper = letter.to_ascii_uppercase();
        self.tiles.iter().find(|tile| tile.letter() == upper)
    }

    /// Number of tiles in the catalog
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
