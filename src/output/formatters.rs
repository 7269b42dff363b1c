//! Formatting utilities for terminal output

use crate::core::Tile;

/// Join tiles into a single display row, two spaces apart
#[must_use]
pub fn tile_row(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("  ")
}

/// Format a per-letter score breakdown, e.g. "C (3) + A (1) + T (1)"
#[must_use]
pub fn score_breakdown(parts: &[(char, u32)]) -> String {
    parts
        .iter()
        .map(|&(letter, value)| format!("{letter} ({value})"))
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_row_joins_tiles() {
        let tiles = vec![
            Tile::new('A', 1).unwrap(),
            Tile::new('B', 3).unwrap(),
            Tile::new('Q', 10).unwrap(),
        ];
        assert_eq!(tile_row(&tiles), "A (1)  B (3)  Q (10)");
    }

    #[test]
    fn tile_row_empty() {
        assert_eq!(tile_row(&[]), "");
    }

    #[test]
    fn score_breakdown_joins_with_plus() {
        let parts = vec![('C', 3), ('A', 1), ('T', 1)];
        assert_eq!(score_breakdown(&parts), "C (3) + A (1) + T (1)");
    }

    #[test]
    fn score_breakdown_single_letter() {
        assert_eq!(score_breakdown(&[('Q', 10)]), "Q (10)");
    }
}
