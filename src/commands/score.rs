//! One-shot word scoring
//!
//! Computes the per-letter score breakdown for a word without touching any
//! hand state.

use crate::core::TileCatalog;

/// Result of scoring a word
pub struct ScoreResult {
    pub word: String,
    pub parts: Vec<(char, u32)>,
    pub total: u32,
}

/// Score a word against the catalog letter values
///
/// # Errors
///
/// Returns an error if the word is empty or contains a character that is
/// not an ASCII letter.
pub fn score_word(word: &str, catalog: &TileCatalog) -> Result<ScoreResult, String> {
    if word.is_empty() {
        return Err("Cannot score an empty word".to_string());
    }

    let mut parts = Vec::with_capacity(word.len());
    for c in word.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(format!("'{c}' is not a letter"));
        }
        let upper = c.to_ascii_uppercase();
        parts.push((upper, catalog.value_of(upper)));
    }

    let total = parts.iter().map(|&(_, value)| value).sum();

    Ok(ScoreResult {
        word: word.to_uppercase(),
        parts,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_word_cat() {
        let catalog = TileCatalog::standard();
        let result = score_word("CAT", &catalog).unwrap();

        assert_eq!(result.word, "CAT");
        assert_eq!(result.parts, vec![('C', 3), ('A', 1), ('T', 1)]);
        assert_eq!(result.total, 5);
    }

    #[test]
    fn score_word_quiz() {
        let catalog = TileCatalog::standard();
        let result = score_word("quiz", &catalog).unwrap();

        assert_eq!(result.word, "QUIZ");
        assert_eq!(result.total, 29);
    }

    #[test]
    fn score_word_rejects_non_letters() {
        let catalog = TileCatalog::standard();

        assert!(score_word("C4T", &catalog).is_err());
        assert!(score_word("CA T", &catalog).is_err());
        assert!(score_word("CAT!", &catalog).is_err());
    }

    #[test]
    fn score_word_rejects_empty() {
        let catalog = TileCatalog::standard();
        assert!(score_word("", &catalog).is_err());
    }
}
