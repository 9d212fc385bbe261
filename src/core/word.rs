//! Word representation
//!
//! A Word is five lower-case ASCII letters stored inline, so it is `Copy`
//! and cheap to hash, compare, and serialize as a hint matrix key.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// A five-letter word, case-normalized to lower case
///
/// Ordering is lexicographic, which the ranker relies on for tie-breaks.
/// Deserialization accepts only lower-case ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "[u8; WORD_LEN]")]
pub struct Word([u8; WORD_LEN]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word must contain only ASCII letters")]
    NonAscii,
    #[error("word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.trim();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut chars = [0u8; WORD_LEN];
        for (slot, byte) in chars.iter_mut().zip(text.bytes()) {
            let lower = byte.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(WordError::InvalidCharacters);
            }
            *slot = lower;
        }

        Ok(Self(chars))
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic: construction only admits ASCII letters.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.0).expect("word bytes are validated ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.0
    }

    /// Alphabet index (0-25) of the letter at `position`
    #[inline]
    pub(crate) const fn letter_index(&self, position: usize) -> usize {
        (self.0[position] - b'a') as usize
    }
}

impl TryFrom<[u8; WORD_LEN]> for Word {
    type Error = WordError;

    /// Accept raw bytes only if they are already lower-case letters
    fn try_from(bytes: [u8; WORD_LEN]) -> Result<Self, Self::Error> {
        if bytes.iter().all(u8::is_ascii_lowercase) {
            Ok(Self(bytes))
        } else {
            Err(WordError::InvalidCharacters)
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.chars(), b"crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap(), Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_trims_whitespace() {
        assert_eq!(Word::new("  slate\n").unwrap().text(), "slate");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("shrt"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("cr-ne"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crâne"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_index() {
        let word = Word::new("azure").unwrap();
        assert_eq!(word.letter_index(0), 0);
        assert_eq!(word.letter_index(1), 25);
        assert_eq!(word.letter_index(4), 4);
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word> = ["slate", "crane", "crate", "aback"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["aback", "crane", "crate", "slate"]);
    }

    #[test]
    fn word_from_raw_bytes_is_validated() {
        assert_eq!(Word::try_from(*b"gator"), Ok(Word::new("gator").unwrap()));
        assert_eq!(Word::try_from(*b"tuto\0"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::try_from(*b"Gator"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_deserialize_rejects_non_letters() {
        let bytes = bincode::serialize(&Word::new("tutor").unwrap()).unwrap();
        assert_eq!(bincode::deserialize::<Word>(&bytes).unwrap().text(), "tutor");

        let mut corrupt = bytes;
        *corrupt.last_mut().unwrap() = 0;
        assert!(bincode::deserialize::<Word>(&corrupt).is_err());
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Gator".parse().unwrap();
        assert_eq!(format!("{word}"), "gator");
    }
}
