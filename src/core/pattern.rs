//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for a guess using base-3 encoding:
//! - 0 = Absent (letter not in the secret, or all copies already credited)
//! - 1 = Present (letter in the secret, wrong position)
//! - 2 = Exact (letter in the correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::{WORD_LEN, Word};
use crate::error::{Result, SolverError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Per-position feedback mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }

    /// Parse one feedback symbol
    ///
    /// Accepts G/Y letters, the b(lack) letter and dashes for absent, and the
    /// coloured square emoji.
    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | 'B' | 'b' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Feedback pattern for a guess against a secret
///
/// Represents the marks as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
///
/// Deserialization rejects values outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct Pattern(u8);

/// A raw pattern value of 243 or more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pattern value {0} is out of range")]
pub struct PatternOutOfRange(pub u8);

impl Pattern {
    /// All exact (the secret was guessed)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Number of distinct patterns
    pub const COUNT: usize = 243;

    /// Create a new pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// Get the raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every position is exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Build a pattern from its marks, position 0 first
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark.digit() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(pattern)
    }

    /// Decode the marks, position 0 first
    #[must_use]
    pub fn marks(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(val % 3);
            val /= 3;
        }
        marks
    }

    /// Calculate the pattern produced when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches, and count the secret letters at every
    ///    position that did not match
    /// 2. Second pass: left to right, mark a non-exact guess letter present
    ///    while unmatched copies of it remain, consuming one copy each time
    ///
    /// A letter therefore never earns more present + exact marks than it has
    /// occurrences in the secret.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Pattern, Word};
    ///
    /// let guess = Word::new("orate").unwrap();
    /// let secret = Word::new("oater").unwrap();
    ///
    /// assert_eq!(Pattern::calculate(&guess, &secret).to_string(), "GYYYY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut unmatched = [0u8; 26];

        for i in 0..WORD_LEN {
            if guess.chars()[i] == secret.chars()[i] {
                marks[i] = Mark::Exact;
            } else {
                unmatched[secret.letter_index(i)] += 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Exact {
                continue;
            }
            let remaining = &mut unmatched[guess.letter_index(i)];
            if *remaining > 0 {
                *mark = Mark::Present;
                *remaining -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Compare two raw strings
    ///
    /// # Errors
    /// `LengthMismatch` when the strings differ in length, `InvalidWord` when
    /// either one is not a valid word.
    ///
    /// ```
    /// use wordle_hints::core::Pattern;
    /// use wordle_hints::SolverError;
    ///
    /// assert!(Pattern::compare("rotor", "gator").is_ok());
    /// assert!(matches!(
    ///     Pattern::compare("rotor", "gators"),
    ///     Err(SolverError::LengthMismatch { .. })
    /// ));
    /// ```
    pub fn compare(guess: &str, secret: &str) -> Result<Self> {
        if guess.chars().count() != secret.chars().count() {
            return Err(SolverError::LengthMismatch {
                guess: guess.to_string(),
                secret: secret.to_string(),
            });
        }
        let guess_word = Word::new(guess).map_err(|e| SolverError::invalid_word(guess, e))?;
        let secret_word = Word::new(secret).map_err(|e| SolverError::invalid_word(secret, e))?;
        Ok(Self::calculate(&guess_word, &secret_word))
    }

    /// Parse feedback text such as "GY-GY", "gybgy" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// `InvalidFeedback` on a wrong length or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("gybgy").unwrap();
    /// let p3 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || SolverError::InvalidFeedback(s.to_string());

        let mut marks = [Mark::Absent; WORD_LEN];
        let mut symbols = s.chars();
        for mark in &mut marks {
            *mark = symbols.next().and_then(Mark::from_symbol).ok_or_else(invalid)?;
        }
        if symbols.next().is_some() {
            return Err(invalid());
        }

        Ok(Self::from_marks(marks))
    }

    /// Convert pattern to emoji string
    ///
    /// ```
    /// use wordle_hints::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.marks() {
            f.write_str(match mark {
                Mark::Exact => "G",
                Mark::Present => "Y",
                Mark::Absent => "-",
            })?;
        }
        Ok(())
    }
}

impl TryFrom<u8> for Pattern {
    type Error = PatternOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if usize::from(value) < Self::COUNT {
            Ok(Self(value))
        } else {
            Err(PatternOutOfRange(value))
        }
    }
}

impl std::str::FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
