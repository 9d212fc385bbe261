//! Core domain types
//!
//! Words and feedback patterns. Everything here is pure and `Copy`.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern, PatternOutOfRange};
pub use word::{WORD_LEN, Word, WordError};

/// Words still consistent with every feedback seen so far
///
/// Ordered, so buckets built from it and tie-breaks over it are reproducible.
pub type SolutionSet = std::collections::BTreeSet<Word>;
