//! Word lists for the solver
//!
//! A word list is a pair of files: legal guesses and possible secrets. The
//! sample pair is embedded in the binary; others are read from a directory
//! with [`loader::load_word_lists`].

mod embedded;
pub mod loader;

use crate::core::{SolutionSet, Word};

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use loader::load_word_lists;

/// Name reported for the embedded lists
pub const EMBEDDED_NAME: &str = "sample";

/// A loaded guess list and solution set
///
/// The guess list is always a superset of the solutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLists {
    pub name: String,
    pub guesses: Vec<Word>,
    pub solutions: SolutionSet,
}

impl WordLists {
    /// The lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        let solutions: SolutionSet = loader::words_from_slice(SOLUTIONS).into_iter().collect();
        let guesses = loader::merge_guesses(loader::words_from_slice(GUESSES), &solutions);

        Self {
            name: EMBEDDED_NAME.to_string(),
            guesses,
            solutions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in SOLUTIONS.iter().chain(GUESSES) {
            assert!(Word::new(word).is_ok(), "'{word}' is not a valid word");
            assert_eq!(word, word.to_ascii_lowercase());
        }
    }

    #[test]
    fn embedded_guesses_cover_solutions() {
        let lists = WordLists::embedded();

        assert_eq!(lists.name, EMBEDDED_NAME);
        assert_eq!(lists.solutions.len(), SOLUTIONS_COUNT);
        assert!(lists.solutions.iter().all(|s| lists.guesses.contains(s)));
    }
}
