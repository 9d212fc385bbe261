//! Word list loading utilities
//!
//! A word-list directory holds `guesses.txt` and `solutions.txt`, one word
//! per line. Blank lines are ignored; anything else must be a valid word.

use super::WordLists;
use crate::core::{SolutionSet, Word};
use crate::error::{Result, SolverError};
use log::{info, warn};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

pub const GUESSES_FILE: &str = "guesses.txt";
pub const SOLUTIONS_FILE: &str = "solutions.txt";

/// Load a guess list and solution set from `dir`
///
/// Duplicate words are dropped. Solutions missing from the guess list are
/// appended to it.
///
/// # Errors
/// - `MissingResource` if `dir` or either file does not exist
/// - `InvalidWord` for a malformed line, naming the file and line
/// - `Io` for other read failures
///
/// # Examples
/// ```no_run
/// use wordle_hints::wordlists::load_word_lists;
///
/// let lists = load_word_lists("data/sample").unwrap();
/// println!("{} guesses, {} solutions", lists.guesses.len(), lists.solutions.len());
/// ```
pub fn load_word_lists<P: AsRef<Path>>(dir: P) -> Result<WordLists> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(SolverError::MissingResource {
            path: dir.to_path_buf(),
        });
    }

    let solutions: SolutionSet = load_from_file(dir.join(SOLUTIONS_FILE))?
        .into_iter()
        .collect();
    let guesses = merge_guesses(load_from_file(dir.join(GUESSES_FILE))?, &solutions);

    let name = dir
        .file_name()
        .map_or_else(|| dir.display().to_string(), |n| n.to_string_lossy().into_owned());
    info!(
        "loaded word list '{name}': {} guesses, {} solutions",
        guesses.len(),
        solutions.len()
    );

    Ok(WordLists {
        name,
        guesses,
        solutions,
    })
}

/// Read one word per line from `path`
///
/// # Errors
/// `MissingResource` if the file does not exist, `InvalidWord` for a bad
/// line, `Io` otherwise.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SolverError::MissingResource {
            path: path.to_path_buf(),
        },
        _ => SolverError::Io(e),
    })?;

    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(number, line)| {
            Word::new(line).map_err(|source| {
                SolverError::invalid_word(format!("{}:{number}: {line}", path.display()), source)
            })
        })
        .collect()
}

/// Convert an embedded string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_hints::wordlists::loader::words_from_slice;
/// use wordle_hints::wordlists::SOLUTIONS;
///
/// let words = words_from_slice(SOLUTIONS);
/// assert_eq!(words.len(), SOLUTIONS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Dedupe `guesses` keeping first occurrence, then append missing solutions
pub(crate) fn merge_guesses(guesses: Vec<Word>, solutions: &SolutionSet) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut merged: Vec<Word> = guesses.into_iter().filter(|w| seen.insert(*w)).collect();

    let missing: Vec<Word> = solutions
        .iter()
        .filter(|s| !seen.contains(*s))
        .copied()
        .collect();
    if !missing.is_empty() {
        warn!(
            "{} solutions missing from the guess list were added to it",
            missing.len()
        );
        merged.extend(missing);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn write_lists(guesses: &str, solutions: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GUESSES_FILE), guesses).unwrap();
        fs::write(dir.path().join(SOLUTIONS_FILE), solutions).unwrap();
        dir
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "Slate"]);
        assert_eq!(words, vec![word("crane"), word("slate")]);
    }

    #[test]
    fn loads_directory() {
        let dir = write_lists("crane\nslate\n\ngator\n", "gator\nslate\n");
        let lists = load_word_lists(dir.path()).unwrap();

        assert_eq!(lists.guesses, vec![word("crane"), word("slate"), word("gator")]);
        assert_eq!(lists.solutions.len(), 2);
        assert_eq!(
            lists.name,
            dir.path().file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn dedupes_and_repairs_superset() {
        let dir = write_lists("crane\ncrane\nslate\n", "gator\ngator\nslate\n");
        let lists = load_word_lists(dir.path()).unwrap();

        assert_eq!(lists.guesses, vec![word("crane"), word("slate"), word("gator")]);
        assert_eq!(lists.solutions.len(), 2);
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = load_word_lists(&missing).unwrap_err();
        assert!(matches!(err, SolverError::MissingResource { path } if path == missing));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(GUESSES_FILE), "crane\n").unwrap();

        let err = load_word_lists(dir.path()).unwrap_err();
        assert!(
            matches!(err, SolverError::MissingResource { path } if path.ends_with(SOLUTIONS_FILE))
        );
    }

    #[test]
    fn invalid_line_names_its_position() {
        let dir = write_lists("crane\ncranes\n", "crane\n");

        let err = load_word_lists(dir.path()).unwrap_err();
        let SolverError::InvalidWord { text, .. } = err else {
            panic!("expected InvalidWord, got {err:?}");
        };
        assert!(text.ends_with(":2: cranes"), "{text}");
    }
}
