//! Precomputed hint matrix
//!
//! Maps every guess to the feedback patterns it can produce, and each pattern
//! to the solutions that would produce it. Building it is the dominant cost of
//! a session (|guesses| × |solutions| comparisons), so it is built once,
//! cached, and afterwards only narrowed with [`HintMatrix::restrict`].

use crate::core::{Pattern, SolutionSet, Word};
use crate::error::{Result, SolverError};
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Pattern buckets for one guess
///
/// Every bucket is non-empty and sorted in word order.
pub type Row = FxHashMap<Pattern, Vec<Word>>;

/// Guess → pattern → consistent solutions
///
/// Invariant: for each guess, the buckets of its row are pairwise disjoint
/// and their union is exactly [`HintMatrix::scope`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintMatrix {
    rows: FxHashMap<Word, Row>,
    scope: SolutionSet,
}

impl HintMatrix {
    /// Compare every guess against every solution
    ///
    /// Rows are independent, so they are computed in parallel.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Pattern, SolutionSet, Word};
    /// use wordle_hints::hints::HintMatrix;
    ///
    /// let words: Vec<Word> = ["gator", "rotor", "tutor"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let solutions: SolutionSet = words.iter().copied().collect();
    ///
    /// let matrix = HintMatrix::build(&words, &solutions);
    /// let rotor = Word::new("rotor").unwrap();
    /// assert_eq!(matrix.bucket(&rotor, Pattern::PERFECT), &[rotor]);
    /// ```
    #[must_use]
    pub fn build(guesses: &[Word], solutions: &SolutionSet) -> Self {
        let start = Instant::now();

        let rows: FxHashMap<Word, Row> = guesses
            .par_iter()
            .map(|&guess| (guess, build_row(&guess, solutions)))
            .collect();

        debug!(
            "built hint matrix: {} guesses x {} solutions in {:.2?}",
            rows.len(),
            solutions.len(),
            start.elapsed()
        );

        Self {
            rows,
            scope: solutions.clone(),
        }
    }

    /// Narrow every bucket to `narrowed`, dropping buckets that become empty
    ///
    /// Equivalent to rebuilding for `scope ∩ narrowed`, without repeating any
    /// comparison.
    #[must_use]
    pub fn restrict(&self, narrowed: &SolutionSet) -> Self {
        let rows: FxHashMap<Word, Row> = self
            .rows
            .par_iter()
            .map(|(&guess, row)| (guess, restrict_row(row, narrowed)))
            .collect();

        Self {
            rows,
            scope: self.scope.intersection(narrowed).copied().collect(),
        }
    }

    /// Pattern buckets for `guess`, if it is a known guess
    #[must_use]
    pub fn row(&self, guess: &Word) -> Option<&Row> {
        self.rows.get(guess)
    }

    /// Solutions that answer `guess` with `pattern`
    ///
    /// Empty when the guess is unknown or the pattern cannot occur.
    #[must_use]
    pub fn bucket(&self, guess: &Word, pattern: Pattern) -> &[Word] {
        self.rows
            .get(guess)
            .and_then(|row| row.get(&pattern))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn contains_guess(&self, guess: &Word) -> bool {
        self.rows.contains_key(guess)
    }

    /// The solution set this matrix partitions
    #[must_use]
    pub const fn scope(&self) -> &SolutionSet {
        &self.scope
    }

    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.scope.len()
    }

    /// Check that this matrix partitions `solutions` for exactly `guesses`
    ///
    /// Used on matrices that did not come from [`HintMatrix::build`].
    ///
    /// # Errors
    /// `Cache` naming the first mismatch found.
    pub fn validate(&self, guesses: &[Word], solutions: &SolutionSet) -> Result<()> {
        let mismatch = |reason: String| -> Result<()> { Err(SolverError::Cache(reason)) };

        if self.scope != *solutions {
            return mismatch(format!(
                "matrix covers {} solutions, expected {}",
                self.scope.len(),
                solutions.len()
            ));
        }
        if let Some(guess) = guesses.iter().find(|g| !self.rows.contains_key(*g)) {
            return mismatch(format!("matrix has no row for {guess}"));
        }
        let distinct: SolutionSet = guesses.iter().copied().collect();
        if let Some(guess) = self.rows.keys().find(|g| !distinct.contains(*g)) {
            return mismatch(format!("matrix has a row for unknown guess {guess}"));
        }

        for (guess, row) in &self.rows {
            let mut covered = 0;
            for bucket in row.values() {
                if bucket.is_empty() || !bucket.iter().all(|w| self.scope.contains(w)) {
                    return mismatch(format!("row of {guess} has a bad bucket"));
                }
                covered += bucket.len();
            }
            if covered != self.scope.len() {
                return mismatch(format!(
                    "row of {guess} covers {covered} of {} solutions",
                    self.scope.len()
                ));
            }
        }
        Ok(())
    }
}

fn build_row(guess: &Word, solutions: &SolutionSet) -> Row {
    let mut row = Row::default();
    for secret in solutions {
        row.entry(Pattern::calculate(guess, secret))
            .or_default()
            .push(*secret);
    }
    row
}

fn restrict_row(row: &Row, narrowed: &SolutionSet) -> Row {
    row.iter()
        .filter_map(|(&pattern, bucket)| {
            let kept: Vec<Word> = bucket
                .iter()
                .filter(|word| narrowed.contains(*word))
                .copied()
                .collect();
            (!kept.is_empty()).then_some((pattern, kept))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn fixture() -> (Vec<Word>, SolutionSet) {
        let guesses = words(&[
            "slate", "crane", "rotor", "gator", "prion", "chess", "swiss", "orate", "oater",
            "zzzzz",
        ]);
        let solutions = words(&["gator", "rotor", "swiss", "oater", "crane", "slate"])
            .into_iter()
            .collect();
        (guesses, solutions)
    }

    fn assert_partitions(matrix: &HintMatrix) {
        for guess in matrix.rows.keys() {
            let row = matrix.row(guess).unwrap();
            let mut seen = SolutionSet::new();
            for bucket in row.values() {
                assert!(!bucket.is_empty(), "empty bucket for {guess}");
                assert!(bucket.is_sorted(), "unsorted bucket for {guess}");
                for word in bucket {
                    assert!(seen.insert(*word), "{word} in two buckets for {guess}");
                }
            }
            assert_eq!(&seen, matrix.scope(), "row of {guess} does not cover scope");
        }
    }

    #[test]
    fn build_partitions_every_row() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);

        assert_eq!(matrix.guess_count(), guesses.len());
        assert_eq!(matrix.solution_count(), solutions.len());
        assert_partitions(&matrix);
    }

    #[test]
    fn build_buckets_match_feedback() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);

        let rotor = Word::new("rotor").unwrap();
        let gator = Word::new("gator").unwrap();
        let hint = Pattern::parse("--GGG").unwrap();
        assert!(matrix.bucket(&rotor, hint).contains(&gator));

        let zzzzz = Word::new("zzzzz").unwrap();
        let row = matrix.row(&zzzzz).unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(matrix.bucket(&zzzzz, Pattern::new(0)).len(), solutions.len());
    }

    #[test]
    fn unknown_guess_has_no_row() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);
        let stray = Word::new("quilt").unwrap();

        assert!(!matrix.contains_guess(&stray));
        assert!(matrix.row(&stray).is_none());
        assert!(matrix.bucket(&stray, Pattern::PERFECT).is_empty());
    }

    #[test]
    fn restrict_to_same_scope_equals_build() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);

        assert_eq!(matrix.restrict(&solutions), matrix);
    }

    #[test]
    fn restrict_equals_rebuild_on_subset() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);
        let narrowed: SolutionSet = words(&["gator", "rotor", "crane"]).into_iter().collect();

        let restricted = matrix.restrict(&narrowed);

        assert_eq!(restricted, HintMatrix::build(&guesses, &narrowed));
        assert_eq!(restricted.solution_count(), 3);
        assert_partitions(&restricted);
    }

    #[test]
    fn restrict_ignores_words_outside_scope() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);
        let narrowed: SolutionSet = words(&["gator", "quilt"]).into_iter().collect();

        let restricted = matrix.restrict(&narrowed);

        assert_eq!(restricted.solution_count(), 1);
        assert_partitions(&restricted);
    }

    #[test]
    fn restrict_to_nothing_empties_rows() {
        let (guesses, solutions) = fixture();
        let restricted = HintMatrix::build(&guesses, &solutions).restrict(&SolutionSet::new());

        assert_eq!(restricted.guess_count(), guesses.len());
        assert_eq!(restricted.solution_count(), 0);
        assert!(restricted.rows.values().all(Row::is_empty));
    }

    #[test]
    fn validate_accepts_built_matrix() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);

        assert!(matrix.validate(&guesses, &solutions).is_ok());
    }

    #[test]
    fn validate_rejects_mismatched_lists() {
        let (guesses, solutions) = fixture();
        let matrix = HintMatrix::build(&guesses, &solutions);

        let fewer: SolutionSet = solutions.iter().skip(1).copied().collect();
        assert!(matches!(
            matrix.validate(&guesses, &fewer),
            Err(SolverError::Cache(_))
        ));
        assert!(matrix.validate(&guesses[1..], &solutions).is_err());
        assert!(matrix.validate(&words(&["tutor"]), &solutions).is_err());
    }

    #[test]
    fn validate_rejects_broken_rows() {
        let (guesses, solutions) = fixture();
        let mut matrix = HintMatrix::build(&guesses, &solutions);
        let slate = Word::new("slate").unwrap();
        matrix
            .rows
            .get_mut(&slate)
            .unwrap()
            .retain(|&pattern, _| pattern != Pattern::PERFECT);

        let err = matrix.validate(&guesses, &solutions).unwrap_err();
        assert!(err.to_string().contains("slate"));
    }
}
