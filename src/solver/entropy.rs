//! Shannon entropy ranking of guesses
//!
//! Given the current solution set and a hint matrix, every candidate guess is
//! scored by the expected information (in bits) its feedback would reveal.

use crate::core::{Pattern, SolutionSet, Word};
use crate::error::{Result, SolverError};
use crate::hints::{HintMatrix, Row};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A guess and its entropy score, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked {
    pub word: Word,
    pub entropy: f64,
}

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits), unrounded
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Rank `guesses` by expected information against `solutions`
///
/// For each guess, every pattern bucket is intersected with `solutions`;
/// empty intersections are skipped and the rest contribute `-p·log2(p)`.
/// Scores are rounded to two decimals. The result is ordered by score,
/// highest first, and equal scores fall back to word order so the ranking
/// is reproducible.
///
/// # Errors
/// - `EmptySolutionSet` if `solutions` is empty
/// - `UnknownGuess` if a guess has no row in `matrix`
///
/// # Examples
/// ```
/// use wordle_hints::core::{SolutionSet, Word};
/// use wordle_hints::hints::HintMatrix;
/// use wordle_hints::solver::rank;
///
/// let guesses: Vec<Word> = ["aaaaa", "crate", "grate", "irate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let solutions: SolutionSet = guesses[1..].iter().copied().collect();
/// let matrix = HintMatrix::build(&guesses, &solutions);
///
/// let ranked = rank(&guesses, &solutions, &matrix).unwrap();
/// assert_eq!(ranked[0].word.text(), "crate");
/// assert_eq!(ranked.last().unwrap().word.text(), "aaaaa");
/// assert_eq!(ranked.last().unwrap().entropy, 0.0);
/// ```
pub fn rank(guesses: &[Word], solutions: &SolutionSet, matrix: &HintMatrix) -> Result<Vec<Ranked>> {
    if solutions.is_empty() {
        return Err(SolverError::EmptySolutionSet);
    }

    let total = solutions.len() as f64;
    // buckets of a matrix scoped to exactly these solutions need no intersection
    let exact_scope = matrix.scope() == solutions;

    let mut ranked = guesses
        .par_iter()
        .map(|&guess| {
            let row = matrix.row(&guess).ok_or(SolverError::UnknownGuess(guess))?;
            let entropy = entropy_of(bucket_sizes(row, solutions, exact_scope), total);
            Ok(Ranked {
                word: guess,
                entropy: round_score(entropy),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    ranked.sort_by(|a, b| {
        b.entropy
            .total_cmp(&a.entropy)
            .then_with(|| a.word.cmp(&b.word))
    });

    Ok(ranked)
}

/// Entropy, expected remaining candidates, and worst case for one guess
///
/// # Errors
/// `EmptySolutionSet` or `UnknownGuess`, as for [`rank`].
pub fn calculate_metrics(
    guess: &Word,
    solutions: &SolutionSet,
    matrix: &HintMatrix,
) -> Result<GuessMetrics> {
    if solutions.is_empty() {
        return Err(SolverError::EmptySolutionSet);
    }
    let row = matrix.row(guess).ok_or(SolverError::UnknownGuess(*guess))?;
    let exact_scope = matrix.scope() == solutions;

    let counts: FxHashMap<Pattern, usize> = row
        .iter()
        .map(|(&pattern, bucket)| (pattern, intersect_len(bucket, solutions, exact_scope)))
        .filter(|&(_, n)| n > 0)
        .collect();

    let total = solutions.len() as f64;
    let expected_remaining = counts
        .values()
        .map(|&n| {
            let p = n as f64 / total;
            p * n as f64
        })
        .sum();
    let max_partition = counts.values().copied().max().unwrap_or(0);

    Ok(GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition,
    })
}

/// Calculate Shannon entropy from a pattern histogram
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one pattern with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use wordle_hints::core::Pattern;
/// use wordle_hints::solver::shannon_entropy;
///
/// let uniform: HashMap<Pattern, usize> = (0..4).map(|v| (Pattern::new(v), 25)).collect();
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn shannon_entropy<S: BuildHasher>(pattern_counts: &HashMap<Pattern, usize, S>) -> f64 {
    let total = pattern_counts.values().sum::<usize>() as f64;
    entropy_of(pattern_counts.values().copied(), total)
}

fn bucket_sizes<'a>(
    row: &'a Row,
    solutions: &'a SolutionSet,
    exact_scope: bool,
) -> impl Iterator<Item = usize> + 'a {
    row.values()
        .map(move |bucket| intersect_len(bucket, solutions, exact_scope))
}

fn intersect_len(bucket: &[Word], solutions: &SolutionSet, exact_scope: bool) -> usize {
    if exact_scope {
        bucket.len()
    } else {
        bucket.iter().filter(|word| solutions.contains(*word)).count()
    }
}

fn entropy_of(counts: impl Iterator<Item = usize>, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    let entropy: f64 = counts
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();
    // a single certain bucket sums to -0.0
    if entropy > 0.0 { entropy } else { 0.0 }
}

fn round_score(entropy: f64) -> f64 {
    (entropy * 100.0).round() / 100.0
}
