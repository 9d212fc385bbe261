//! Word solving command
//!
//! Plays a full game against a known secret and returns the turn history.

use crate::core::Word;
use crate::error::{Result, SolverError};
use crate::solver::{AutoPick, GameReport, SecretOracle, Solver};

/// Result of solving a word
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub target: Word,
    pub opening: Option<Word>,
    pub report: GameReport,
}

/// Solve `target` with the solver's own picks
///
/// # Errors
///
/// Returns an error if:
/// - `target` or `opening` is not a valid word
/// - `target` is not a possible secret of the loaded list
/// - `opening` is not a legal guess
pub fn solve_word(solver: &Solver<'_>, target: &str, opening: Option<&str>) -> Result<SolveResult> {
    let target = Word::new(target).map_err(|e| SolverError::invalid_word(target, e))?;
    if !solver.matrix().scope().contains(&target) {
        return Err(SolverError::NotASolution(target));
    }

    let opening = opening
        .map(|text| {
            let word = Word::new(text).map_err(|e| SolverError::invalid_word(text, e))?;
            if solver.matrix().contains_guess(&word) {
                Ok(word)
            } else {
                Err(SolverError::UnknownGuess(word))
            }
        })
        .transpose()?;

    let report = solver.run(&mut SecretOracle::new(target), &mut AutoPick, opening)?;

    Ok(SolveResult {
        target,
        opening,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::core::SolutionSet;
    use crate::hints::HintMatrix;
    use crate::solver::Outcome;
    use crate::wordlists::loader::words_from_slice;
    use crate::wordlists::{GUESSES, SOLUTIONS};

    fn fixture() -> (Vec<Word>, HintMatrix) {
        let guesses = words_from_slice(&GUESSES[..120]);
        let solutions: SolutionSet = words_from_slice(&SOLUTIONS[..60]).into_iter().collect();
        let mut all = guesses;
        all.extend(solutions.iter().copied());
        all.sort();
        all.dedup();
        let matrix = HintMatrix::build(&all, &solutions);
        (all, matrix)
    }

    #[test]
    fn solve_word_succeeds() {
        let (guesses, matrix) = fixture();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let target = SOLUTIONS[0];

        let result = solve_word(&solver, target, None).unwrap();

        assert!(matches!(result.report.outcome, Outcome::Solved(_)));
        assert_eq!(result.report.turns.last().unwrap().guess.text(), target);
    }

    #[test]
    fn solve_records_shrinking_history() {
        let (guesses, matrix) = fixture();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());

        let result = solve_word(&solver, SOLUTIONS[17], None).unwrap();

        for turn in &result.report.turns {
            if let Some(after) = turn.candidates_after {
                assert!(after <= turn.candidates_before);
            }
        }
    }

    #[test]
    fn solve_uses_opening() {
        let (guesses, matrix) = fixture();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let opening = guesses[3];

        let result = solve_word(&solver, SOLUTIONS[5], Some(opening.text())).unwrap();

        assert_eq!(result.opening, Some(opening));
        assert_eq!(result.report.turns[0].guess, opening);
    }

    #[test]
    fn target_outside_solutions_is_rejected() {
        let (guesses, matrix) = fixture();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());

        let err = solve_word(&solver, "zzzzz", None).unwrap_err();
        assert!(matches!(err, SolverError::NotASolution(_)));
    }

    #[test]
    fn malformed_target_is_rejected() {
        let (guesses, matrix) = fixture();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());

        let err = solve_word(&solver, "toolong", None).unwrap_err();
        assert!(matches!(err, SolverError::InvalidWord { .. }));
    }

    #[test]
    fn unknown_opening_is_rejected() {
        let (guesses, matrix) = fixture();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());

        let err = solve_word(&solver, SOLUTIONS[0], Some("qqqqq")).unwrap_err();
        assert!(matches!(err, SolverError::UnknownGuess(_)));
    }
}
