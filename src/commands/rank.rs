//! Opening ranking command
//!
//! Ranks every legal guess against the full solution set.

use crate::error::Result;
use crate::solver::{GuessMetrics, Ranked, Solver, calculate_metrics};

/// One row of the opening table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedOpening {
    pub ranked: Ranked,
    pub metrics: GuessMetrics,
}

/// The `top` best openings with their partition metrics
///
/// # Errors
/// As for [`crate::solver::rank`].
pub fn rank_openings(solver: &Solver<'_>, top: usize) -> Result<Vec<RankedOpening>> {
    let scope = solver.matrix().scope();

    solver
        .rank_openings()?
        .into_iter()
        .take(top)
        .map(|ranked| {
            let metrics = calculate_metrics(&ranked.word, scope, solver.matrix())?;
            Ok(RankedOpening { ranked, metrics })
        })
        .collect()
}
