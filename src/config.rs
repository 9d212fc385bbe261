//! Explicit solver and statistics configuration
//!
//! Nothing here is global: the CLI builds these values and hands them to
//! [`Solver::new`](crate::solver::Solver::new) and the statistics runner.

use clap::ValueEnum;

/// Rounds allowed per game in the standard rules
pub const DEFAULT_ROUND_BUDGET: usize = 6;

/// How many ranked guesses are offered to a caller that picks by hand
pub const DEFAULT_TOP_K: usize = 8;

/// What to guess when exactly two solutions remain
///
/// Both candidates are equivalent information-wise: guessing either one wins
/// now with probability 1/2 and otherwise forces the win next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PairPolicy {
    /// Guess the lexicographically smaller word (reproducible)
    #[default]
    First,
    /// Guess either word uniformly at random
    Random,
}

/// Settings for one solver instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guesses allowed before the game is exhausted
    pub round_budget: usize,
    /// Size of the ranked shortlist returned with each choice
    pub top_k: usize,
    pub pair_policy: PairPolicy,
    /// Seed for [`PairPolicy::Random`]; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            round_budget: DEFAULT_ROUND_BUDGET,
            top_k: DEFAULT_TOP_K,
            pair_policy: PairPolicy::First,
            seed: None,
        }
    }
}

/// Settings for the opening-guess statistics run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsConfig {
    /// Number of top-ranked openings to evaluate
    pub openings: usize,
    /// Worker threads; `None` uses every available core
    pub jobs: Option<usize>,
    /// Only simulate the first `limit` solutions
    pub limit: Option<usize>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            openings: 10,
            jobs: None,
            limit: None,
        }
    }
}

impl StatsConfig {
    /// Worker count, bounded by the cores the OS reports
    #[must_use]
    pub fn worker_count(&self) -> usize {
        let cores = std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        self.jobs.map_or(cores, |jobs| jobs.clamp(1, cores))
    }
}
