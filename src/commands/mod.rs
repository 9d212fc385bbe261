//! Command implementations

pub mod play;
pub mod rank;
pub mod solve;
pub mod stats;

pub use play::{PlayOutcome, Prompt, run_play};
pub use rank::{RankedOpening, rank_openings};
pub use solve::{SolveResult, solve_word};
pub use stats::{OpeningStats, run_stats};
