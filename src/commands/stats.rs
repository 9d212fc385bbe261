//! Opening statistics
//!
//! Simulates every solution against each of the top-ranked openings and
//! reports how many rounds the solver needed. Simulations run on a dedicated
//! rayon pool bounded by the configured worker count.

use crate::config::StatsConfig;
use crate::core::Word;
use crate::error::Result;
use crate::solver::{AutoPick, Outcome, SecretOracle, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::io;
use std::time::{Duration, Instant};

/// Aggregated results for one opening
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningStats {
    pub opening: Word,
    /// Rounded entropy of the opening against the full solution set
    pub entropy: f64,
    pub played: usize,
    pub solved: usize,
    pub exhausted: usize,
    /// Rounds needed → number of solved games
    pub histogram: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl OpeningStats {
    /// Mean rounds over solved games, rounded to three decimals
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.solved == 0 {
            return 0.0;
        }
        let total: usize = self.histogram.iter().map(|(rounds, n)| rounds * n).sum();
        (total as f64 / self.solved as f64 * 1000.0).round() / 1000.0
    }

    #[must_use]
    pub fn max_rounds(&self) -> Option<usize> {
        self.histogram.keys().next_back().copied()
    }

    fn from_outcomes(opening: Word, entropy: f64, outcomes: &[Outcome], duration: Duration) -> Self {
        let mut histogram = BTreeMap::new();
        let mut exhausted = 0;
        for outcome in outcomes {
            match outcome {
                Outcome::Solved(rounds) => *histogram.entry(*rounds).or_insert(0) += 1,
                Outcome::Exhausted => exhausted += 1,
            }
        }

        Self {
            opening,
            entropy,
            played: outcomes.len(),
            solved: outcomes.len() - exhausted,
            exhausted,
            histogram,
            duration,
        }
    }
}

/// Run the statistics for the top `config.openings` openings
///
/// # Errors
/// Returns an error if the worker pool cannot be created or any simulation
/// fails.
pub fn run_stats(
    solver: &Solver<'_>,
    config: &StatsConfig,
    show_progress: bool,
) -> Result<Vec<OpeningStats>> {
    let openings: Vec<_> = solver
        .rank_openings()?
        .into_iter()
        .take(config.openings)
        .collect();
    let secrets: Vec<Word> = solver
        .matrix()
        .scope()
        .iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .copied()
        .collect();

    let workers = config.worker_count();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("stats-{i}"))
        .build()
        .map_err(io::Error::other)?;
    info!(
        "simulating {} openings x {} secrets on {workers} workers",
        openings.len(),
        secrets.len()
    );

    let pb = progress_bar((openings.len() * secrets.len()) as u64, show_progress);

    let mut results = Vec::with_capacity(openings.len());
    for ranked in openings {
        pb.set_message(ranked.word.to_string());
        let start = Instant::now();

        let outcomes = pool.install(|| {
            secrets
                .par_iter()
                .map(|&secret| {
                    let report =
                        solver.run(&mut SecretOracle::new(secret), &mut AutoPick, Some(ranked.word));
                    pb.inc(1);
                    report.map(|r| r.outcome)
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let stats =
            OpeningStats::from_outcomes(ranked.word, ranked.entropy, &outcomes, start.elapsed());
        debug!(
            "{}: average {:.3} over {} games",
            stats.opening,
            stats.average(),
            stats.played
        );
        results.push(stats);
    }

    pb.finish_and_clear();
    Ok(results)
}

fn progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
