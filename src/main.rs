//! Wordle Hints - CLI
//!
//! Suggests entropy-maximizing guesses, simulates games against known
//! secrets, and measures how well the top openings perform.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_hints::{
    commands::{PlayOutcome, Prompt, rank_openings, run_play, run_stats, solve_word},
    config::{DEFAULT_ROUND_BUDGET, DEFAULT_TOP_K, PairPolicy, SolverConfig, StatsConfig},
    hints::{CacheStatus, FsCacheStore, HintMatrix, load_or_build},
    output::{print_ranking, print_session_header, print_solve_result, print_stats},
    solver::Solver,
    wordlists::{WordLists, load_word_lists},
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Entropy-ranked guess assistant for five-letter word games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding guesses.txt and solutions.txt (default: embedded sample)
    #[arg(short = 'w', long, global = true)]
    word_list: Option<PathBuf>,

    /// Where to keep the hint matrix artifact (default: the word-list directory)
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Always rebuild the hint matrix and never write an artifact
    #[arg(long, global = true)]
    no_cache: bool,

    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Guesses allowed per game
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_ROUND_BUDGET,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    budget: usize,

    /// Ranked guesses offered each round
    #[arg(long, global = true, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// What to guess when two answers remain
    #[arg(long, global = true, value_enum, default_value_t = PairPolicy::First)]
    pair_policy: PairPolicy,

    /// Seed for the random pair policy
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: suggests guesses and reads your feedback (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Force the first guess
        #[arg(short, long)]
        opening: Option<String>,

        /// Show candidate counts and entropy per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Rank opening guesses against every possible answer
    Rank {
        /// Number of openings to show
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },

    /// Simulate every answer for each of the best openings
    Stats {
        /// Number of top-ranked openings to evaluate
        #[arg(short = 'n', long, default_value_t = 10)]
        openings: usize,

        /// Worker threads (default: every core)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Only simulate the first N answers
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lists = match &cli.word_list {
        Some(dir) => load_word_lists(dir)
            .with_context(|| format!("failed to load word list from {}", dir.display()))?,
        None => WordLists::embedded(),
    };
    let (matrix, status) = load_matrix(&cli, &lists);

    let config = SolverConfig {
        round_budget: cli.budget,
        top_k: cli.top_k,
        pair_policy: cli.pair_policy,
        seed: cli.seed,
    };
    let solver = Solver::new(&lists.guesses, &matrix, config);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            print_session_header(&lists, status);
            run_play_command(&solver)
        }
        Commands::Solve {
            word,
            opening,
            details,
        } => {
            let result = solve_word(&solver, &word, opening.as_deref())
                .with_context(|| format!("cannot solve '{word}'"))?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Rank { top } => {
            print_session_header(&lists, status);
            let table = rank_openings(&solver, top).context("ranking openings failed")?;
            print_ranking(&table, lists.solutions.len());
            Ok(())
        }
        Commands::Stats {
            openings,
            jobs,
            limit,
        } => {
            print_session_header(&lists, status);
            let stats_config = StatsConfig {
                openings,
                jobs,
                limit,
            };
            let results =
                run_stats(&solver, &stats_config, true).context("simulation failed")?;
            print_stats(&results);
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

/// Directory for the hint matrix artifact, if one should be kept
fn artifact_dir(cli: &Cli) -> Option<&PathBuf> {
    if cli.no_cache {
        return None;
    }
    cli.cache_dir.as_ref().or(cli.word_list.as_ref())
}

/// Load the hint matrix from the artifact store, or build it
///
/// Embedded lists without `--cache-dir` are built every run.
fn load_matrix(cli: &Cli, lists: &WordLists) -> (HintMatrix, Option<CacheStatus>) {
    let Some(dir) = artifact_dir(cli) else {
        info!("no artifact directory, building hint matrix");
        return (HintMatrix::build(&lists.guesses, &lists.solutions), None);
    };

    let (matrix, status) = load_or_build(&FsCacheStore::new(dir), &lists.guesses, &lists.solutions);
    (matrix, Some(status))
}

fn run_play_command(solver: &Solver<'_>) -> Result<()> {
    println!("After each guess, enter the result: G/Y/- (or g/y/b, or 🟩🟨⬜).");
    println!("Type 'win' when solved, 'quit' to leave.");

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    match run_play(solver, &mut prompt).context("interactive session failed")? {
        PlayOutcome::Quit => println!("\nThanks for playing!"),
        PlayOutcome::Finished(_) => {}
    }
    Ok(())
}
