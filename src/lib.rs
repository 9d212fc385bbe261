//! Wordle Hints
//!
//! An entropy-ranked guess assistant for five-letter word games. Every guess
//! is scored by how much its feedback is expected to narrow the remaining
//! answers, using a hint matrix that is computed once and cached.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::config::SolverConfig;
//! use wordle_hints::core::{Pattern, SolutionSet, Word};
//! use wordle_hints::hints::HintMatrix;
//! use wordle_hints::solver::{AutoPick, Outcome, SecretOracle, Solver};
//!
//! let guesses: Vec<Word> = ["crane", "slate", "gator", "rotor", "tutor"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let solutions: SolutionSet = guesses[2..].iter().copied().collect();
//! let matrix = HintMatrix::build(&guesses, &solutions);
//!
//! let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
//! let secret = Word::new("tutor").unwrap();
//! let report = solver
//!     .run(&mut SecretOracle::new(secret), &mut AutoPick, None)
//!     .unwrap();
//! assert!(matches!(report.outcome, Outcome::Solved(_)));
//!
//! // feedback for a single pair
//! let pattern = Pattern::compare("rotor", "gator").unwrap();
//! assert_eq!(pattern.to_string(), "--GGG");
//! ```

// Core domain types
pub mod core;

// Errors and explicit configuration
pub mod config;
pub mod error;

// Hint matrix and its cache
pub mod hints;

// Ranking and the game loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
