//! Guess ranking and the game loop
//!
//! [`rank`] scores guesses by expected information. [`SessionState`] is the
//! pure round-to-round transition, and [`Solver`] drives whole games against
//! any [`FeedbackProvider`].

mod engine;
mod entropy;
mod feedback;
mod session;

pub use engine::{Choice, Game, GameReport, Solver, Turn};
pub use entropy::{GuessMetrics, Ranked, calculate_metrics, rank, shannon_entropy};
pub use feedback::{AutoPick, FeedbackProvider, GuessPicker, SecretOracle};
pub use session::{Outcome, SessionState, step};
