//! Game session state machine
//!
//! `Active` sessions move to `Solved`, `Exhausted`, or the next `Active`
//! round through the pure [`SessionState::step`]. A contradiction in the
//! supplied feedback is an error, never a silent no-op.

use crate::core::{Pattern, SolutionSet, Word};
use crate::error::{Result, SolverError};

/// Where a session stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Still guessing; `round` is the 1-based number of the next guess
    Active { solutions: SolutionSet, round: usize },
    /// The secret was guessed on round `rounds`
    Solved { rounds: usize },
    /// The round budget ran out after `rounds` guesses
    Exhausted { rounds: usize },
}

/// Final result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Solved using this many guesses
    Solved(usize),
    Exhausted,
}

impl SessionState {
    /// Start a session on round 1
    #[must_use]
    pub const fn new(solutions: SolutionSet) -> Self {
        Self::Active {
            solutions,
            round: 1,
        }
    }

    /// Apply the feedback received for `guess`
    ///
    /// # Errors
    /// - `SessionFinished` if the session is not active
    /// - `EmptySolutionSet` if no remaining solution is consistent with the
    ///   feedback
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Pattern, SolutionSet, Word};
    /// use wordle_hints::solver::SessionState;
    ///
    /// let solutions: SolutionSet = ["gator", "rotor", "tutor"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let guess = Word::new("rotor").unwrap();
    /// let state = SessionState::new(solutions);
    ///
    /// let next = state.step(&guess, Pattern::parse("--GGG").unwrap(), 6).unwrap();
    /// assert_eq!(next.round(), 2);
    /// assert_eq!(next.solutions().unwrap().len(), 1);
    /// ```
    pub fn step(&self, guess: &Word, feedback: Pattern, round_budget: usize) -> Result<Self> {
        let Self::Active { solutions, round } = self else {
            return Err(SolverError::SessionFinished);
        };
        let round = *round;

        if feedback.is_perfect() {
            return Ok(Self::Solved { rounds: round });
        }

        let narrowed: SolutionSet = solutions
            .iter()
            .filter(|secret| Pattern::calculate(guess, secret) == feedback)
            .copied()
            .collect();

        if narrowed.is_empty() {
            return Err(SolverError::EmptySolutionSet);
        }

        if round >= round_budget {
            return Ok(Self::Exhausted { rounds: round });
        }

        Ok(Self::Active {
            solutions: narrowed,
            round: round + 1,
        })
    }

    /// Remaining solutions, while active
    #[must_use]
    pub const fn solutions(&self) -> Option<&SolutionSet> {
        match self {
            Self::Active { solutions, .. } => Some(solutions),
            _ => None,
        }
    }

    /// Next round number while active, rounds used once finished
    #[must_use]
    pub const fn round(&self) -> usize {
        match self {
            Self::Active { round, .. } => *round,
            Self::Solved { rounds } | Self::Exhausted { rounds } => *rounds,
        }
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Active { .. } => None,
            Self::Solved { rounds } => Some(Outcome::Solved(*rounds)),
            Self::Exhausted { .. } => Some(Outcome::Exhausted),
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self, Self::Active { .. })
    }
}

/// Free-standing form of [`SessionState::step`]
///
/// # Errors
/// As for [`SessionState::step`].
pub fn step(
    state: &SessionState,
    guess: &Word,
    feedback: Pattern,
    round_budget: usize,
) -> Result<SessionState> {
    state.step(guess, feedback, round_budget)
}
