//! Error taxonomy for the hint engine
//!
//! Every failure the core can report is a variant of [`SolverError`]. The core
//! never recovers from a contradiction or a length mismatch on its own; it
//! returns one of these and lets the session owner decide.

use crate::core::{Word, WordError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the hint engine and its collaborators
#[derive(Debug, Error)]
pub enum SolverError {
    /// Guess and secret have different lengths
    #[error("guess '{guess}' and secret '{secret}' differ in length")]
    LengthMismatch { guess: String, secret: String },

    /// No word is consistent with the feedback received so far
    #[error("no consistent word remains; the feedback history is contradictory")]
    EmptySolutionSet,

    /// A word list or cache artifact is absent
    #[error("missing resource: {}", .path.display())]
    MissingResource { path: PathBuf },

    /// Feedback text could not be parsed
    #[error("invalid feedback '{0}'")]
    InvalidFeedback(String),

    /// A word failed validation
    #[error("invalid word '{text}': {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },

    /// The guess has no row in the hint matrix
    #[error("'{0}' is not a known guess")]
    UnknownGuess(Word),

    /// The word is a legal guess but not a possible secret
    #[error("'{0}' is not in the solution list")]
    NotASolution(Word),

    /// The person answering the prompts quit or closed the input
    #[error("cancelled by the user")]
    Cancelled,

    /// `step` was called on a session that already ended
    #[error("the session has already finished")]
    SessionFinished,

    /// The cache artifact could not be encoded
    #[error("cache artifact error: {0}")]
    Cache(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SolverError {
    /// Wrap a [`WordError`] together with the offending text
    pub fn invalid_word(text: impl Into<String>, source: WordError) -> Self {
        Self::InvalidWord {
            text: text.into(),
            source,
        }
    }
}

/// Result alias used across the crate
pub type Result<T, E = SolverError> = std::result::Result<T, E>;
