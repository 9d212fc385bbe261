//! Feedback sources and guess pickers
//!
//! The game loop never knows where feedback comes from: a known secret during
//! simulation, a person at a terminal, or a test double.

use super::engine::Choice;
use crate::core::{Pattern, Word};
use crate::error::Result;

/// Something that can tell the solver how a guess scored
pub trait FeedbackProvider {
    /// Feedback for `guess`
    ///
    /// The returned pattern must be well formed; interactive providers
    /// re-prompt on bad input instead of returning it.
    ///
    /// # Errors
    /// Provider-specific, e.g. I/O failure or the user quitting.
    fn feedback(&mut self, guess: &Word) -> Result<Pattern>;
}

impl<F> FeedbackProvider for F
where
    F: FnMut(&Word) -> Result<Pattern>,
{
    fn feedback(&mut self, guess: &Word) -> Result<Pattern> {
        self(guess)
    }
}

/// Scores guesses against a known secret
#[derive(Debug, Clone, Copy)]
pub struct SecretOracle {
    secret: Word,
}

impl SecretOracle {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn secret(&self) -> Word {
        self.secret
    }
}

impl FeedbackProvider for SecretOracle {
    fn feedback(&mut self, guess: &Word) -> Result<Pattern> {
        Ok(Pattern::calculate(guess, &self.secret))
    }
}

/// Decides which word to play from the solver's [`Choice`]
pub trait GuessPicker {
    /// Pick the word to play this round
    ///
    /// # Errors
    /// Picker-specific, e.g. I/O failure while asking a person.
    fn pick(&mut self, choice: &Choice, remaining: usize) -> Result<Word>;
}

/// Always plays the solver's own pick
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoPick;

impl GuessPicker for AutoPick {
    fn pick(&mut self, choice: &Choice, _remaining: usize) -> Result<Word> {
        Ok(choice.word())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_scores_against_secret() {
        let mut oracle = SecretOracle::new(Word::new("gator").unwrap());
        let feedback = oracle.feedback(&Word::new("rotor").unwrap()).unwrap();

        assert_eq!(feedback.to_string(), "--GGG");
        assert_eq!(oracle.secret().text(), "gator");
    }

    #[test]
    fn closures_are_providers() {
        let mut calls = 0;
        let mut provider = |_: &Word| -> Result<Pattern> {
            calls += 1;
            Ok(Pattern::PERFECT)
        };

        let guess = Word::new("slate").unwrap();
        assert_eq!(provider.feedback(&guess).unwrap(), Pattern::PERFECT);
        assert_eq!(provider.feedback(&guess).unwrap(), Pattern::PERFECT);
        assert_eq!(calls, 2);
    }

    #[test]
    fn auto_pick_takes_solver_word() {
        let word = Word::new("crane").unwrap();
        let picked = AutoPick.pick(&Choice::Forced(word), 1).unwrap();
        assert_eq!(picked, word);
    }
}
