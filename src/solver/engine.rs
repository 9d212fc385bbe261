//! Main solver interface
//!
//! [`Solver`] holds what every session shares: the guess list, the full hint
//! matrix, and the configuration. [`Game`] is one session on top of it, with
//! its own solution set and its own narrowed view of the matrix.

use super::entropy::{Ranked, calculate_metrics, rank};
use super::feedback::{FeedbackProvider, GuessPicker};
use super::session::{Outcome, SessionState};
use crate::config::{PairPolicy, SolverConfig};
use crate::core::{Pattern, SolutionSet, Word};
use crate::error::{Result, SolverError};
use crate::hints::HintMatrix;
use log::debug;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::borrow::Cow;
use std::path::PathBuf;

/// The solver's recommendation for one round
#[derive(Debug, Clone, PartialEq)]
pub enum Choice {
    /// One solution left; ranking skipped
    Forced(Word),
    /// Two solutions left; `pick` was chosen by the [`PairPolicy`]
    Pair { pick: Word, other: Word },
    /// Best ranked guess plus the top-K shortlist (best first)
    Ranked { best: Ranked, top: Vec<Ranked> },
}

impl Choice {
    /// The word the solver would play
    #[must_use]
    pub const fn word(&self) -> Word {
        match self {
            Self::Forced(word) | Self::Pair { pick: word, .. } => *word,
            Self::Ranked { best, .. } => best.word,
        }
    }

    /// Every word a caller may reasonably choose from
    #[must_use]
    pub fn options(&self) -> Vec<Word> {
        match self {
            Self::Forced(word) => vec![*word],
            Self::Pair { pick, other } => vec![*pick, *other],
            Self::Ranked { top, .. } => top.iter().map(|r| r.word).collect(),
        }
    }
}

/// One played round
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Pattern,
    pub candidates_before: usize,
    /// `None` once the game has ended
    pub candidates_after: Option<usize>,
    /// Unrounded entropy of the guess against the candidates it faced
    pub entropy: Option<f64>,
}

/// Record of a finished game
#[derive(Debug, Clone, PartialEq)]
pub struct GameReport {
    pub outcome: Outcome,
    pub turns: Vec<Turn>,
}

impl GameReport {
    /// Guesses played
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.turns.len()
    }
}

/// Shared, read-only solver state
pub struct Solver<'a> {
    guesses: &'a [Word],
    matrix: &'a HintMatrix,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a solver over a guess list and the hint matrix built for it
    ///
    /// The matrix scope is the initial solution set of every game.
    #[must_use]
    pub const fn new(guesses: &'a [Word], matrix: &'a HintMatrix, config: SolverConfig) -> Self {
        Self {
            guesses,
            matrix,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn matrix(&self) -> &'a HintMatrix {
        self.matrix
    }

    /// Rank every guess against the full solution set
    ///
    /// # Errors
    /// As for [`rank`].
    pub fn rank_openings(&self) -> Result<Vec<Ranked>> {
        rank(self.guesses, self.matrix.scope(), self.matrix)
    }

    /// Start a new session
    #[must_use]
    pub fn start(&self) -> Game<'a> {
        let rng = self
            .config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Game {
            guesses: self.guesses,
            view: Cow::Borrowed(self.matrix),
            config: self.config.clone(),
            state: SessionState::new(self.matrix.scope().clone()),
            rng,
            turns: Vec::new(),
        }
    }

    /// Play a whole game with `provider` answering and `picker` choosing
    ///
    /// `opening`, when given, is played in round 1 without ranking.
    ///
    /// # Errors
    /// Any error from the session, the provider, or the picker.
    pub fn run<P, K>(
        &self,
        provider: &mut P,
        picker: &mut K,
        opening: Option<Word>,
    ) -> Result<GameReport>
    where
        P: FeedbackProvider + ?Sized,
        K: GuessPicker + ?Sized,
    {
        self.start().play(provider, picker, opening)
    }
}

/// One session: a solution set and the matrix narrowed to it
pub struct Game<'a> {
    guesses: &'a [Word],
    view: Cow<'a, HintMatrix>,
    config: SolverConfig,
    state: SessionState,
    rng: StdRng,
    turns: Vec<Turn>,
}

impl Game<'_> {
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Solutions still consistent with the feedback so far
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.state.solutions().map_or(0, SolutionSet::len)
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Recommend a guess for the current round
    ///
    /// # Errors
    /// - `SessionFinished` if the game is over
    /// - `EmptySolutionSet` if nothing is consistent with the feedback
    /// - `MissingResource` if there are three or more solutions and no guesses
    pub fn choose(&mut self) -> Result<Choice> {
        let solutions = self.state.solutions().ok_or(SolverError::SessionFinished)?;

        let mut iter = solutions.iter().copied();
        match (iter.next(), iter.next(), iter.next()) {
            (None, _, _) => Err(SolverError::EmptySolutionSet),
            (Some(only), None, _) => Ok(Choice::Forced(only)),
            (Some(first), Some(second), None) => Ok(match self.config.pair_policy {
                PairPolicy::First => Choice::Pair {
                    pick: first,
                    other: second,
                },
                PairPolicy::Random => {
                    let pair = [first, second];
                    let pick = *pair.choose(&mut self.rng).unwrap_or(&first);
                    let other = if pick == first { second } else { first };
                    Choice::Pair { pick, other }
                }
            }),
            _ => {
                let mut ranked = rank(self.guesses, solutions, &self.view)?;
                ranked.truncate(self.config.top_k.max(1));
                let best = *ranked.first().ok_or_else(|| SolverError::MissingResource {
                    path: PathBuf::from("guess list"),
                })?;
                Ok(Choice::Ranked { best, top: ranked })
            }
        }
    }

    /// Record `feedback` for `guess` and narrow the session
    ///
    /// # Errors
    /// As for [`SessionState::step`].
    pub fn apply(&mut self, guess: Word, feedback: Pattern) -> Result<&SessionState> {
        let candidates_before = self.remaining();
        let entropy = self
            .state
            .solutions()
            .and_then(|solutions| calculate_metrics(&guess, solutions, &self.view).ok())
            .map(|metrics| metrics.entropy);

        let next = self
            .state
            .step(&guess, feedback, self.config.round_budget)?;

        if let Some(narrowed) = next.solutions() {
            self.view = Cow::Owned(self.view.restrict(narrowed));
        }

        let candidates_after = next.solutions().map(SolutionSet::len);
        debug!(
            "round {}: {guess} -> {feedback}, {candidates_before} -> {candidates_after:?} candidates",
            self.state.round()
        );

        self.turns.push(Turn {
            guess,
            feedback,
            candidates_before,
            candidates_after,
            entropy,
        });
        self.state = next;
        Ok(&self.state)
    }

    /// Run the game to the end
    ///
    /// # Errors
    /// Any error from the session, the provider, or the picker.
    pub fn play<P, K>(
        mut self,
        provider: &mut P,
        picker: &mut K,
        opening: Option<Word>,
    ) -> Result<GameReport>
    where
        P: FeedbackProvider + ?Sized,
        K: GuessPicker + ?Sized,
    {
        while !self.state.is_finished() {
            let guess = match opening {
                Some(word) if self.turns.is_empty() => word,
                _ => {
                    let choice = self.choose()?;
                    picker.pick(&choice, self.remaining())?
                }
            };
            let feedback = provider.feedback(&guess)?;
            self.apply(guess, feedback)?;
        }

        let outcome = self.state.outcome().unwrap_or(Outcome::Exhausted);
        Ok(GameReport {
            outcome,
            turns: self.turns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::feedback::{AutoPick, SecretOracle};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn setup() -> (Vec<Word>, HintMatrix) {
        let guesses = words(&[
            "crane", "slate", "irate", "crate", "grate", "trace", "gator", "rotor", "tutor",
            "motor", "actor",
        ]);
        let solutions: SolutionSet =
            words(&["irate", "crate", "grate", "gator", "rotor", "tutor", "motor"])
                .into_iter()
                .collect();
        let matrix = HintMatrix::build(&guesses, &solutions);
        (guesses, matrix)
    }

    fn pair_matrix() -> (Vec<Word>, HintMatrix) {
        let guesses = words(&["gator", "rotor", "slate"]);
        let solutions: SolutionSet = words(&["gator", "rotor"]).into_iter().collect();
        let matrix = HintMatrix::build(&guesses, &solutions);
        (guesses, matrix)
    }

    #[test]
    fn choose_ranks_when_many_remain() {
        let (guesses, matrix) = setup();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let mut game = solver.start();

        let Choice::Ranked { best, top } = game.choose().unwrap() else {
            panic!("expected a ranked choice");
        };
        assert_eq!(top[0], best);
        assert!(top.len() <= 8);
        assert_eq!(best, solver.rank_openings().unwrap()[0]);
    }

    #[test]
    fn choose_respects_top_k() {
        let (guesses, matrix) = setup();
        let config = SolverConfig {
            top_k: 3,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&guesses, &matrix, config);

        let choice = solver.start().choose().unwrap();
        assert_eq!(choice.options().len(), 3);
    }

    #[test]
    fn choose_forces_last_solution() {
        let (guesses, matrix) = setup();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let mut game = solver.start();

        let gator = Word::new("gator").unwrap();
        let crane = Word::new("crane").unwrap();
        game.apply(crane, Pattern::calculate(&crane, &gator)).unwrap();
        // -YG-- : only gator has a late r and a middle a
        assert_eq!(game.remaining(), 1);
        assert_eq!(game.choose().unwrap(), Choice::Forced(gator));
    }

    #[test]
    fn pair_policy_first_is_deterministic() {
        let (guesses, matrix) = pair_matrix();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());

        let choice = solver.start().choose().unwrap();
        assert_eq!(
            choice,
            Choice::Pair {
                pick: Word::new("gator").unwrap(),
                other: Word::new("rotor").unwrap(),
            }
        );
    }

    #[test]
    fn pair_policy_random_is_seedable() {
        let (guesses, matrix) = pair_matrix();
        let config = SolverConfig {
            pair_policy: PairPolicy::Random,
            seed: Some(7),
            ..SolverConfig::default()
        };
        let solver = Solver::new(&guesses, &matrix, config);

        let first = solver.start().choose().unwrap();
        let again = solver.start().choose().unwrap();
        assert_eq!(first, again);

        let mut options = first.options();
        options.sort();
        assert_eq!(options, words(&["gator", "rotor"]));
    }

    #[test]
    fn apply_narrows_view_and_records_turn() {
        let (guesses, matrix) = setup();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let mut game = solver.start();

        let guess = Word::new("slate").unwrap();
        let secret = Word::new("tutor").unwrap();
        game.apply(guess, Pattern::calculate(&guess, &secret)).unwrap();

        let turn = &game.turns()[0];
        assert_eq!(turn.candidates_before, 7);
        assert_eq!(turn.candidates_after, Some(game.remaining()));
        assert!(turn.entropy.unwrap() > 0.0);
        assert_eq!(game.view.scope(), game.state().solutions().unwrap());
    }

    #[test]
    fn contradiction_surfaces_as_error() {
        let (guesses, matrix) = setup();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let mut game = solver.start();

        let err = game
            .apply(Word::new("crane").unwrap(), Pattern::parse("GGGG-").unwrap())
            .unwrap_err();
        assert!(matches!(err, SolverError::EmptySolutionSet));
        assert_eq!(game.remaining(), 7, "failed step must not change state");
    }

    #[test]
    fn run_solves_every_solution() {
        let (guesses, matrix) = setup();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());

        for secret in matrix.scope() {
            let report = solver
                .run(&mut SecretOracle::new(*secret), &mut AutoPick, None)
                .unwrap();
            let Outcome::Solved(rounds) = report.outcome else {
                panic!("{secret} not solved");
            };
            assert_eq!(rounds, report.rounds());
            assert!(rounds <= 6);
            assert_eq!(report.turns.last().unwrap().guess, *secret);
        }
    }

    #[test]
    fn run_uses_forced_opening() {
        let (guesses, matrix) = setup();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let opening = Word::new("actor").unwrap();

        let report = solver
            .run(
                &mut SecretOracle::new(Word::new("grate").unwrap()),
                &mut AutoPick,
                Some(opening),
            )
            .unwrap();
        assert_eq!(report.turns[0].guess, opening);
        assert!(matches!(report.outcome, Outcome::Solved(_)));
    }

    #[test]
    fn run_exhausts_with_tiny_budget() {
        let (guesses, matrix) = setup();
        let config = SolverConfig {
            round_budget: 1,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&guesses, &matrix, config);
        let opening = Word::new("slate").unwrap();

        let report = solver
            .run(
                &mut SecretOracle::new(Word::new("motor").unwrap()),
                &mut AutoPick,
                Some(opening),
            )
            .unwrap();
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.rounds(), 1);
        assert_eq!(report.turns[0].candidates_after, None);
    }

    #[test]
    fn run_reports_lying_provider() {
        let (guesses, matrix) = setup();
        let solver = Solver::new(&guesses, &matrix, SolverConfig::default());
        let mut liar = |_: &Word| -> Result<Pattern> { Ok(Pattern::parse("GGGG-").unwrap()) };

        let err = solver.run(&mut liar, &mut AutoPick, None).unwrap_err();
        assert!(matches!(err, SolverError::EmptySolutionSet));
    }
}
