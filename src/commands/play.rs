//! Interactive play mode
//!
//! The solver suggests, the person at the keyboard picks a word, plays it in
//! the real game and types back the colours they got.

use crate::core::{Pattern, SolutionSet, Word};
use crate::error::{Result, SolverError};
use crate::solver::{Choice, FeedbackProvider, GuessPicker, Outcome, Solver};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Answers that count as "all green"
const WIN_WORDS: [&str; 4] = ["win", "correct", "yes", "solved"];

/// Answers that end the session
const QUIT_WORDS: [&str; 3] = ["quit", "q", "exit"];

/// How an interactive session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Finished(Outcome),
    Quit,
}

/// Line-based prompt over any reader and writer
///
/// Serves as both the [`FeedbackProvider`] and the [`GuessPicker`] of an
/// interactive game. Malformed input is reported and asked for again.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write a line to the prompt's output
    ///
    /// # Errors
    /// I/O failure on the output.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SolverError::Cancelled);
        }
        let answer = line.trim().to_string();
        if QUIT_WORDS.contains(&answer.to_lowercase().as_str()) {
            return Err(SolverError::Cancelled);
        }
        Ok(answer)
    }

    fn select(&mut self, options: &[Word], default: Word) -> Result<Word> {
        loop {
            let answer = self.ask(&format!("Select a guess [{default}]"))?;
            if answer.is_empty() {
                return Ok(default);
            }
            if let Ok(index) = answer.parse::<usize>() {
                if let Some(word) = index.checked_sub(1).and_then(|i| options.get(i)) {
                    return Ok(*word);
                }
            }
            if let Some(word) = Word::new(&answer).ok().filter(|w| options.contains(w)) {
                return Ok(word);
            }
            self.say(format!("'{answer}' is not one of the listed guesses").red())?;
        }
    }
}

impl<R: BufRead, W: Write> FeedbackProvider for Prompt<R, W> {
    fn feedback(&mut self, guess: &Word) -> Result<Pattern> {
        loop {
            let question = format!(
                "Result for '{}' (G/Y/- or g/y/b, 'win' if solved)",
                guess.text().bright_magenta()
            );
            let answer = self.ask(&question)?;

            if WIN_WORDS.contains(&answer.to_lowercase().as_str()) {
                return Ok(Pattern::PERFECT);
            }
            match Pattern::parse(&answer) {
                Ok(pattern) => return Ok(pattern),
                Err(e) => {
                    self.say(format!("{e}: enter five of G/Y/-, g/y/b or 🟩🟨⬜").red())?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> GuessPicker for Prompt<R, W> {
    fn pick(&mut self, choice: &Choice, remaining: usize) -> Result<Word> {
        match choice {
            Choice::Forced(word) => {
                self.say(format!(
                    "Only one possible answer remains: {}",
                    word.text().bright_green().bold()
                ))?;
                Ok(*word)
            }
            Choice::Pair { pick, other } => {
                self.say(format!(
                    "Two possible answers remain: {} or {}",
                    pick.text().bold(),
                    other.text().bold()
                ))?;
                self.select(&[*pick, *other], *pick)
            }
            Choice::Ranked { best, top } => {
                self.say(format!("Top {} guesses for {remaining} answers:", top.len()))?;
                for (i, ranked) in top.iter().enumerate() {
                    self.say(format!(
                        "  {:>2}. {}  {:.2} bits",
                        i + 1,
                        ranked.word.text().bright_white().bold(),
                        ranked.entropy
                    ))?;
                }
                self.select(&choice.options(), best.word)
            }
        }
    }
}

/// Play one interactive game
///
/// Feedback that contradicts every remaining answer is reported and asked for
/// again; the session is left as it was.
///
/// # Errors
/// I/O failure on the prompt, or a solver error other than a contradiction.
pub fn run_play<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    prompt: &mut Prompt<R, W>,
) -> Result<PlayOutcome> {
    let mut game = solver.start();
    let list_below = solver.config().top_k;

    loop {
        if let Some(outcome) = game.state().outcome() {
            announce(prompt, outcome)?;
            return Ok(PlayOutcome::Finished(outcome));
        }

        if let Some(solutions) = game.state().solutions() {
            prompt.say(round_header(game.state().round(), solutions, list_below))?;
        }

        let choice = game.choose()?;
        let guess = match prompt.pick(&choice, game.remaining()) {
            Err(SolverError::Cancelled) => return Ok(PlayOutcome::Quit),
            other => other?,
        };

        loop {
            let feedback = match prompt.feedback(&guess) {
                Err(SolverError::Cancelled) => return Ok(PlayOutcome::Quit),
                other => other?,
            };
            match game.apply(guess, feedback) {
                Ok(_) => break,
                Err(SolverError::EmptySolutionSet) => prompt.say(
                    "No possible answer matches that result. Check it and enter it again.".red(),
                )?,
                Err(e) => return Err(e),
            }
        }
    }
}

fn round_header(round: usize, solutions: &SolutionSet, list_below: usize) -> String {
    let mut header = format!(
        "\n{} {} possible answers",
        format!("Round {round}:").bright_cyan().bold(),
        solutions.len()
    );
    if solutions.len() > 1 && solutions.len() < list_below {
        let words: Vec<&str> = solutions.iter().map(Word::text).collect();
        header.push_str(&format!(" ({})", words.join(", ")));
    }
    header
}

fn announce<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Solved(rounds) => prompt.say(
            format!(
                "Victory! Solved in {rounds} {}",
                if rounds == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold(),
        ),
        Outcome::Exhausted => prompt.say("Out of guesses.".red().bold()),
    }
}
