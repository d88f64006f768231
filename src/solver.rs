//! Solving sessions: one per secret, driven either by the oracle or by a human player.

use crate::filter::filter;
use crate::{
    score, Constraints, Error, Feedback, Index, Rules, Word, INTERACTIVE_ROUNDS, MAX_ROUNDS,
};
use std::borrow::Cow;
use std::io::{BufRead, Write};

/// What happened in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More than one word is still possible; `word` is the next guess.
    Guess { word: Word, candidates: usize },
    /// Only `word` is left.
    Solved { word: Word },
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { rounds: usize, word: Word },
    /// The round budget ran out with more than one word still possible.
    Exhausted { rounds: usize },
    /// The player stopped answering.
    Abandoned { rounds: usize },
}

/// The state shared by automated and interactive solving.
///
/// A session starts out borrowing the full index and owns each narrowed index after that. Every
/// round replaces both the index and the constraints wholesale.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    remaining: Cow<'a, Index>,
    constraints: Constraints,
    guess: Word,
    rounds: usize,
    solved: Option<Word>,
}

impl<'a> Session<'a> {
    pub fn new(index: &'a Index, opening: Word) -> Self {
        Self {
            remaining: Cow::Borrowed(index),
            constraints: Constraints::new(),
            guess: opening,
            rounds: 0,
            solved: None,
        }
    }

    /// The word to play next.
    pub fn guess(&self) -> Word {
        self.guess
    }

    /// Rounds of feedback accepted so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn remaining(&self) -> &Index {
        &self.remaining
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn solved(&self) -> Option<Word> {
        self.solved
    }

    /// Applies the feedback for the current guess.
    ///
    /// On error the session is left exactly as it was, so the round can be retried.
    pub fn advance(&mut self, feedback: &Feedback) -> Result<Step, Error> {
        if let Some(word) = self.solved {
            return Ok(Step::Solved { word });
        }

        let constraints = self.constraints.update(&self.guess, feedback)?;
        let remaining = filter(&self.remaining, &constraints);
        let best = score(&remaining).ok_or(Error::NoCandidates)?;
        log::debug!(
            "round {}: {} {} -> {} candidates, best {} ({})",
            self.rounds + 1,
            self.guess,
            feedback,
            best.candidates,
            best.guess,
            best.letters
        );

        self.constraints = constraints;
        self.remaining = Cow::Owned(remaining);
        self.rounds += 1;

        if best.candidates == 1 {
            self.solved = Some(best.guess);
            Ok(Step::Solved { word: best.guess })
        } else {
            self.guess = best.guess;
            Ok(Step::Guess {
                word: best.guess,
                candidates: best.candidates,
            })
        }
    }
}

/// Solves for a known `secret`, with the oracle giving feedback under `rules`.
pub fn solve(index: &Index, secret: &Word, opening: Word, rules: Rules) -> Result<Outcome, Error> {
    solve_traced(index, secret, opening, rules, |_, _, _| {})
}

/// Like [`solve`], but calls `observe` with the guess, its feedback and the resulting step after
/// every round.
pub fn solve_traced(
    index: &Index,
    secret: &Word,
    opening: Word,
    rules: Rules,
    mut observe: impl FnMut(&Word, &Feedback, &Step),
) -> Result<Outcome, Error> {
    let mut session = Session::new(index, opening);
    for _ in 0..MAX_ROUNDS {
        let guess = session.guess();
        let feedback = Feedback::compute(secret, &guess, rules);
        let step = session.advance(&feedback)?;
        observe(&guess, &feedback, &step);
        if let Step::Solved { word } = step {
            log::debug!("solved {} in {} rounds", secret, session.rounds());
            return Ok(Outcome::Solved {
                rounds: session.rounds(),
                word,
            });
        }
    }
    log::debug!("gave up on {} after {} rounds", secret, MAX_ROUNDS);
    Ok(Outcome::Exhausted { rounds: MAX_ROUNDS })
}

/// Plays alongside a human: suggests `opening`, then reads one line of feedback per round from
/// `input` and writes the next suggestion to `output`.
///
/// Feedback that cannot be parsed or does not fit earlier rounds is reported and asked for again
/// without using up a round. The session ends when one word is left, after
/// [`INTERACTIVE_ROUNDS`] rounds, or at the end of `input`.
pub fn interactive<R: BufRead, W: Write>(
    index: &Index,
    opening: Word,
    input: R,
    mut output: W,
) -> Result<Outcome, Error> {
    let mut session = Session::new(index, opening);
    writeln!(output, "Guess {}", opening.to_uppercase())?;

    let mut lines = input.lines();
    while session.rounds() < INTERACTIVE_ROUNDS {
        let line = match lines.next() {
            Some(line) => line?,
            None => {
                log::info!("input ended after {} rounds", session.rounds());
                return Ok(Outcome::Abandoned {
                    rounds: session.rounds(),
                });
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line
            .parse::<Feedback>()
            .and_then(|feedback| session.advance(&feedback))
        {
            Ok(Step::Solved { word }) => {
                writeln!(output, "Solved: {}", word.to_uppercase())?;
                log::info!("solved in {} rounds", session.rounds());
                return Ok(Outcome::Solved {
                    rounds: session.rounds(),
                    word,
                });
            }
            Ok(Step::Guess { word, candidates }) => {
                writeln!(
                    output,
                    "Guess {}, {} candidates remaining",
                    word.to_uppercase(),
                    candidates
                )?;
            }
            Err(e @ (Error::MalformedFeedback { .. } | Error::NoCandidates)) => {
                log::warn!("rejected feedback {:?}: {}", line.trim(), e);
                writeln!(output, "{}", e.display_detailed())?;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Outcome::Exhausted {
        rounds: session.rounds(),
    })
}
