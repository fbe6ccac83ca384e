//! Self-play for a known secret
//!
//! Runs the codebreaker against a codemaker holding the given secret and
//! records every step.

use crate::core::{Code, Feedback, GameParams};
use crate::game::{BreakerStep, Codebreaker, Codemaker, GameError};
use crate::solver::count_candidates;

/// Result of solving a secret
pub struct SolveResult {
    pub secret: Code,
    pub params: GameParams,
    pub steps: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    /// Codes enumerated to select this guess
    pub examined: u64,
    /// Codes still consistent after this feedback, when counting was requested
    pub candidates_after: Option<u64>,
}

impl SolveResult {
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// Total codes enumerated across all guesses
    #[must_use]
    pub fn total_examined(&self) -> u64 {
        self.steps.iter().map(|step| step.examined).sum()
    }
}

/// Solve `secret` by self-play
///
/// With `count_remaining` set, each step also records how many codes remain
/// consistent, which costs a full scan of the code space per guess.
///
/// # Errors
/// Returns `GameError` if a session step fails. With honest feedback from the
/// codemaker this does not happen.
pub fn solve_code(
    secret: Code,
    params: GameParams,
    count_remaining: bool,
) -> Result<SolveResult, GameError> {
    let mut breaker = Codebreaker::new(params);
    let mut maker = Codemaker::new(secret.clone());
    let mut steps = Vec::new();

    while let Some(guess) = breaker.current_guess().cloned() {
        let examined = breaker.last_examined();
        let feedback = maker.respond(&guess)?;
        let step = breaker.receive(feedback)?;

        let candidates_after = match step {
            BreakerStep::Solved => count_remaining.then_some(1),
            BreakerStep::Guess(_) => {
                count_remaining.then(|| count_candidates(breaker.history(), params))
            }
        };

        steps.push(GuessStep {
            guess,
            feedback,
            examined,
            candidates_after,
        });
    }

    Ok(SolveResult {
        secret,
        params,
        steps,
    })
}
