//! Guess selection
//!
//! The codebreaker always plays the smallest code, greater than its previous
//! guess, that agrees with every feedback received so far.

use super::consistency::is_consistent;
use super::enumerator::advance;
use crate::core::{Code, GameParams, History};
use rayon::prelude::*;
use std::fmt;

/// Error raised when no code can explain the recorded feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The enumeration ran out before finding a consistent candidate
    Contradiction { records: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction { records } => write!(
                f,
                "feedback is contradictory: no code is consistent with {records} recorded guesses"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// A selected guess and the search effort it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub guess: Code,
    /// Number of codes enumerated, including the accepted one
    pub examined: u64,
}

/// Select the next guess and report how many codes were tried
///
/// With an empty history this is the all-zero code. Otherwise enumeration
/// starts right after the latest guess and stops at the first code consistent
/// with the whole history.
///
/// # Errors
/// Returns `SolveError::Contradiction` if the enumeration is exhausted first.
pub fn find_next(history: &History, params: GameParams) -> Result<Selection, SolveError> {
    let Some(latest) = history.latest() else {
        return Ok(Selection {
            guess: Code::zero(params),
            examined: 0,
        });
    };

    let mut candidate = latest.guess().clone();
    let mut examined = 0u64;

    loop {
        if advance(&mut candidate, params).is_err() {
            log::debug!(
                "enumeration exhausted after {examined} candidates, {} records",
                history.len()
            );
            return Err(SolveError::Contradiction {
                records: history.len(),
            });
        }
        examined += 1;

        if is_consistent(&candidate, history) {
            log::trace!("selected {candidate} after examining {examined} candidates");
            return Ok(Selection {
                guess: candidate,
                examined,
            });
        }
    }
}

/// Get the next guess for the given history
///
/// # Errors
/// Returns `SolveError::Contradiction` if no remaining code is consistent.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Feedback, GameParams, History};
/// use mastermind::solver::next_guess;
///
/// let params = GameParams::new(6, 4).unwrap();
/// let mut history = History::new();
/// assert_eq!(next_guess(&history, params).unwrap(), Code::zero(params));
///
/// history.push(Code::zero(params), Feedback::new(1, 0));
/// let next = next_guess(&history, params).unwrap();
/// assert_eq!(next.symbols(), &[0, 1, 1, 1]);
/// ```
pub fn next_guess(history: &History, params: GameParams) -> Result<Code, SolveError> {
    find_next(history, params).map(|selection| selection.guess)
}

/// Count every code consistent with the history
///
/// Scans the whole code space in parallel, so unlike `find_next` this also
/// counts codes below the latest guess.
#[must_use]
pub fn count_candidates(history: &History, params: GameParams) -> u64 {
    if history.is_empty() {
        return params.search_space();
    }

    (0..params.search_space())
        .into_par_iter()
        .filter(|&index| is_consistent(&Code::from_index(index, params), history))
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn params(colors: u16, length: usize) -> GameParams {
        GameParams::new(colors, length).unwrap()
    }

    #[test]
    fn first_guess_is_all_zero() {
        let p = params(6, 4);
        let selection = find_next(&History::new(), p).unwrap();
        assert_eq!(selection.guess, Code::zero(p));
        assert_eq!(selection.examined, 0);
    }

    #[test]
    fn second_guess_skips_inconsistent_codes() {
        let p = params(6, 4);
        let mut history = History::new();
        history.push(Code::zero(p), Feedback::new(1, 0));

        let selection = find_next(&history, p).unwrap();
        assert_eq!(selection.guess.symbols(), &[0, 1, 1, 1]);

        // Everything strictly between 0000 and 0111 was rejected
        let expected = Code::new(&[0, 1, 1, 1], p).unwrap().index(p);
        assert_eq!(selection.examined, expected);
    }

    #[test]
    fn next_guess_is_smallest_consistent_successor() {
        let p = params(4, 3);
        let secret = Code::new(&[2, 3, 1], p).unwrap();
        let mut history = History::new();
        let mut guess = next_guess(&history, p).unwrap();

        while guess != secret {
            history.push(guess.clone(), Feedback::calculate(&secret, &guess));
            let next = next_guess(&history, p).unwrap();

            // Nothing between the previous guess and the new one was consistent
            let brute_force = (guess.index(p) + 1..p.search_space())
                .map(|index| Code::from_index(index, p))
                .find(|code| is_consistent(code, &history))
                .unwrap();
            assert_eq!(next, brute_force);
            guess = next;
        }
    }

    #[test]
    fn contradictory_history_is_reported() {
        let p = params(2, 2);
        let mut history = History::new();
        history.push(Code::zero(p), Feedback::new(2, 0));
        history.push(Code::new(&[0, 1], p).unwrap(), Feedback::new(2, 0));

        assert_eq!(
            next_guess(&history, p),
            Err(SolveError::Contradiction { records: 2 })
        );
    }

    #[test]
    fn history_ending_at_maximum_is_contradiction() {
        let p = params(3, 2);
        let mut history = History::new();
        history.push(Code::new(&[2, 2], p).unwrap(), Feedback::new(1, 0));

        assert!(matches!(
            find_next(&history, p),
            Err(SolveError::Contradiction { records: 1 })
        ));
    }

    #[test]
    fn count_candidates_matches_brute_force() {
        let p = params(4, 3);
        let mut history = History::new();
        assert_eq!(count_candidates(&history, p), 64);

        history.push(Code::zero(p), Feedback::new(1, 0));
        let brute_force = (0..p.search_space())
            .filter(|&i| is_consistent(&Code::from_index(i, p), &history))
            .count() as u64;
        // Exactly one zero: 3 positions × 3^2 fillers
        assert_eq!(brute_force, 27);
        assert_eq!(count_candidates(&history, p), brute_force);
    }
}
