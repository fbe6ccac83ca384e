//! Game sessions
//!
//! One session per role. Sessions are plain values that own their state; they
//! never block and never perform I/O, the caller feeds them one message per turn.

mod breaker;
mod maker;

pub use breaker::{BreakerState, BreakerStep, Codebreaker};
pub use maker::{Codemaker, MakerState};

use crate::solver::SolveError;
use std::fmt;

/// Error type for session steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The accumulated feedback cannot come from any code
    Contradiction { records: usize },
    /// The session already finished and accepts no more input
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction { records } => write!(
                f,
                "feedback is contradictory: no code is consistent with {records} recorded guesses"
            ),
            Self::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<SolveError> for GameError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::Contradiction { records } => Self::Contradiction { records },
        }
    }
}
