//! Command implementations
//!
//! The line-protocol loops for both roles, plus the self-play commands built
//! on top of the same sessions.

pub mod benchmark;
pub mod breaker;
pub mod maker;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, select_secrets};
pub use breaker::run_breaker;
pub use maker::run_maker;
pub use solve::{GuessStep, SolveResult, solve_code};

use crate::game::GameError;
use crate::protocol::ProtocolError;
use std::{fmt, io};

/// How a protocol session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The secret was found after this many guesses
    Solved { guesses: usize },
    /// The peer closed the input before the game finished
    InputClosed,
}

/// Error type for the protocol loops
#[derive(Debug)]
pub enum PlayError {
    Io(io::Error),
    Protocol(ProtocolError),
    Game(GameError),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Protocol(err) => write!(f, "malformed input: {err}"),
            Self::Game(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Protocol(err) => Some(err),
            Self::Game(err) => Some(err),
        }
    }
}

impl From<io::Error> for PlayError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ProtocolError> for PlayError {
    fn from(err: ProtocolError) -> Self {
        Self::Protocol(err)
    }
}

impl From<GameError> for PlayError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}
