//! Codebreaker over the line protocol
//!
//! Writes one guess per line and reads `b w` feedback for it.

use super::{PlayError, SessionOutcome};
use crate::core::GameParams;
use crate::game::{BreakerStep, Codebreaker};
use crate::protocol::parse_feedback_line;
use std::io::{BufRead, Write};

/// Guess the secret held by the peer behind `input` and `output`
///
/// The opening guess is written before any input is read. End of input before
/// the game finishes ends the session quietly.
///
/// # Errors
/// Returns `PlayError` on I/O failure, on a malformed feedback line, or when
/// the feedback received is contradictory.
pub fn run_breaker<R, W>(
    params: GameParams,
    mut input: R,
    mut output: W,
) -> Result<SessionOutcome, PlayError>
where
    R: BufRead,
    W: Write,
{
    let mut breaker = Codebreaker::new(params);
    let mut line = String::new();

    if let Some(guess) = breaker.current_guess() {
        writeln!(output, "{guess}")?;
        output.flush()?;
    }

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input closed after {} guesses", breaker.guess_count());
            return Ok(SessionOutcome::InputClosed);
        }

        let feedback = parse_feedback_line(&line, params.length())?;
        match breaker.receive(feedback)? {
            BreakerStep::Guess(guess) => {
                writeln!(output, "{guess}")?;
                output.flush()?;
            }
            BreakerStep::Solved => {
                return Ok(SessionOutcome::Solved {
                    guesses: breaker.guess_count(),
                });
            }
        }
    }
}
