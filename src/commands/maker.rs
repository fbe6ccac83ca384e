//! Codemaker over the line protocol
//!
//! Reads one guess per line and answers each with `b w`.

use super::{PlayError, SessionOutcome};
use crate::core::{Code, GameParams};
use crate::game::{Codemaker, MakerState};
use crate::protocol::parse_guess_line;
use std::io::{BufRead, Write};

/// Score guesses read from `input` against `secret` until one matches
///
/// Each answer is flushed as soon as it is written. End of input before the
/// secret is guessed ends the session quietly.
///
/// # Errors
/// Returns `PlayError` on I/O failure or on a malformed guess line.
pub fn run_maker<R, W>(
    secret: Code,
    params: GameParams,
    mut input: R,
    mut output: W,
) -> Result<SessionOutcome, PlayError>
where
    R: BufRead,
    W: Write,
{
    let mut maker = Codemaker::new(secret);
    let mut line = String::new();

    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            log::debug!("input closed after {} guesses", maker.guesses());
            return Ok(SessionOutcome::InputClosed);
        }

        let guess = parse_guess_line(&line, params)?;
        let feedback = maker.respond(&guess)?;
        writeln!(output, "{feedback}")?;
        output.flush()?;

        if maker.state() == MakerState::Done {
            return Ok(SessionOutcome::Solved {
                guesses: maker.guesses(),
            });
        }
    }
}
