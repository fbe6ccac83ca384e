//! Feedback calculation and representation
//!
//! Feedback for a guess is the classic Mastermind pair `(b, w)`:
//! - `b` (black) = positions where guess and secret hold the same symbol
//! - `w` (white) = further symbol matches ignoring position, not already counted in `b`

use super::Code;
use std::fmt;

/// Feedback for a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    black: usize,
    white: usize,
}

impl Feedback {
    /// Create feedback from raw counts
    ///
    /// Callers are expected to pass `black + white <= length`; the line
    /// protocol enforces this before values reach a session.
    #[inline]
    #[must_use]
    pub const fn new(black: usize, white: usize) -> Self {
        Self { black, white }
    }

    /// The feedback that ends a game of the given length: all black, no white
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self {
            black: length,
            white: 0,
        }
    }

    /// Exact positional matches
    #[inline]
    #[must_use]
    pub const fn black(self) -> usize {
        self.black
    }

    /// Symbol matches in the wrong position
    #[inline]
    #[must_use]
    pub const fn white(self) -> usize {
        self.white
    }

    /// Check whether this feedback reports a fully matched code of the given length
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.black == length
    }

    /// Score `guess` against `code`
    ///
    /// # Algorithm
    /// 1. Count exact position matches (`b`)
    /// 2. Count the multiset overlap Σ min(count in code, count in guess) over all symbols
    /// 3. `w` = overlap − `b`, since every exact match is also part of the overlap
    ///
    /// The function is symmetric in its arguments and `calculate(x, x)` is
    /// always `(n, 0)`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Feedback, GameParams};
    ///
    /// let params = GameParams::new(6, 4).unwrap();
    /// let code = Code::new(&[0, 1, 2, 3], params).unwrap();
    /// let guess = Code::new(&[0, 0, 0, 0], params).unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&code, &guess), Feedback::new(1, 0));
    /// ```
    #[must_use]
    pub fn calculate(code: &Code, guess: &Code) -> Self {
        debug_assert_eq!(code.len(), guess.len(), "codes must have equal length");

        let black = code
            .symbols()
            .iter()
            .zip(guess.symbols())
            .filter(|(c, g)| c == g)
            .count();

        // Symbols are bytes and codes have at most 10 positions, so a flat
        // table of u8 counters covers every alphabet
        let mut available = [0u8; 256];
        for &symbol in code.symbols() {
            available[usize::from(symbol)] += 1;
        }

        let mut overlap = 0;
        for &symbol in guess.symbols() {
            let slot = &mut available[usize::from(symbol)];
            if *slot > 0 {
                *slot -= 1;
                overlap += 1;
            }
        }

        Self {
            black,
            white: overlap - black,
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.black, self.white)
    }
}
