//! Ordered enumeration of the code space
//!
//! Codes are read as `N`-digit base-K numerals with position 0 most
//! significant. The successor of a code is the next numeral up; the
//! all-`(K-1)` code has no successor.

use crate::core::{Code, GameParams};
use std::fmt;

/// The enumeration has run past the largest code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exhausted;

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code space exhausted")
    }
}

impl std::error::Error for Exhausted {}

/// Advance `code` in place to its successor
///
/// Scans from the rightmost position leftward for the first symbol below
/// `K - 1`, increments it and zeroes every position to its right.
///
/// On `Exhausted` the code is left as all zeros (the carry wrapped around).
pub(crate) fn advance(code: &mut Code, params: GameParams) -> Result<(), Exhausted> {
    let max_symbol = params.max_symbol();
    for symbol in code.symbols_mut().iter_mut().rev() {
        if *symbol < max_symbol {
            *symbol += 1;
            return Ok(());
        }
        *symbol = 0;
    }
    Err(Exhausted)
}

/// Get the code immediately after `code` in numeral order
///
/// # Errors
/// Returns `Exhausted` if `code` is the largest code (every symbol is `K - 1`).
///
/// # Examples
/// ```
/// use mastermind::core::{Code, GameParams};
/// use mastermind::solver::successor;
///
/// let params = GameParams::new(6, 4).unwrap();
/// let code = Code::new(&[0, 0, 5, 5], params).unwrap();
/// assert_eq!(successor(&code, params).unwrap().symbols(), &[0, 1, 0, 0]);
///
/// let last = Code::new(&[5, 5, 5, 5], params).unwrap();
/// assert!(successor(&last, params).is_err());
/// ```
pub fn successor(code: &Code, params: GameParams) -> Result<Code, Exhausted> {
    let mut next = code.clone();
    advance(&mut next, params)?;
    Ok(next)
}

/// Iterator over every code strictly greater than a starting code, ascending
///
/// Ends once the enumeration is exhausted.
#[derive(Debug, Clone)]
pub struct Candidates {
    current: Option<Code>,
    params: GameParams,
}

impl Candidates {
    /// Enumerate every code after `start`
    #[must_use]
    pub const fn after(start: Code, params: GameParams) -> Self {
        Self {
            current: Some(start),
            params,
        }
    }
}

impl Iterator for Candidates {
    type Item = Code;

    fn next(&mut self) -> Option<Code> {
        let code = self.current.as_mut()?;
        if advance(code, self.params).is_ok() {
            Some(code.clone())
        } else {
            self.current = None;
            None
        }
    }
}
