//! Code representation
//!
//! A Code is a fixed-length sequence of symbols in `[0, K)`. The same type is
//! used for the codemaker's secret and for every guess.

use super::GameParams;
use std::fmt;

/// A secret or a guess
///
/// Equality and ordering are element-wise. For codes of equal length the
/// derived lexicographic order is the base-K numeral order used by the
/// enumerator, with position 0 most significant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code {
    symbols: Vec<u8>,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, actual: usize },
    SymbolOutOfRange { position: usize, symbol: u16, colors: u16 },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Code must have exactly {expected} symbols, got {actual}")
            }
            Self::SymbolOutOfRange {
                position,
                symbol,
                colors,
            } => write!(
                f,
                "Symbol {symbol} at position {position} is not below {colors}"
            ),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from symbol values
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - The number of values differs from the code length
    /// - Any value is not below the number of colors
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, GameParams};
    ///
    /// let params = GameParams::new(6, 4).unwrap();
    /// let code = Code::new(&[0, 1, 2, 3], params).unwrap();
    /// assert_eq!(code.to_string(), "0 1 2 3");
    ///
    /// assert!(Code::new(&[0, 1, 2], params).is_err());
    /// assert!(Code::new(&[0, 1, 2, 6], params).is_err());
    /// ```
    pub fn new(values: &[u16], params: GameParams) -> Result<Self, CodeError> {
        if values.len() != params.length() {
            return Err(CodeError::InvalidLength {
                expected: params.length(),
                actual: values.len(),
            });
        }

        let symbols = values
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                if symbol < params.colors() {
                    // colors <= 256, so any symbol below it fits in a byte
                    Ok(symbol as u8)
                } else {
                    Err(CodeError::SymbolOutOfRange {
                        position,
                        symbol,
                        colors: params.colors(),
                    })
                }
            })
            .collect::<Result<Vec<u8>, CodeError>>()?;

        Ok(Self { symbols })
    }

    /// The all-zero code, the smallest numeral and the codebreaker's opening guess
    #[must_use]
    pub fn zero(params: GameParams) -> Self {
        Self {
            symbols: vec![0; params.length()],
        }
    }

    /// Decode the code whose base-K numeral value is `index`
    ///
    /// `index` must be below `params.search_space()`.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, GameParams};
    ///
    /// let params = GameParams::new(6, 4).unwrap();
    /// let code = Code::from_index(6 * 6 + 2, params);
    /// assert_eq!(code.symbols(), &[0, 1, 0, 2]);
    /// assert_eq!(code.index(params), 38);
    /// ```
    #[must_use]
    pub fn from_index(index: u64, params: GameParams) -> Self {
        debug_assert!(index < params.search_space(), "index out of range");

        let base = u64::from(params.colors());
        let mut remainder = index;
        let mut symbols = vec![0u8; params.length()];
        for symbol in symbols.iter_mut().rev() {
            *symbol = (remainder % base) as u8;
            remainder /= base;
        }

        Self { symbols }
    }

    /// Base-K numeral value of this code
    #[must_use]
    pub fn index(&self, params: GameParams) -> u64 {
        let base = u64::from(params.colors());
        self.symbols
            .iter()
            .fold(0, |acc, &symbol| acc * base + u64::from(symbol))
    }

    /// Get the symbols as a slice
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    #[inline]
    pub(crate) fn symbols_mut(&mut self) -> &mut [u8] {
        &mut self.symbols
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if position >= length
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> u8 {
        self.symbols[position]
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for validated codes; present for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
