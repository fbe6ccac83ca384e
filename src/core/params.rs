//! Game dimensions
//!
//! A game is described by its alphabet size `K` (number of colours) and its
//! code length `N`. Both are validated once, up front, so the rest of the crate
//! can rely on them.

use std::fmt;

/// Smallest supported number of colours
pub const MIN_COLORS: u16 = 2;
/// Largest supported number of colours
pub const MAX_COLORS: u16 = 256;
/// Shortest supported code
pub const MIN_LENGTH: usize = 2;
/// Longest supported code
pub const MAX_LENGTH: usize = 10;
/// Upper bound on `K^N`, the number of codes the codebreaker may enumerate (2^24)
pub const MAX_SEARCH_SPACE: u64 = 1 << 24;

/// Validated `(K, N)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameParams {
    colors: u16,
    length: usize,
}

/// Error type for unsupported game dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    ColorsOutOfRange(u16),
    LengthOutOfRange(usize),
    SearchSpaceTooLarge { colors: u16, length: usize },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColorsOutOfRange(colors) => write!(
                f,
                "number of colors must be in [{MIN_COLORS}, {MAX_COLORS}], got {colors}"
            ),
            Self::LengthOutOfRange(length) => write!(
                f,
                "code length must be in [{MIN_LENGTH}, {MAX_LENGTH}], got {length}"
            ),
            Self::SearchSpaceTooLarge { colors, length } => write!(
                f,
                "{colors}^{length} codes exceed the limit of {MAX_SEARCH_SPACE}"
            ),
        }
    }
}

impl std::error::Error for ParamsError {}

impl GameParams {
    /// Create validated game dimensions
    ///
    /// # Errors
    /// Returns `ParamsError` if:
    /// - `colors` is outside `[2, 256]`
    /// - `length` is outside `[2, 10]`
    /// - `colors^length` exceeds 2^24
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::GameParams;
    ///
    /// let params = GameParams::new(6, 4).unwrap();
    /// assert_eq!(params.search_space(), 1296);
    ///
    /// assert!(GameParams::new(1, 4).is_err());
    /// assert!(GameParams::new(256, 4).is_err()); // 2^32 codes
    /// ```
    pub fn new(colors: u16, length: usize) -> Result<Self, ParamsError> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&colors) {
            return Err(ParamsError::ColorsOutOfRange(colors));
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(ParamsError::LengthOutOfRange(length));
        }

        // Multiply step by step so the check stops as soon as the bound is crossed
        let mut space: u64 = 1;
        for _ in 0..length {
            space *= u64::from(colors);
            if space > MAX_SEARCH_SPACE {
                return Err(ParamsError::SearchSpaceTooLarge { colors, length });
            }
        }

        Ok(Self { colors, length })
    }

    /// Number of distinct symbol values (`K`)
    #[inline]
    #[must_use]
    pub const fn colors(self) -> u16 {
        self.colors
    }

    /// Number of positions per code (`N`)
    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// Largest symbol value (`K - 1`)
    #[inline]
    #[must_use]
    pub const fn max_symbol(self) -> u8 {
        // colors <= 256, so colors - 1 always fits
        (self.colors - 1) as u8
    }

    /// Total number of codes (`K^N`)
    #[must_use]
    pub fn search_space(self) -> u64 {
        u64::from(self.colors).pow(self.length as u32)
    }
}

impl fmt::Display for GameParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} colors × {} positions", self.colors, self.length)
    }
}
