//! Line protocol
//!
//! Both roles talk one message per line. Guess lines carry `n` symbols
//! separated by single spaces, feedback lines carry `b w`. Numbers are small
//! decimal tokens: `0`, or up to three digits without a leading zero.

use crate::core::{Code, CodeError, Feedback, GameParams};
use std::fmt;

/// Largest value a small-number token can spell
pub const MAX_SMALL_NUMBER: u16 = 999;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    EmptyLine,
    /// Tab, carriage return, vertical tab or form feed inside the line
    ForbiddenWhitespace,
    /// The line starts or ends with a space
    UnexpectedSpace,
    TokenCount { expected: usize, actual: usize },
    InvalidNumber(String),
    SymbolOutOfRange { position: usize, symbol: u16, colors: u16 },
    /// `black + white` exceeds the code length
    FeedbackOutOfRange { black: usize, white: usize, length: usize },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "empty line"),
            Self::ForbiddenWhitespace => write!(f, "line contains forbidden whitespace"),
            Self::UnexpectedSpace => write!(f, "line starts or ends with a space"),
            Self::TokenCount { expected, actual } => {
                write!(f, "expected {expected} numbers, got {actual}")
            }
            Self::InvalidNumber(token) => write!(f, "invalid number '{token}'"),
            Self::SymbolOutOfRange {
                position,
                symbol,
                colors,
            } => write!(
                f,
                "symbol {symbol} at position {position} is not below {colors}"
            ),
            Self::FeedbackOutOfRange {
                black,
                white,
                length,
            } => write!(
                f,
                "feedback {black} {white} exceeds code length {length}"
            ),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<CodeError> for ProtocolError {
    fn from(err: CodeError) -> Self {
        match err {
            CodeError::InvalidLength { expected, actual } => Self::TokenCount { expected, actual },
            CodeError::SymbolOutOfRange {
                position,
                symbol,
                colors,
            } => Self::SymbolOutOfRange {
                position,
                symbol,
                colors,
            },
        }
    }
}

/// Parse a small-number token
///
/// # Errors
/// Returns `ProtocolError::InvalidNumber` unless the token is `0` or one to
/// three digits without a leading zero.
///
/// # Examples
/// ```
/// use mastermind::protocol::parse_small_number;
///
/// assert_eq!(parse_small_number("0"), Ok(0));
/// assert_eq!(parse_small_number("255"), Ok(255));
/// assert!(parse_small_number("007").is_err());
/// assert!(parse_small_number("1000").is_err());
/// ```
pub fn parse_small_number(token: &str) -> Result<u16, ProtocolError> {
    let bytes = token.as_bytes();
    let well_formed = match bytes {
        [b'0'] => true,
        [b'1'..=b'9', rest @ ..] => rest.len() <= 2 && rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };

    if !well_formed {
        return Err(ProtocolError::InvalidNumber(token.to_string()));
    }

    token
        .parse()
        .map_err(|_| ProtocolError::InvalidNumber(token.to_string()))
}

/// Strip the line terminator: one `\n`, then one `\r` left over from CRLF
#[must_use]
pub fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Apply the framing rules shared by every message and split it into tokens
fn tokenize(line: &str) -> Result<Vec<&str>, ProtocolError> {
    let line = trim_line_ending(line);

    if line.is_empty() {
        return Err(ProtocolError::EmptyLine);
    }
    if line.contains(['\t', '\r', '\x0b', '\x0c']) {
        return Err(ProtocolError::ForbiddenWhitespace);
    }
    if line.starts_with(' ') || line.ends_with(' ') {
        return Err(ProtocolError::UnexpectedSpace);
    }

    // A doubled space yields an empty token, which fails number parsing
    Ok(line.split(' ').collect())
}

/// Parse a guess line for the codemaker
///
/// # Errors
/// Returns a `ProtocolError` if the framing is wrong, the line does not hold
/// exactly `n` small numbers, or a symbol is not below `K`.
///
/// # Examples
/// ```
/// use mastermind::core::GameParams;
/// use mastermind::protocol::parse_guess_line;
///
/// let params = GameParams::new(6, 4).unwrap();
/// let guess = parse_guess_line("0 1 2 5\r\n", params).unwrap();
/// assert_eq!(guess.symbols(), &[0, 1, 2, 5]);
///
/// assert!(parse_guess_line("0 1 2 6", params).is_err());
/// assert!(parse_guess_line("0 1  2 5", params).is_err());
/// ```
pub fn parse_guess_line(line: &str, params: GameParams) -> Result<Code, ProtocolError> {
    let tokens = tokenize(line)?;
    if tokens.len() != params.length() {
        return Err(ProtocolError::TokenCount {
            expected: params.length(),
            actual: tokens.len(),
        });
    }

    let values = tokens
        .into_iter()
        .map(parse_small_number)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Code::new(&values, params)?)
}

/// Parse a feedback line for the codebreaker
///
/// # Errors
/// Returns a `ProtocolError` if the framing is wrong, the line does not hold
/// exactly two small numbers, or `b + w` exceeds `length`.
///
/// # Examples
/// ```
/// use mastermind::core::Feedback;
/// use mastermind::protocol::parse_feedback_line;
///
/// assert_eq!(parse_feedback_line("1 2\n", 4), Ok(Feedback::new(1, 2)));
/// assert!(parse_feedback_line("3 2", 4).is_err());
/// ```
pub fn parse_feedback_line(line: &str, length: usize) -> Result<Feedback, ProtocolError> {
    let tokens = tokenize(line)?;
    let [black, white] = tokens[..] else {
        return Err(ProtocolError::TokenCount {
            expected: 2,
            actual: tokens.len(),
        });
    };

    let black = usize::from(parse_small_number(black)?);
    let white = usize::from(parse_small_number(white)?);

    if black + white > length {
        return Err(ProtocolError::FeedbackOutOfRange {
            black,
            white,
            length,
        });
    }

    Ok(Feedback::new(black, white))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GameParams {
        GameParams::new(6, 4).unwrap()
    }

    #[test]
    fn small_numbers() {
        for (token, value) in [("0", 0), ("7", 7), ("10", 10), ("999", 999)] {
            assert_eq!(parse_small_number(token), Ok(value));
        }
        for token in ["", "00", "01", "1000", "-1", "+1", "1a", " 1", "١"] {
            assert!(parse_small_number(token).is_err(), "{token:?} accepted");
        }
    }

    #[test]
    fn line_endings() {
        assert_eq!(trim_line_ending("1 2\n"), "1 2");
        assert_eq!(trim_line_ending("1 2\r\n"), "1 2");
        assert_eq!(trim_line_ending("1 2\r"), "1 2");
        // Only one carriage return is removed
        assert_eq!(trim_line_ending("1 2\r\r\n"), "1 2\r");
        assert_eq!(trim_line_ending("1 2"), "1 2");
    }

    #[test]
    fn guess_line_accepts_valid_input() {
        let code = parse_guess_line("5 0 3 3\r\n", params()).unwrap();
        assert_eq!(code.symbols(), &[5, 0, 3, 3]);
    }

    #[test]
    fn guess_line_framing_errors() {
        let p = params();
        assert_eq!(parse_guess_line("\n", p), Err(ProtocolError::EmptyLine));
        assert_eq!(parse_guess_line("\r\n", p), Err(ProtocolError::EmptyLine));
        assert_eq!(
            parse_guess_line("0 1\t2 3", p),
            Err(ProtocolError::ForbiddenWhitespace)
        );
        assert_eq!(
            parse_guess_line("0 1 2 3\r\r\n", p),
            Err(ProtocolError::ForbiddenWhitespace)
        );
        assert_eq!(
            parse_guess_line(" 0 1 2 3", p),
            Err(ProtocolError::UnexpectedSpace)
        );
        assert_eq!(
            parse_guess_line("0 1 2 3 ", p),
            Err(ProtocolError::UnexpectedSpace)
        );
        assert_eq!(
            parse_guess_line("0 1  2", p),
            Err(ProtocolError::InvalidNumber(String::new()))
        );
    }

    #[test]
    fn guess_line_content_errors() {
        let p = params();
        assert_eq!(
            parse_guess_line("0 1 2", p),
            Err(ProtocolError::TokenCount {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            parse_guess_line("0 1 2 3 4", p),
            Err(ProtocolError::TokenCount {
                expected: 4,
                actual: 5
            })
        );
        assert_eq!(
            parse_guess_line("0 1 02 3", p),
            Err(ProtocolError::InvalidNumber("02".to_string()))
        );
        assert_eq!(
            parse_guess_line("0 1 2 6", p),
            Err(ProtocolError::SymbolOutOfRange {
                position: 3,
                symbol: 6,
                colors: 6
            })
        );
    }

    #[test]
    fn feedback_line() {
        assert_eq!(parse_feedback_line("0 0", 4), Ok(Feedback::new(0, 0)));
        assert_eq!(parse_feedback_line("4 0\r\n", 4), Ok(Feedback::new(4, 0)));
        assert_eq!(parse_feedback_line("0 4", 4), Ok(Feedback::new(0, 4)));
        // Not reachable from any pair of codes, but within bounds
        assert_eq!(parse_feedback_line("3 1", 4), Ok(Feedback::new(3, 1)));
    }

    #[test]
    fn feedback_line_errors() {
        assert_eq!(
            parse_feedback_line("2 3", 4),
            Err(ProtocolError::FeedbackOutOfRange {
                black: 2,
                white: 3,
                length: 4
            })
        );
        assert_eq!(
            parse_feedback_line("1", 4),
            Err(ProtocolError::TokenCount {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(
            parse_feedback_line("1 0 0", 4),
            Err(ProtocolError::TokenCount {
                expected: 2,
                actual: 3
            })
        );
        assert!(parse_feedback_line("1  0", 4).is_err());
        assert!(parse_feedback_line("1 x", 4).is_err());
        assert!(parse_feedback_line("1\x0c0", 4).is_err());
    }
}
