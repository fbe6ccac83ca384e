//! Codemaker session

use super::GameError;
use crate::core::{Code, Feedback};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MakerState {
    AwaitingGuess,
    /// The secret has been guessed
    Done,
}

/// The codemaker role: holds a secret and scores guesses against it
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Feedback, GameParams};
/// use mastermind::game::{Codemaker, MakerState};
///
/// let params = GameParams::new(6, 4).unwrap();
/// let secret = Code::new(&[1, 2, 3, 4], params).unwrap();
/// let mut maker = Codemaker::new(secret.clone());
///
/// let guess = Code::new(&[4, 3, 2, 1], params).unwrap();
/// assert_eq!(maker.respond(&guess).unwrap(), Feedback::new(0, 4));
/// assert_eq!(maker.respond(&secret).unwrap(), Feedback::new(4, 0));
/// assert_eq!(maker.state(), MakerState::Done);
/// ```
#[derive(Debug, Clone)]
pub struct Codemaker {
    secret: Code,
    state: MakerState,
    guesses: usize,
}

impl Codemaker {
    #[must_use]
    pub fn new(secret: Code) -> Self {
        log::debug!("codemaker holds a secret of length {}", secret.len());
        Self {
            secret,
            state: MakerState::AwaitingGuess,
            guesses: 0,
        }
    }

    /// Score `guess` against the secret
    ///
    /// A guess equal to the secret finishes the session.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the secret has been guessed.
    pub fn respond(&mut self, guess: &Code) -> Result<Feedback, GameError> {
        if self.state == MakerState::Done {
            return Err(GameError::GameOver);
        }

        self.guesses += 1;
        let feedback = Feedback::calculate(&self.secret, guess);
        log::trace!("guess #{} {guess} scored {feedback}", self.guesses);

        if feedback.is_solved(self.secret.len()) {
            log::debug!("secret guessed after {} guesses", self.guesses);
            self.state = MakerState::Done;
        }

        Ok(feedback)
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[must_use]
    pub const fn state(&self) -> MakerState {
        self.state
    }

    /// Number of guesses scored so far
    #[must_use]
    pub const fn guesses(&self) -> usize {
        self.guesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameParams;

    fn code(values: &[u16]) -> Code {
        Code::new(values, GameParams::new(6, 4).unwrap()).unwrap()
    }

    #[test]
    fn scores_against_secret() {
        let mut maker = Codemaker::new(code(&[1, 2, 3, 4]));

        assert_eq!(maker.respond(&code(&[4, 3, 2, 1])), Ok(Feedback::new(0, 4)));
        assert_eq!(maker.respond(&code(&[1, 2, 4, 3])), Ok(Feedback::new(2, 2)));
        assert_eq!(maker.respond(&code(&[5, 5, 5, 5])), Ok(Feedback::new(0, 0)));
        assert_eq!(maker.state(), MakerState::AwaitingGuess);
        assert_eq!(maker.guesses(), 3);
    }

    #[test]
    fn correct_guess_finishes_session() {
        let secret = code(&[1, 2, 3, 4]);
        let mut maker = Codemaker::new(secret.clone());

        assert_eq!(maker.respond(&secret), Ok(Feedback::new(4, 0)));
        assert_eq!(maker.state(), MakerState::Done);
        assert_eq!(maker.guesses(), 1);
        assert_eq!(maker.secret(), &secret);
    }

    #[test]
    fn no_guesses_after_done() {
        let secret = code(&[0, 0, 5, 5]);
        let mut maker = Codemaker::new(secret.clone());
        maker.respond(&secret).unwrap();

        assert_eq!(maker.respond(&code(&[0, 0, 0, 0])), Err(GameError::GameOver));
        assert_eq!(maker.guesses(), 1);
    }

    #[test]
    fn repeated_symbols_in_secret() {
        let mut maker = Codemaker::new(code(&[0, 0, 1, 1]));
        assert_eq!(maker.respond(&code(&[1, 1, 0, 0])), Ok(Feedback::new(0, 4)));
        assert_eq!(maker.respond(&code(&[0, 1, 2, 2])), Ok(Feedback::new(1, 1)));
    }
}
