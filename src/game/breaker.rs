//! Codebreaker session

use super::GameError;
use crate::core::{Code, Feedback, GameParams, History};
use crate::solver::find_next;

/// Lifecycle of a codebreaker session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    /// A guess is out and the session waits for its feedback
    AwaitingFeedback,
    /// The last guess was the secret
    Done,
    /// The feedback received so far admits no code
    Contradiction,
}

/// Outcome of feeding one feedback into the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakerStep {
    /// The next guess to submit
    Guess(Code),
    /// The previous guess matched; no further guess follows
    Solved,
}

/// The codebreaker role
///
/// Construction selects the all-zero opening guess. Each call to
/// [`Codebreaker::receive`] records the feedback for the outstanding guess and
/// selects the next one, which is always greater than every earlier guess and
/// consistent with every feedback so far.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Feedback, GameParams};
/// use mastermind::game::{BreakerStep, Codebreaker};
///
/// let params = GameParams::new(6, 4).unwrap();
/// let mut breaker = Codebreaker::new(params);
/// assert_eq!(breaker.current_guess(), Some(&Code::zero(params)));
///
/// let step = breaker.receive(Feedback::new(1, 0)).unwrap();
/// assert_eq!(step, BreakerStep::Guess(Code::new(&[0, 1, 1, 1], params).unwrap()));
/// ```
#[derive(Debug, Clone)]
pub struct Codebreaker {
    params: GameParams,
    history: History,
    guess: Code,
    state: BreakerState,
    last_examined: u64,
}

impl Codebreaker {
    #[must_use]
    pub fn new(params: GameParams) -> Self {
        log::debug!("codebreaker started for {params}");
        Self {
            params,
            history: History::new(),
            guess: Code::zero(params),
            state: BreakerState::AwaitingFeedback,
            last_examined: 0,
        }
    }

    /// Rebuild a session by feeding `feedbacks` into a fresh one
    ///
    /// Guess selection is deterministic, so the rebuilt session holds the same
    /// guesses and history as any session that received the same feedback.
    ///
    /// # Errors
    /// Returns the first `GameError` a step produces.
    pub fn replay<I>(params: GameParams, feedbacks: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = Feedback>,
    {
        let mut breaker = Self::new(params);
        for feedback in feedbacks {
            breaker.receive(feedback)?;
        }
        Ok(breaker)
    }

    /// Record the feedback for the outstanding guess and pick the next guess
    ///
    /// # Errors
    /// - `GameError::Contradiction` if no code is consistent with the feedback
    ///   received so far; the session moves to `BreakerState::Contradiction`
    /// - `GameError::GameOver` if the session has already finished
    pub fn receive(&mut self, feedback: Feedback) -> Result<BreakerStep, GameError> {
        match self.state {
            BreakerState::AwaitingFeedback => {}
            BreakerState::Done | BreakerState::Contradiction => return Err(GameError::GameOver),
        }

        if feedback.is_solved(self.params.length()) {
            log::debug!(
                "solved with {} after {} guesses",
                self.guess,
                self.guess_count()
            );
            self.state = BreakerState::Done;
            return Ok(BreakerStep::Solved);
        }

        self.history.push(self.guess.clone(), feedback);

        match find_next(&self.history, self.params) {
            Ok(selection) => {
                log::debug!(
                    "guess #{} is {} ({} candidates examined)",
                    self.history.len() + 1,
                    selection.guess,
                    selection.examined
                );
                self.guess = selection.guess;
                self.last_examined = selection.examined;
                Ok(BreakerStep::Guess(self.guess.clone()))
            }
            Err(err) => {
                self.state = BreakerState::Contradiction;
                Err(err.into())
            }
        }
    }

    /// The guess waiting for feedback, if the session is still running
    #[must_use]
    pub fn current_guess(&self) -> Option<&Code> {
        match self.state {
            BreakerState::AwaitingFeedback => Some(&self.guess),
            BreakerState::Done | BreakerState::Contradiction => None,
        }
    }

    /// The winning guess once the session is done
    #[must_use]
    pub fn solution(&self) -> Option<&Code> {
        match self.state {
            BreakerState::Done => Some(&self.guess),
            BreakerState::AwaitingFeedback | BreakerState::Contradiction => None,
        }
    }

    /// Number of guesses emitted so far, including the outstanding or winning one
    #[must_use]
    pub fn guess_count(&self) -> usize {
        match self.state {
            BreakerState::AwaitingFeedback | BreakerState::Done => self.history.len() + 1,
            BreakerState::Contradiction => self.history.len(),
        }
    }

    /// Candidates enumerated to select the current guess
    #[must_use]
    pub const fn last_examined(&self) -> u64 {
        self.last_examined
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> BreakerState {
        self.state
    }

    #[must_use]
    pub const fn params(&self) -> GameParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::is_consistent;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn params(colors: u16, length: usize) -> GameParams {
        GameParams::new(colors, length).unwrap()
    }

    /// Play against an honest oracle, checking the invariants at every step
    fn play_against(secret: &Code, p: GameParams) -> Codebreaker {
        let mut breaker = Codebreaker::new(p);
        let mut previous: Option<Code> = None;

        while let Some(guess) = breaker.current_guess().cloned() {
            if let Some(prev) = &previous {
                assert!(guess > *prev, "guesses must ascend");
            }
            assert!(is_consistent(&guess, breaker.history()));
            assert!(breaker.guess_count() as u64 <= p.search_space());

            let feedback = Feedback::calculate(secret, &guess);
            breaker.receive(feedback).unwrap();
            previous = Some(guess);
        }

        breaker
    }

    #[test]
    fn opening_guess_is_zero() {
        let p = params(6, 4);
        let breaker = Codebreaker::new(p);
        assert_eq!(breaker.current_guess(), Some(&Code::zero(p)));
        assert_eq!(breaker.state(), BreakerState::AwaitingFeedback);
        assert_eq!(breaker.guess_count(), 1);
        assert!(breaker.history().is_empty());
    }

    #[test]
    fn solved_feedback_finishes_session() {
        let p = params(6, 4);
        let mut breaker = Codebreaker::new(p);

        assert_eq!(
            breaker.receive(Feedback::solved(4)),
            Ok(BreakerStep::Solved)
        );
        assert_eq!(breaker.state(), BreakerState::Done);
        assert_eq!(breaker.current_guess(), None);
        assert_eq!(breaker.solution(), Some(&Code::zero(p)));
        assert!(breaker.history().is_empty());
        assert_eq!(breaker.guess_count(), 1);

        // No further guesses once done
        assert_eq!(
            breaker.receive(Feedback::new(0, 0)),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn contradiction_is_fatal() {
        let p = params(2, 2);
        let mut breaker = Codebreaker::new(p);

        // 00 scores (1, 0): the secret is 01 or 10
        let step = breaker.receive(Feedback::new(1, 0)).unwrap();
        assert_eq!(step, BreakerStep::Guess(Code::new(&[0, 1], p).unwrap()));

        // 01 scoring (0, 0) rules out both remaining candidates
        assert_eq!(
            breaker.receive(Feedback::new(0, 0)),
            Err(GameError::Contradiction { records: 2 })
        );
        assert_eq!(breaker.state(), BreakerState::Contradiction);
        assert_eq!(breaker.current_guess(), None);
        assert_eq!(breaker.guess_count(), 2);
        assert_eq!(
            breaker.receive(Feedback::new(0, 0)),
            Err(GameError::GameOver)
        );
    }

    #[test]
    fn converges_for_every_secret_in_small_space() {
        let p = params(3, 3);
        for index in 0..p.search_space() {
            let secret = Code::from_index(index, p);
            let breaker = play_against(&secret, p);
            assert_eq!(breaker.state(), BreakerState::Done);
            assert_eq!(breaker.solution(), Some(&secret));
        }
    }

    #[test]
    fn converges_for_random_secrets() {
        let mut rng = StdRng::seed_from_u64(2024);
        for (colors, length) in [(6, 4), (8, 5), (2, 10)] {
            let p = params(colors, length);
            for _ in 0..5 {
                let secret = Code::from_index(rng.random_range(0..p.search_space()), p);
                let breaker = play_against(&secret, p);
                assert_eq!(breaker.solution(), Some(&secret));
            }
        }
    }

    #[test]
    fn identical_feedback_gives_identical_guesses() {
        let p = params(6, 4);
        let secret = Code::new(&[5, 2, 2, 0], p).unwrap();
        let first = play_against(&secret, p);
        let second = play_against(&secret, p);
        assert_eq!(first.history(), second.history());
    }

    #[test]
    fn replay_reproduces_session() {
        let p = params(6, 4);
        let secret = Code::new(&[1, 4, 0, 4], p).unwrap();
        let mut breaker = Codebreaker::new(p);
        for _ in 0..3 {
            let guess = breaker.current_guess().cloned().unwrap();
            breaker.receive(Feedback::calculate(&secret, &guess)).unwrap();
        }

        let feedbacks: Vec<Feedback> = breaker.history().iter().map(|r| r.feedback()).collect();
        let replayed = Codebreaker::replay(p, feedbacks).unwrap();
        assert_eq!(replayed.history(), breaker.history());
        assert_eq!(replayed.current_guess(), breaker.current_guess());
    }

    #[test]
    fn replay_surfaces_contradiction() {
        let p = params(2, 2);
        let result = Codebreaker::replay(p, [Feedback::new(1, 0), Feedback::new(0, 0)]);
        assert!(matches!(result, Err(GameError::Contradiction { .. })));
    }
}
