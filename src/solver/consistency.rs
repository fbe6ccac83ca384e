//! Consistency of a candidate with the feedback received so far

use crate::core::{Code, Feedback, History};

/// Check whether `candidate` could be the secret given `history`
///
/// True iff scoring every recorded guess against `candidate` reproduces the
/// feedback that was recorded for it. An empty history accepts everything.
///
/// # Examples
/// ```
/// use mastermind::core::{Code, Feedback, GameParams, History};
/// use mastermind::solver::is_consistent;
///
/// let params = GameParams::new(6, 4).unwrap();
/// let mut history = History::new();
/// history.push(Code::zero(params), Feedback::new(1, 0));
///
/// assert!(is_consistent(&Code::new(&[0, 1, 1, 1], params).unwrap(), &history));
/// assert!(!is_consistent(&Code::new(&[0, 0, 0, 1], params).unwrap(), &history));
/// ```
#[must_use]
pub fn is_consistent(candidate: &Code, history: &History) -> bool {
    history
        .iter()
        .all(|record| Feedback::calculate(candidate, record.guess()) == record.feedback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameParams;

    fn params() -> GameParams {
        GameParams::new(6, 4).unwrap()
    }

    fn code(values: &[u16]) -> Code {
        Code::new(values, params()).unwrap()
    }

    #[test]
    fn empty_history_accepts_everything() {
        let history = History::new();
        assert!(is_consistent(&code(&[5, 4, 3, 2]), &history));
    }

    #[test]
    fn secret_is_always_consistent_with_honest_feedback() {
        let secret = code(&[3, 1, 4, 1]);
        let mut history = History::new();
        for guess in [code(&[0, 0, 0, 0]), code(&[1, 1, 2, 2]), code(&[4, 3, 1, 1])] {
            let feedback = Feedback::calculate(&secret, &guess);
            history.push(guess, feedback);
        }
        assert!(is_consistent(&secret, &history));
    }

    #[test]
    fn previous_guess_is_inconsistent_unless_solved() {
        let guess = code(&[0, 1, 2, 3]);
        let mut history = History::new();
        history.push(guess.clone(), Feedback::new(2, 1));
        assert!(!is_consistent(&guess, &history));
    }

    #[test]
    fn every_record_must_match() {
        let mut history = History::new();
        history.push(code(&[0, 0, 0, 0]), Feedback::new(1, 0));
        history.push(code(&[1, 1, 1, 1]), Feedback::new(0, 0));

        // One zero and no ones
        assert!(is_consistent(&code(&[0, 2, 2, 2]), &history));
        // Satisfies the first record only
        assert!(!is_consistent(&code(&[0, 1, 1, 1]), &history));
    }
}
