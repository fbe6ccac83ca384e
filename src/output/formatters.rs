//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Render feedback as key pegs: `●` black, `○` white, `·` for the rest
#[must_use]
pub fn feedback_pegs(feedback: Feedback, length: usize) -> String {
    let empty = length.saturating_sub(feedback.black() + feedback.white());
    let mut pegs = String::with_capacity(length * 3);
    pegs.extend(std::iter::repeat_n('●', feedback.black()));
    pegs.extend(std::iter::repeat_n('○', feedback.white()));
    pegs.extend(std::iter::repeat_n('·', empty));
    pegs
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_for_mixed_feedback() {
        assert_eq!(feedback_pegs(Feedback::new(2, 1), 4), "●●○·");
    }

    #[test]
    fn pegs_for_no_match() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 3), "···");
    }

    #[test]
    fn pegs_for_solved() {
        assert_eq!(feedback_pegs(Feedback::solved(5), 5), "●●●●●");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
