//! TUI application state and logic
//!
//! The computer plays codebreaker; the user holds the secret and types the
//! feedback for each guess.

use crate::core::{Code, Feedback, GameParams};
use crate::game::{BreakerState, BreakerStep, Codebreaker, GameError};
use crate::protocol::parse_feedback_line;
use crate::solver::{count_candidates, is_consistent};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Remaining candidates are listed individually up to this many
pub const CANDIDATE_PREVIEW: u64 = 12;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub breaker: Codebreaker,
    pub history: Vec<HistoryEntry>,
    /// Codes consistent with all feedback so far
    pub candidates: u64,
    /// The remaining codes, filled only when there are few of them
    pub preview: Vec<Code>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    /// Feedback contradicts itself; only undo, new game or quit
    Contradiction,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_after: u64,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub total_guesses: usize,
    pub best: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl App {
    #[must_use]
    pub fn new(params: GameParams) -> Self {
        let mut app = Self {
            breaker: Codebreaker::new(params),
            history: Vec::new(),
            candidates: params.search_space(),
            preview: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        };
        app.add_message(
            &format!("Think of a secret for {params}. I'll guess it."),
            MessageStyle::Info,
        );
        app.add_message(
            "Enter feedback as 'b w' (black, white) and press Enter",
            MessageStyle::Info,
        );
        app
    }

    #[must_use]
    pub const fn params(&self) -> GameParams {
        self.breaker.params()
    }

    /// The guess shown to the user: outstanding, or winning once solved
    #[must_use]
    pub fn shown_guess(&self) -> Option<&Code> {
        self.breaker
            .current_guess()
            .or_else(|| self.breaker.solution())
    }

    /// Position of the current guess in the enumeration, as a fraction
    #[must_use]
    pub fn search_progress(&self) -> f64 {
        let params = self.params();
        self.shown_guess().map_or(1.0, |guess| {
            (guess.index(params) + 1) as f64 / params.search_space() as f64
        })
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let Some(guess) = self.breaker.current_guess().cloned() else {
            return;
        };

        let feedback = match parse_feedback_line(input, self.params().length()) {
            Ok(feedback) => feedback,
            Err(err) => {
                self.add_message(&format!("Invalid feedback: {err}"), MessageStyle::Error);
                return;
            }
        };
        self.input_buffer.clear();

        match self.breaker.receive(feedback) {
            Ok(BreakerStep::Solved) => {
                let guesses = self.breaker.guess_count();
                self.history.push(HistoryEntry {
                    guess,
                    feedback,
                    candidates_after: 1,
                });
                self.candidates = 1;
                self.preview.clear();

                self.stats.games_won += 1;
                self.stats.total_guesses += guesses;
                self.stats.best = Some(self.stats.best.map_or(guesses, |best| best.min(guesses)));

                self.input_mode = InputMode::WinCelebration;
                self.add_message(
                    &format!("🎉 Solved in {guesses} guesses!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Ok(BreakerStep::Guess(_)) => {
                self.refresh_candidates();
                self.history.push(HistoryEntry {
                    guess,
                    feedback,
                    candidates_after: self.candidates,
                });
                self.add_message(
                    &format!("{} candidates remaining", self.candidates),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                self.history.push(HistoryEntry {
                    guess,
                    feedback,
                    candidates_after: 0,
                });
                self.candidates = 0;
                self.preview.clear();
                self.input_mode = InputMode::Contradiction;
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.add_message("Press 'u' to undo the last feedback.", MessageStyle::Error);
            }
        }
    }

    fn refresh_candidates(&mut self) {
        let params = self.params();
        let history = self.breaker.history();
        self.candidates = count_candidates(history, params);

        self.preview = if self.candidates <= CANDIDATE_PREVIEW {
            (0..params.search_space())
                .map(|index| Code::from_index(index, params))
                .filter(|code| is_consistent(code, history))
                .collect()
        } else {
            Vec::new()
        };
    }

    pub fn new_game(&mut self) {
        let params = self.params();
        self.breaker = Codebreaker::new(params);
        self.history.clear();
        self.candidates = params.search_space();
        self.preview.clear();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
    }

    /// Take back the last feedback and rebuild the session without it
    pub fn undo_last(&mut self) {
        if self.breaker.state() == BreakerState::Done || self.history.pop().is_none() {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        }

        let feedbacks = self.history.iter().map(|entry| entry.feedback);
        match Codebreaker::replay(self.params(), feedbacks) {
            Ok(breaker) => {
                self.breaker = breaker;
                self.input_mode = InputMode::Feedback;
                self.refresh_candidates();
                self.add_message("Undone!", MessageStyle::Info);
            }
            Err(err) => self.replay_failed(err),
        }
    }

    fn replay_failed(&mut self, err: GameError) {
        log::warn!("replay after undo failed: {err}");
        self.new_game();
        self.add_message(&format!("Undo failed: {err}"), MessageStyle::Error);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('u') if self.input_mode != InputMode::WinCelebration => {
                self.undo_last();
            }
            _ if self.input_mode != InputMode::Feedback => {}
            KeyCode::Char(c) if c.is_ascii_digit() || c == ' ' => self.input_buffer.push(c),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                let input = self.input_buffer.clone();
                self.handle_feedback(&input);
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; some platforms also report releases
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }
    }

    Ok(())
}
