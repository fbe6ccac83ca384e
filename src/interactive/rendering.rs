//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::feedback_pegs;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎯 MASTERMIND - Codebreaker ({})", app.params()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Current guess
            Constraint::Percentage(40), // Candidates
            Constraint::Min(5),         // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = if let Some(guess) = app.shown_guess() {
        let label = if app.input_mode == InputMode::WinCelebration {
            "Secret:    "
        } else {
            "Guess:     "
        };
        vec![
            Line::from(vec![
                Span::raw(label),
                Span::styled(
                    guess.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Examined:  {} codes", app.breaker.last_examined())),
            Line::from(format!("Guess #:   {}", app.breaker.guess_count())),
        ]
    } else {
        vec![Line::from(Span::styled(
            "No code fits the feedback",
            Style::default().fg(Color::Red),
        ))]
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let content = if app.candidates == 0 {
        vec![Line::from("No candidates remain")]
    } else if app.preview.is_empty() {
        vec![
            Line::from(format!("{} candidates remaining", app.candidates)),
            Line::from(format!(
                "Information needed: {:.2} bits",
                (app.candidates as f64).log2()
            )),
        ]
    } else {
        let mut lines = vec![Line::from("Remaining:")];
        lines.extend(app.preview.iter().map(|code| {
            Line::from(vec![
                Span::raw("  • "),
                Span::styled(code.to_string(), Style::default().fg(Color::Green)),
            ])
        }));
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let length = app.params().length();
    let visible = usize::from(area.height.saturating_sub(2));

    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .take(visible)
        .map(|(i, entry)| {
            ListItem::new(format!(
                "{:3}: {}  {}  {}  → {}",
                i + 1,
                entry.guess,
                feedback_pegs(entry.feedback, length),
                entry.feedback,
                entry.candidates_after
            ))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let ratio = app.search_progress().clamp(0.0, 1.0);
    let space = app.params().search_space();

    let label = app.shown_guess().map_or_else(
        || format!("{space}/{space} codes"),
        |guess| format!("{}/{space} codes", guess.index(app.params()) + 1),
    );

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Enumeration ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 SOLVED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Contradiction => (
            " Contradictory feedback | 'u' to undo, 'n' for new game ",
            "",
            Color::Red,
        ),
        InputMode::Feedback => (
            " Enter Feedback: black white (e.g. '1 2') ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Won: {} | Avg: {:.2}",
        app.stats.games_won,
        app.stats.average_guesses()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let best_text = app
        .stats
        .best
        .map_or_else(|| "Best: -".to_string(), |best| format!("Best: {best}"));
    f.render_widget(
        Paragraph::new(best_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::Feedback => "q: Quit | n: New | u: Undo | Enter: Submit",
        InputMode::Contradiction => "q: Quit | n: New | u: Undo",
        InputMode::WinCelebration => "q: Quit | n: New",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameParams;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_opening_guess() {
        let app = App::new(GameParams::new(6, 4).unwrap());
        let screen = rendered(&app);
        assert!(screen.contains("0 0 0 0"));
        assert!(screen.contains("1296 candidates remaining"));
        assert!(screen.contains("1/1296 codes"));
    }

    #[test]
    fn renders_contradiction() {
        let mut app = App::new(GameParams::new(2, 2).unwrap());
        app.handle_feedback("1 0");
        app.handle_feedback("0 0");
        let screen = rendered(&app);
        assert!(screen.contains("No code fits the feedback"));
        assert!(screen.contains("No candidates remain"));
    }
}
