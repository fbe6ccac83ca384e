//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{
    App, CANDIDATE_PREVIEW, HistoryEntry, InputMode, Message, MessageStyle, Statistics, run_tui,
};
