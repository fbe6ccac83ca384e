//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod feedback;
mod history;
mod params;

pub use code::{Code, CodeError};
pub use feedback::Feedback;
pub use history::{GuessRecord, History};
pub use params::{
    GameParams, MAX_COLORS, MAX_LENGTH, MAX_SEARCH_SPACE, MIN_COLORS, MIN_LENGTH, ParamsError,
};
