//! Terminal output formatting
//!
//! Coloured reports for the self-play commands. The protocol loops never use
//! this module; their output is plain text.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_solve_result};
