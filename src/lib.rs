//! Mastermind
//!
//! Both roles of the code-breaking game Mastermind for `K` colors and codes of
//! length `N`. The codebreaker plays the smallest code, in base-K order after
//! its previous guess, that agrees with all feedback so far.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Code, Feedback, GameParams};
//! use mastermind::game::{BreakerStep, Codebreaker, Codemaker};
//!
//! let params = GameParams::new(6, 4).unwrap();
//! let mut maker = Codemaker::new(Code::new(&[3, 1, 4, 1], params).unwrap());
//! let mut breaker = Codebreaker::new(params);
//!
//! while let Some(guess) = breaker.current_guess().cloned() {
//!     let feedback = maker.respond(&guess).unwrap();
//!     if breaker.receive(feedback).unwrap() == BreakerStep::Solved {
//!         break;
//!     }
//! }
//! assert_eq!(breaker.solution().unwrap().symbols(), &[3, 1, 4, 1]);
//! ```

// Core domain types
pub mod core;

// Guess selection
pub mod solver;

// Codemaker and codebreaker sessions
pub mod game;

// Line protocol parsing
pub mod protocol;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
