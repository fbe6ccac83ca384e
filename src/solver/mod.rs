//! Codebreaking algorithm
//!
//! Guesses come from an ascending enumeration of the code space, pruned by
//! consistency with every feedback received so far.

mod consistency;
mod engine;
mod enumerator;

pub use consistency::is_consistent;
pub use engine::{Selection, SolveError, count_candidates, find_next, next_guess};
pub use enumerator::{Candidates, Exhausted, successor};
