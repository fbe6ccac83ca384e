//! Guess history
//!
//! One record per finished round. The history only grows; there is no way to
//! remove or edit a record once it has been pushed.

use super::{Code, Feedback};
use std::ops::Deref;

/// A guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    guess: Code,
    feedback: Feedback,
}

impl GuessRecord {
    #[must_use]
    pub const fn new(guess: Code, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Code {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Append-only sequence of guess records
///
/// Dereferences to a slice for read access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<GuessRecord>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record for a finished round
    pub fn push(&mut self, guess: Code, feedback: Feedback) {
        self.records.push(GuessRecord::new(guess, feedback));
    }

    /// The most recent record, if any
    #[must_use]
    pub fn latest(&self) -> Option<&GuessRecord> {
        self.records.last()
    }
}

impl Deref for History {
    type Target = [GuessRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl FromIterator<GuessRecord> for History {
    fn from_iter<I: IntoIterator<Item = GuessRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
