//! Snapshot-based undo/redo history.
//!
//! # Responsibility
//! - Capture full copies of the applicant book at commit points.
//! - Move the book backwards and forwards through those copies.
//!
//! # Invariants
//! - Both histories hold at most `capacity` snapshots; the oldest is evicted first.
//! - `commit` always empties the redo history (linear history).
//! - A failed `undo`/`redo` leaves the book and both histories untouched.

use crate::model::applicant::Applicant;
use crate::repo::applicant_book::ApplicantBook;
use log::debug;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default number of snapshots kept per direction.
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Returned when there is nothing to step back or forward to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    NothingToUndo,
    NothingToRedo,
}

impl Display for HistoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToUndo => write!(f, "No more commands to undo!"),
            Self::NothingToRedo => write!(f, "No more commands to redo!"),
        }
    }
}

impl Error for HistoryError {}

/// Immutable copy of the book state at one commit point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    applicants: Vec<Applicant>,
}

impl Snapshot {
    pub fn capture(book: &ApplicantBook) -> Self {
        Self {
            applicants: book.applicants().to_vec(),
        }
    }

    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }
}

/// Bounded two-stack history over [`ApplicantBook`] snapshots.
#[derive(Debug, Clone)]
pub struct UndoManager {
    undo_history: VecDeque<Snapshot>,
    redo_history: VecDeque<Snapshot>,
    capacity: usize,
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl UndoManager {
    /// Creates an empty history. A zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            undo_history: VecDeque::with_capacity(capacity),
            redo_history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_history.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_history.is_empty()
    }

    /// Records the current book state and discards the redo history.
    pub fn commit(&mut self, book: &ApplicantBook) {
        push_bounded(&mut self.undo_history, Snapshot::capture(book), self.capacity);
        self.redo_history.clear();
        debug!(
            "event=history_commit module=history status=ok undo_depth={} redo_depth=0",
            self.undo_history.len()
        );
    }

    /// Restores the most recent committed state.
    ///
    /// The state being left is pushed onto the redo history.
    pub fn undo(&mut self, book: &mut ApplicantBook) -> HistoryResult<()> {
        let previous = self
            .undo_history
            .pop_back()
            .ok_or(HistoryError::NothingToUndo)?;
        push_bounded(&mut self.redo_history, Snapshot::capture(book), self.capacity);
        book.restore(previous.applicants);
        debug!(
            "event=history_undo module=history status=ok undo_depth={} redo_depth={}",
            self.undo_history.len(),
            self.redo_history.len()
        );
        Ok(())
    }

    /// Re-applies the most recently undone state.
    ///
    /// The state being left is pushed back onto the undo history.
    pub fn redo(&mut self, book: &mut ApplicantBook) -> HistoryResult<()> {
        let next = self
            .redo_history
            .pop_back()
            .ok_or(HistoryError::NothingToRedo)?;
        push_bounded(&mut self.undo_history, Snapshot::capture(book), self.capacity);
        book.restore(next.applicants);
        debug!(
            "event=history_redo module=history status=ok undo_depth={} redo_depth={}",
            self.undo_history.len(),
            self.redo_history.len()
        );
        Ok(())
    }
}

fn push_bounded(history: &mut VecDeque<Snapshot>, snapshot: Snapshot, capacity: usize) {
    if history.len() == capacity {
        history.pop_front();
        debug!("event=history_evict module=history status=ok capacity={capacity}");
    }
    history.push_back(snapshot);
}

#[cfg(test)]
mod tests {
    use super::{HistoryError, UndoManager};
    use crate::model::builder::ApplicantBuilder;
    use crate::repo::applicant_book::ApplicantBook;

    fn book_with(names: &[&str]) -> ApplicantBook {
        ApplicantBook::try_from_applicants(
            names
                .iter()
                .map(|name| ApplicantBuilder::new().with_name(name).build().unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn oldest_snapshot_is_evicted_at_capacity() {
        let mut history = UndoManager::new(2);
        let mut book = book_with(&["A"]);
        history.commit(&book);
        book = book_with(&["A", "B"]);
        history.commit(&book);
        book = book_with(&["A", "B", "C"]);
        history.commit(&book);
        assert_eq!(history.undo_depth(), 2);

        history.undo(&mut book).unwrap();
        assert_eq!(book, book_with(&["A", "B", "C"]));
        history.undo(&mut book).unwrap();
        assert_eq!(book, book_with(&["A", "B"]));
        assert_eq!(history.undo(&mut book), Err(HistoryError::NothingToUndo));
    }

    #[test]
    fn zero_capacity_is_raised_to_one() {
        let history = UndoManager::new(0);
        assert_eq!(history.capacity(), 1);
    }

    #[test]
    fn failed_redo_leaves_state_untouched() {
        let mut history = UndoManager::default();
        let mut book = book_with(&["A"]);
        history.commit(&book);

        assert_eq!(history.redo(&mut book), Err(HistoryError::NothingToRedo));
        assert_eq!(book, book_with(&["A"]));
        assert_eq!(history.undo_depth(), 1);
    }
}
