//! In-memory model facade.
//!
//! # Responsibility
//! - Own the applicant book, its filtered view and its undo/redo history.
//! - Keep the view and the displayed-applicant context in sync with every
//!   book change.
//!
//! # Invariants
//! - After any book change the view has been recomputed against the new state.
//! - `displayed_applicant()` is either `None` or an applicant still stored in
//!   the book.
//! - The model never commits history on its own; callers decide commit points.

use crate::history::undo::{HistoryResult, UndoManager, DEFAULT_HISTORY_LIMIT};
use crate::model::applicant::Applicant;
use crate::repo::applicant_book::{ApplicantBook, BookResult};
use crate::view::filtered::{FilteredView, ListenerId};
use log::info;

/// Single-threaded model shared by commands and presentation code.
#[derive(Debug)]
pub struct Model {
    book: ApplicantBook,
    view: FilteredView,
    history: UndoManager,
    displayed: Option<Applicant>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(ApplicantBook::new(), DEFAULT_HISTORY_LIMIT)
    }
}

impl Model {
    /// Creates a model over `book` with a bounded history of `history_limit`.
    pub fn new(book: ApplicantBook, history_limit: usize) -> Self {
        let view = FilteredView::new(&book);
        info!(
            "event=model_init module=model status=ok applicants={} history_limit={}",
            book.len(),
            history_limit
        );
        Self {
            book,
            view,
            history: UndoManager::new(history_limit),
            displayed: None,
        }
    }

    // Book

    pub fn book(&self) -> &ApplicantBook {
        &self.book
    }

    /// Replaces the entire book, e.g. after loading from storage.
    ///
    /// History is kept; call [`Model::commit`] first to make this undoable.
    pub fn set_book(&mut self, book: ApplicantBook) {
        self.book = book;
        self.after_book_change();
        info!(
            "event=book_reset module=model status=ok total={}",
            self.book.len()
        );
    }

    pub fn has_applicant(&self, applicant: &Applicant) -> bool {
        self.book.contains(applicant)
    }

    /// Adds an applicant and resets the filter so the new entry is visible.
    pub fn add_applicant(&mut self, applicant: Applicant) -> BookResult<()> {
        self.book.add(applicant)?;
        self.view.show_all(&self.book);
        self.after_book_change();
        info!(
            "event=applicant_add module=model status=ok total={}",
            self.book.len()
        );
        Ok(())
    }

    pub fn delete_applicant(&mut self, target: &Applicant) -> BookResult<Applicant> {
        let removed = self.book.remove(target)?;
        self.after_book_change();
        info!(
            "event=applicant_delete module=model status=ok total={}",
            self.book.len()
        );
        Ok(removed)
    }

    /// Replaces `target` in place and resets the filter in the same refresh,
    /// so listeners observe one change.
    pub fn set_applicant(&mut self, target: &Applicant, edited: Applicant) -> BookResult<()> {
        self.book.replace(target, edited)?;
        self.view.show_all(&self.book);
        self.after_book_change();
        info!(
            "event=applicant_edit module=model status=ok total={}",
            self.book.len()
        );
        Ok(())
    }

    pub fn clear_applicants(&mut self) {
        self.book.clear();
        self.after_book_change();
        info!("event=book_clear module=model status=ok total=0");
    }

    // Filtered view

    /// Currently visible applicants, in book order.
    pub fn filtered_applicants(&self) -> &[Applicant] {
        self.view.visible()
    }

    pub fn update_filter<F>(&mut self, filter: F)
    where
        F: Fn(&Applicant) -> bool + 'static,
    {
        self.view.set_predicate(filter, &self.book);
    }

    pub fn show_all_applicants(&mut self) {
        self.view.show_all(&self.book);
    }

    /// Registers a listener called with the new visible list on every change.
    pub fn subscribe_view<L>(&mut self, listener: L) -> ListenerId
    where
        L: FnMut(&[Applicant]) + 'static,
    {
        self.view.subscribe(listener)
    }

    pub fn unsubscribe_view(&mut self, id: ListenerId) -> bool {
        self.view.unsubscribe(id)
    }

    // Displayed applicant

    /// Applicant last opened through a view command, if still stored.
    pub fn displayed_applicant(&self) -> Option<&Applicant> {
        self.displayed.as_ref()
    }

    pub fn display_applicant(&mut self, applicant: Applicant) {
        self.displayed = Some(applicant);
    }

    // Undo/redo

    /// Checkpoints the current book state for a later undo.
    pub fn commit(&mut self) {
        self.history.commit(&self.book);
    }

    pub fn undo(&mut self) -> HistoryResult<()> {
        self.history.undo(&mut self.book)?;
        self.after_book_change();
        info!(
            "event=history_undo module=model status=ok total={}",
            self.book.len()
        );
        Ok(())
    }

    pub fn redo(&mut self) -> HistoryResult<()> {
        self.history.redo(&mut self.book)?;
        self.after_book_change();
        info!(
            "event=history_redo module=model status=ok total={}",
            self.book.len()
        );
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn after_book_change(&mut self) {
        self.view.refresh(&self.book);
        let still_stored = self
            .displayed
            .as_ref()
            .is_some_and(|shown| self.book.applicants().contains(shown));
        if !still_stored {
            self.displayed = None;
        }
    }
}
