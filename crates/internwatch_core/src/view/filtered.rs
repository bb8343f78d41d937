//! Predicate-filtered projection of the applicant book.
//!
//! # Responsibility
//! - Cache the subsequence of applicants matching the active filter.
//! - Notify registered listeners synchronously when that subsequence changes.
//!
//! # Invariants
//! - `visible()` is an order-preserving subsequence of the book it was last
//!   computed from, and every element satisfies the active filter.
//! - The view never mutates the book.
//! - Listeners only fire when the visible sequence actually changed.

use crate::model::applicant::Applicant;
use crate::repo::applicant_book::ApplicantBook;
use std::fmt::{Debug, Formatter};

/// Handle returned by [`FilteredView::subscribe`].
pub type ListenerId = u64;

type Filter = Box<dyn Fn(&Applicant) -> bool>;
type Listener = Box<dyn FnMut(&[Applicant])>;

/// Read-only filtered view over an [`ApplicantBook`].
pub struct FilteredView {
    filter: Filter,
    visible: Vec<Applicant>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: ListenerId,
}

impl Debug for FilteredView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredView")
            .field("visible", &self.visible.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FilteredView {
    /// Creates a view showing every applicant of `book`.
    pub fn new(book: &ApplicantBook) -> Self {
        Self {
            filter: Box::new(|_: &Applicant| true),
            visible: book.applicants().to_vec(),
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    /// Replaces the active filter and recomputes immediately.
    pub fn set_predicate<F>(&mut self, filter: F, book: &ApplicantBook)
    where
        F: Fn(&Applicant) -> bool + 'static,
    {
        self.filter = Box::new(filter);
        self.refresh(book);
    }

    /// Resets the filter to match every applicant.
    pub fn show_all(&mut self, book: &ApplicantBook) {
        self.set_predicate(|_| true, book);
    }

    /// Recomputes the visible sequence after the book changed.
    pub fn refresh(&mut self, book: &ApplicantBook) {
        let recomputed: Vec<Applicant> = book
            .applicants()
            .iter()
            .filter(|applicant| (self.filter)(*applicant))
            .cloned()
            .collect();
        if recomputed == self.visible {
            return;
        }

        self.visible = recomputed;
        for (_, listener) in self.listeners.iter_mut() {
            listener(self.visible.as_slice());
        }
    }

    pub fn visible(&self) -> &[Applicant] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Visible applicant at a zero-based position.
    pub fn get(&self, index: usize) -> Option<&Applicant> {
        self.visible.get(index)
    }

    /// Registers a change listener.
    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: FnMut(&[Applicant]) + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` for unknown ids.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::FilteredView;
    use crate::model::builder::ApplicantBuilder;
    use crate::repo::applicant_book::ApplicantBook;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample_book() -> ApplicantBook {
        ApplicantBook::try_from_applicants(
            ["Alice", "Benson", "Carl"]
                .iter()
                .map(|name| ApplicantBuilder::new().with_name(name).build().unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn listeners_fire_only_on_change() {
        let book = sample_book();
        let mut view = FilteredView::new(&book);
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        view.subscribe(move |visible| sink.borrow_mut().push(visible.len()));

        view.refresh(&book);
        assert!(calls.borrow().is_empty());

        view.set_predicate(|a| a.name().as_str().starts_with('B'), &book);
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let book = sample_book();
        let mut view = FilteredView::new(&book);
        let calls = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&calls);
        let id = view.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(view.unsubscribe(id));
        assert!(!view.unsubscribe(id));
        view.set_predicate(|_| false, &book);
        assert_eq!(*calls.borrow(), 0);
        assert!(view.is_empty());
    }
}
