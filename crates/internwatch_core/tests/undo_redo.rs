mod common;

use common::{applicant, typical_book};
use internwatch_core::{ApplicantBook, HistoryError, Snapshot, UndoManager};

#[test]
fn undo_restores_the_committed_state() {
    let mut book = typical_book();
    let mut history = UndoManager::new(4);
    let before = Snapshot::capture(&book);

    history.commit(&book);
    book.add(applicant("Zed Zulu")).unwrap();
    history.undo(&mut book).unwrap();

    assert_eq!(book.applicants(), before.applicants());
}

#[test]
fn redo_after_undo_returns_to_the_mutated_state() {
    let mut book = typical_book();
    let mut history = UndoManager::new(4);

    history.commit(&book);
    book.add(applicant("Zed Zulu")).unwrap();
    let after = book.clone();

    history.undo(&mut book).unwrap();
    history.redo(&mut book).unwrap();
    assert_eq!(book, after);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn commit_after_undo_discards_redo_history() {
    let mut book = ApplicantBook::new();
    let mut history = UndoManager::new(4);

    history.commit(&book);
    book.add(applicant("First")).unwrap();
    history.undo(&mut book).unwrap();
    assert!(history.can_redo());

    history.commit(&book);
    book.add(applicant("Second")).unwrap();

    assert_eq!(history.redo(&mut book), Err(HistoryError::NothingToRedo));
    assert_eq!(book.len(), 1);
}

#[test]
fn empty_history_refuses_undo_and_redo() {
    let mut book = typical_book();
    let mut history = UndoManager::default();

    assert_eq!(history.undo(&mut book), Err(HistoryError::NothingToUndo));
    assert_eq!(history.redo(&mut book), Err(HistoryError::NothingToRedo));
    assert_eq!(book, typical_book());
}

#[test]
fn capacity_drops_the_oldest_snapshot() {
    let mut book = ApplicantBook::new();
    let mut history = UndoManager::new(2);

    for name in ["One", "Two", "Three"] {
        history.commit(&book);
        book.add(applicant(name)).unwrap();
    }
    assert_eq!(history.undo_depth(), 2);

    history.undo(&mut book).unwrap();
    history.undo(&mut book).unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(history.undo(&mut book), Err(HistoryError::NothingToUndo));
}

#[test]
fn repeated_undo_walks_back_through_every_commit() {
    let mut book = ApplicantBook::new();
    let mut history = UndoManager::new(8);
    let mut states = Vec::new();

    for name in ["One", "Two", "Three"] {
        states.push(book.clone());
        history.commit(&book);
        book.add(applicant(name)).unwrap();
    }

    while let Some(expected) = states.pop() {
        history.undo(&mut book).unwrap();
        assert_eq!(book, expected);
    }
    assert_eq!(history.redo_depth(), 3);
}
