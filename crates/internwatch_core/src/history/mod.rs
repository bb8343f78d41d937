//! Undo/redo history over the applicant book.
//!
//! # Responsibility
//! - Keep bounded snapshot histories for undo and redo.
//!
//! # Invariants
//! - History memory is capped by a fixed snapshot count per direction.

pub mod undo;
