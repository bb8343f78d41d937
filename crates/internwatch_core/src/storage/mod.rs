//! Persistence of the applicant book.
//!
//! # Responsibility
//! - Move the whole book between memory and disk.
//!
//! # Invariants
//! - Storage only uses the book's full-state accessor and bulk constructor;
//!   there is no incremental persistence.

use crate::repo::applicant_book::BookError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod json;

pub use json::JsonApplicantStorage;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// Persisted data breaks a book invariant, e.g. two applicants share a name.
    InvalidBook(BookError),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "storage io error: {err}"),
            Self::Json(err) => write!(f, "invalid applicant data: {err}"),
            Self::InvalidBook(err) => write!(f, "invalid applicant list: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidBook(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<BookError> for StorageError {
    fn from(value: BookError) -> Self {
        Self::InvalidBook(value)
    }
}
