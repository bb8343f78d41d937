//! Ordered in-memory applicant collection.
//!
//! # Responsibility
//! - Own the canonical ordered list of applicants.
//! - Reject writes that would introduce a second record with the same name.
//!
//! # Invariants
//! - No two stored applicants satisfy `Applicant::is_same_applicant`.
//! - Insertion order is preserved; `replace` keeps the original position.

use crate::model::applicant::Applicant;
use crate::model::fields::Name;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BookResult<T> = Result<T, BookError>;

/// Collection store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Another stored applicant already has this name.
    DuplicateApplicant(Name),
    /// No stored applicant is equal to the referenced one.
    ApplicantNotFound(Name),
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateApplicant(name) => write!(f, "duplicate applicant: {name}"),
            Self::ApplicantNotFound(name) => write!(f, "applicant not found: {name}"),
        }
    }
}

impl Error for BookError {}

/// Duplicate-rejecting, insertion-ordered applicant list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantBook {
    applicants: Vec<Applicant>,
}

impl ApplicantBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from loaded data, failing on the first weak duplicate.
    pub fn try_from_applicants(
        applicants: impl IntoIterator<Item = Applicant>,
    ) -> BookResult<Self> {
        let mut book = Self::new();
        for applicant in applicants {
            book.add(applicant)?;
        }
        Ok(book)
    }

    /// Full ordered state, for persistence and view recomputation.
    pub fn applicants(&self) -> &[Applicant] {
        &self.applicants
    }

    pub fn len(&self) -> usize {
        self.applicants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applicants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Applicant> {
        self.applicants.get(index)
    }

    /// Returns whether a stored applicant has the same name. O(n).
    pub fn contains(&self, applicant: &Applicant) -> bool {
        self.applicants
            .iter()
            .any(|existing| existing.is_same_applicant(applicant))
    }

    /// Appends an applicant.
    ///
    /// # Errors
    /// - `DuplicateApplicant` when a stored applicant has the same name.
    pub fn add(&mut self, applicant: Applicant) -> BookResult<()> {
        if self.contains(&applicant) {
            return Err(BookError::DuplicateApplicant(applicant.name().clone()));
        }
        self.applicants.push(applicant);
        Ok(())
    }

    /// Removes the stored applicant equal to `target` and returns it.
    ///
    /// # Errors
    /// - `ApplicantNotFound` when no stored applicant is fully equal to `target`.
    pub fn remove(&mut self, target: &Applicant) -> BookResult<Applicant> {
        let position = self.position_of(target)?;
        Ok(self.applicants.remove(position))
    }

    /// Swaps `target` for `edited` in place.
    ///
    /// # Errors
    /// - `ApplicantNotFound` when `target` is not stored.
    /// - `DuplicateApplicant` when `edited` has the name of a different stored
    ///   applicant.
    pub fn replace(&mut self, target: &Applicant, edited: Applicant) -> BookResult<()> {
        let position = self.position_of(target)?;
        let clashes = self
            .applicants
            .iter()
            .enumerate()
            .any(|(index, existing)| index != position && existing.is_same_applicant(&edited));
        if clashes {
            return Err(BookError::DuplicateApplicant(edited.name().clone()));
        }
        self.applicants[position] = edited;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.applicants.clear();
    }

    /// Replaces the whole state.
    ///
    /// # Errors
    /// - `DuplicateApplicant` when `applicants` contains weak duplicates; the
    ///   book is left unchanged in that case.
    pub fn reset(&mut self, applicants: Vec<Applicant>) -> BookResult<()> {
        let replacement = Self::try_from_applicants(applicants)?;
        *self = replacement;
        Ok(())
    }

    /// Restores a state captured from a book, skipping duplicate checks.
    pub(crate) fn restore(&mut self, applicants: Vec<Applicant>) {
        self.applicants = applicants;
    }

    fn position_of(&self, target: &Applicant) -> BookResult<usize> {
        self.applicants
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(|| BookError::ApplicantNotFound(target.name().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::{ApplicantBook, BookError};
    use crate::model::builder::ApplicantBuilder;

    #[test]
    fn replace_with_same_name_is_allowed() {
        let amy = ApplicantBuilder::new().build().unwrap();
        let edited = ApplicantBuilder::new().with_grade("3.90").build().unwrap();
        let mut book = ApplicantBook::try_from_applicants(vec![amy.clone()]).unwrap();

        book.replace(&amy, edited.clone()).unwrap();
        assert_eq!(book.applicants(), &[edited]);
    }

    #[test]
    fn reset_rejects_duplicates_and_keeps_state() {
        let amy = ApplicantBuilder::new().build().unwrap();
        let mut book = ApplicantBook::try_from_applicants(vec![amy.clone()]).unwrap();
        let bob = ApplicantBuilder::new().with_name("Bob").build().unwrap();

        let err = book.reset(vec![bob.clone(), bob]).unwrap_err();
        assert!(matches!(err, BookError::DuplicateApplicant(_)));
        assert_eq!(book.applicants(), &[amy]);
    }
}
