//! Executable commands over the model.
//!
//! # Responsibility
//! - Turn fully-validated requests into model mutations and feedback text.
//! - Recover every domain error as a user-facing `CommandError`.
//!
//! # Invariants
//! - A command that fails leaves book, view and history unchanged.
//! - Mutating commands checkpoint history only after validation passes.
//!
//! # See also
//! - `service::model::Model` for the state commands operate on.

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod history;
pub mod list;
pub mod view;

use crate::history::undo::HistoryError;
use crate::model::applicant::Applicant;
use crate::repo::applicant_book::BookError;
use crate::service::model::Model;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::NonZeroUsize;

pub use add::AddCommand;
pub use clear::ClearCommand;
pub use delete::DeleteCommand;
pub use edit::{EditApplicantDescriptor, EditCommand};
pub use find::FindCommand;
pub use history::{RedoCommand, UndoCommand};
pub use list::ListCommand;
pub use view::ViewCommand;

pub const MESSAGE_INVALID_APPLICANT_DISPLAYED_INDEX: &str =
    "The applicant index provided is invalid";
pub const MESSAGE_DUPLICATE_APPLICANT: &str = "This applicant already exists in Intern Watcher.";
pub const MESSAGE_APPLICANT_NOT_FOUND: &str = "The applicant could not be found.";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// A request that can run against the model.
pub trait Command {
    fn execute(&self, model: &mut Model) -> CommandOutcome;
}

/// Feedback returned to the caller after a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user.
    pub feedback: String,
    /// Applicant the presentation layer should open, if any.
    pub displayed: Option<Applicant>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            displayed: None,
        }
    }

    pub fn displaying(feedback: impl Into<String>, applicant: Applicant) -> Self {
        Self {
            feedback: feedback.into(),
            displayed: Some(applicant),
        }
    }
}

/// Command failure. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    DuplicateApplicant,
    ApplicantNotFound,
    /// One-based `index` is beyond the `len` visible applicants.
    IndexOutOfRange { index: usize, len: usize },
    NoFieldsEdited,
    /// Undo/redo requested with an empty history.
    NoOp(HistoryError),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateApplicant => f.write_str(MESSAGE_DUPLICATE_APPLICANT),
            Self::ApplicantNotFound => f.write_str(MESSAGE_APPLICANT_NOT_FOUND),
            Self::IndexOutOfRange { .. } => f.write_str(MESSAGE_INVALID_APPLICANT_DISPLAYED_INDEX),
            Self::NoFieldsEdited => f.write_str(MESSAGE_NOT_EDITED),
            Self::NoOp(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoOp(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BookError> for CommandError {
    fn from(value: BookError) -> Self {
        match value {
            BookError::DuplicateApplicant(_) => Self::DuplicateApplicant,
            BookError::ApplicantNotFound(_) => Self::ApplicantNotFound,
        }
    }
}

impl From<HistoryError> for CommandError {
    fn from(value: HistoryError) -> Self {
        Self::NoOp(value)
    }
}

/// One-based position in the currently displayed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayIndex(NonZeroUsize);

impl DisplayIndex {
    /// Returns `None` for zero.
    pub fn from_one_based(index: usize) -> Option<Self> {
        NonZeroUsize::new(index).map(Self)
    }

    pub fn from_zero_based(index: usize) -> Self {
        Self(NonZeroUsize::MIN.saturating_add(index))
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl Display for DisplayIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolves a display index against the model's visible list.
pub(crate) fn resolve_visible(model: &Model, index: DisplayIndex) -> Result<Applicant, CommandError> {
    let visible = model.filtered_applicants();
    visible
        .get(index.zero_based())
        .cloned()
        .ok_or(CommandError::IndexOutOfRange {
            index: index.one_based(),
            len: visible.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::{CommandError, DisplayIndex};
    use crate::history::undo::HistoryError;

    #[test]
    fn display_index_rejects_zero_and_converts() {
        assert!(DisplayIndex::from_one_based(0).is_none());
        let index = DisplayIndex::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(DisplayIndex::from_zero_based(2), index);
    }

    #[test]
    fn no_op_message_comes_from_history() {
        let err = CommandError::from(HistoryError::NothingToRedo);
        assert_eq!(err.to_string(), "No more commands to redo!");
    }
}
