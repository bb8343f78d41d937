//! Filters the displayed list.

use super::{Command, CommandOutcome, CommandResult};
use crate::service::model::Model;
use crate::view::predicate::ApplicantPredicate;

/// Narrows the visible list to applicants matching a predicate.
///
/// The book is never touched, so find is not recorded in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: ApplicantPredicate,
}

impl FindCommand {
    pub fn new(predicate: ApplicantPredicate) -> Self {
        Self { predicate }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        let predicate = self.predicate.clone();
        model.update_filter(move |applicant| predicate.matches(applicant));
        Ok(CommandResult::new(format!(
            "{} applicants listed!",
            model.filtered_applicants().len()
        )))
    }
}
