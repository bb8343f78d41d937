//! Opens one applicant's details.

use super::{resolve_visible, Command, CommandOutcome, CommandResult, DisplayIndex};
use crate::service::model::Model;

pub const MESSAGE_VIEW_APPLICANT_SUCCESS: &str = "Viewing Applicant";

/// Returns the applicant at `index` as the result's displayed applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCommand {
    index: DisplayIndex,
}

impl ViewCommand {
    pub fn new(index: DisplayIndex) -> Self {
        Self { index }
    }
}

impl Command for ViewCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        let applicant = resolve_visible(model, self.index)?;
        model.display_applicant(applicant.clone());
        Ok(CommandResult::displaying(
            format!("{MESSAGE_VIEW_APPLICANT_SUCCESS}: {}", applicant.name()),
            applicant,
        ))
    }
}
