//! Deletes the applicant at a displayed index.

use super::{resolve_visible, Command, CommandOutcome, CommandResult, DisplayIndex};
use crate::service::model::Model;

pub const MESSAGE_DELETE_APPLICANT_SUCCESS: &str = "Deleted Applicant";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteCommand {
    index: DisplayIndex,
}

impl DeleteCommand {
    pub fn new(index: DisplayIndex) -> Self {
        Self { index }
    }
}

impl Command for DeleteCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        let target = resolve_visible(model, self.index)?;

        model.commit();
        let removed = model.delete_applicant(&target)?;
        Ok(CommandResult::new(format!(
            "{MESSAGE_DELETE_APPLICANT_SUCCESS}: {removed}"
        )))
    }
}
