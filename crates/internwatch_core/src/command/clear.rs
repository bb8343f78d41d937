//! Removes every applicant.

use super::{Command, CommandOutcome, CommandResult};
use crate::service::model::Model;

pub const MESSAGE_SUCCESS: &str = "Applicant list has been cleared!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome {
        model.commit();
        model.clear_applicants();
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}
